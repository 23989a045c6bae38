//! exit-readiness: compute and inspect business exit-readiness scores.
//!
//! Results are printed to stdout as JSON; logs go to stderr.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exit_readiness::adapters::{
    connect_pool, InMemoryScoreInputProvider, InMemoryScoreRecordRepository,
    PostgresScoreInputReader, PostgresScoreRecordRepository,
};
use exit_readiness::application::{
    ComputeReadinessScoreCommand, ComputeReadinessScoreHandler, GetReadinessScoreHandler,
    GetReadinessScoreQuery, GetScoreBreakdownHandler, GetScoreBreakdownQuery,
    RecomputeAllScoresCommand, RecomputeAllScoresHandler,
};
use exit_readiness::config::{
    AppConfig, ConfigError, LoggingConfig, ValidationError as ConfigValidationError,
};
use exit_readiness::domain::foundation::{DomainError, EntityId};
use exit_readiness::domain::readiness::{ReadinessError, ScoreInput};
use exit_readiness::ports::{ScoreInputProvider, ScoreRecordRepository};

#[derive(Parser)]
#[command(name = "exit-readiness")]
#[command(version, about = "Business exit-readiness scoring engine", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Error occurred
    2  Batch finished with per-entity failures

EXAMPLES:
    # Cached score (computed on first request)
    exit-readiness get talent_123

    # Score from a local snapshot file instead of PostgreSQL
    exit-readiness --inputs snapshot.json breakdown talent_123

    # Nightly batch
    exit-readiness recompute-all --concurrency 16")]
struct Cli {
    /// JSON file mapping entity ids to score inputs; uses in-memory stores
    #[arg(long, global = true, env = "EXIT_READINESS_INPUTS")]
    inputs: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the cached score, computing it on first request
    Get { entity_id: EntityId },

    /// Recompute, persist and print the score
    Compute { entity_id: EntityId },

    /// Print the per-dimension breakdown
    Breakdown { entity_id: EntityId },

    /// Recompute every known entity
    RecomputeAll {
        /// Overrides `batch.max_concurrency`
        #[arg(long)]
        concurrency: Option<usize>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    ConfigValidation(#[from] ConfigValidationError),

    #[error("Failed to read inputs file {path}: {source}")]
    InputsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid inputs file {path}: {source}")]
    InputsFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Readiness(#[from] ReadinessError),

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

struct Ports {
    provider: Arc<dyn ScoreInputProvider>,
    repository: Arc<dyn ScoreRecordRepository>,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = logging.env_filter();

    if logging.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn in_memory_ports(path: &Path) -> Result<Ports, CliError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::InputsRead {
            path: path.to_path_buf(),
            source,
        })?;
    let inputs: BTreeMap<EntityId, ScoreInput> =
        serde_json::from_str(&raw).map_err(|source| CliError::InputsFormat {
            path: path.to_path_buf(),
            source,
        })?;

    let provider = InMemoryScoreInputProvider::new();
    for (entity_id, input) in inputs {
        provider.insert(entity_id, input).await;
    }

    Ok(Ports {
        provider: Arc::new(provider),
        repository: Arc::new(InMemoryScoreRecordRepository::new()),
    })
}

async fn postgres_ports(config: &AppConfig) -> Result<Ports, CliError> {
    let pool = connect_pool(config.require_database()?).await?;

    Ok(Ports {
        provider: Arc::new(PostgresScoreInputReader::new(pool.clone())),
        repository: Arc::new(PostgresScoreRecordRepository::new(pool)),
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli, config: AppConfig) -> Result<ExitCode, CliError> {
    let ports = match &cli.inputs {
        Some(path) => in_memory_ports(path).await?,
        None => postgres_ports(&config).await?,
    };

    match cli.command {
        Command::Get { entity_id } => {
            let handler = GetReadinessScoreHandler::new(ports.provider, ports.repository);
            print_json(&handler.handle(GetReadinessScoreQuery { entity_id }).await?)?;
        }
        Command::Compute { entity_id } => {
            let handler = ComputeReadinessScoreHandler::new(ports.provider, ports.repository);
            print_json(&handler.handle(ComputeReadinessScoreCommand { entity_id }).await?)?;
        }
        Command::Breakdown { entity_id } => {
            let handler = GetScoreBreakdownHandler::new(ports.provider, ports.repository);
            print_json(&handler.handle(GetScoreBreakdownQuery { entity_id }).await?)?;
        }
        Command::RecomputeAll { concurrency } => {
            let handler = RecomputeAllScoresHandler::new(ports.provider, ports.repository);
            let summary = handler
                .handle(RecomputeAllScoresCommand {
                    max_concurrency: concurrency.unwrap_or(config.batch.max_concurrency),
                })
                .await?;
            print_json(&summary)?;
            if !summary.is_clean() {
                return Ok(ExitCode::from(2));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load().map_err(CliError::from).and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging);

    match run(cli, config).await {
        Ok(code) => code,
        Err(err) => {
            match &err {
                CliError::Readiness(inner) => {
                    error!(code = %inner.code(), error = %err, "exit-readiness failed")
                }
                _ => error!(error = %err, "exit-readiness failed"),
            }
            ExitCode::FAILURE
        }
    }
}
