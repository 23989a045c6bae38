//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `EXIT_READINESS` prefix and nested values use double underscores as separators.
//!
//! Scoring weights and tier thresholds are deliberately absent: they are part of
//! the versioned `ScoringModel`, not runtime settings.
//!
//! # Example
//!
//! ```no_run
//! use exit_readiness::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Batch concurrency: {}", config.batch.max_concurrency);
//! ```

mod batch;
mod database;
mod error;
mod logging;

pub use batch::{BatchConfig, MAX_BATCH_CONCURRENCY};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// PostgreSQL connection; absent when running against in-memory stores
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub batch: BatchConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `EXIT_READINESS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `EXIT_READINESS__DATABASE__URL=...` -> `database.url = ...`
    /// - `EXIT_READINESS__BATCH__MAX_CONCURRENCY=16` -> `batch.max_concurrency = 16`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("EXIT_READINESS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.logging.validate()?;
        self.batch.validate()?;
        Ok(())
    }

    /// The database section, required by the PostgreSQL adapters.
    pub fn require_database(&self) -> Result<&DatabaseConfig, ValidationError> {
        self.database
            .as_ref()
            .ok_or(ValidationError::MissingRequired("DATABASE__URL"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "EXIT_READINESS__DATABASE__URL",
        "EXIT_READINESS__DATABASE__MAX_CONNECTIONS",
        "EXIT_READINESS__LOGGING__JSON",
        "EXIT_READINESS__LOGGING__FILTER",
        "EXIT_READINESS__BATCH__MAX_CONCURRENCY",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn loads_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        let config = result.unwrap();
        assert!(config.database.is_none());
        assert!(!config.logging.json);
        assert_eq!(config.batch.max_concurrency, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn loads_nested_values_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("EXIT_READINESS__DATABASE__URL", "postgresql://test@localhost/crm");
        env::set_var("EXIT_READINESS__DATABASE__MAX_CONNECTIONS", "4");
        env::set_var("EXIT_READINESS__LOGGING__JSON", "true");
        env::set_var("EXIT_READINESS__BATCH__MAX_CONCURRENCY", "3");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        let database = config.require_database().unwrap();
        assert_eq!(database.url, "postgresql://test@localhost/crm");
        assert_eq!(database.max_connections, 4);
        assert!(config.logging.json);
        assert_eq!(config.batch.max_concurrency, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_batch_concurrency_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("EXIT_READINESS__BATCH__MAX_CONCURRENCY", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBatchConcurrency { .. })
        ));
    }

    #[test]
    fn missing_database_is_reported_when_required() {
        let config = AppConfig::default();
        assert_eq!(
            config.require_database().unwrap_err(),
            ValidationError::MissingRequired("DATABASE__URL")
        );
    }
}
