//! RecomputeAllScoresHandler - Batch recomputation of every known entity.
//!
//! Entities are recomputed independently with bounded concurrency. A failure
//! for one entity is recorded in the summary and does not stop the batch.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{info, warn};

use super::compute_readiness_score::{ComputeReadinessScoreCommand, ComputeReadinessScoreHandler};
use crate::domain::foundation::EntityId;
use crate::domain::readiness::{ReadinessError, ScoringModel};
use crate::ports::{ScoreInputProvider, ScoreRecordRepository};

/// Command to recompute every entity the provider knows about.
#[derive(Debug, Clone)]
pub struct RecomputeAllScoresCommand {
    /// Maximum recomputations in flight at once.
    pub max_concurrency: usize,
}

/// One entity that could not be recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityFailure {
    pub entity_id: EntityId,
    pub code: String,
    pub message: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRecomputeSummary {
    pub total: usize,
    pub succeeded: usize,
    /// Failures ordered by entity id.
    pub failures: Vec<EntityFailure>,
}

impl BatchRecomputeSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Handler for batch recomputation.
pub struct RecomputeAllScoresHandler {
    provider: Arc<dyn ScoreInputProvider>,
    compute: ComputeReadinessScoreHandler,
}

impl RecomputeAllScoresHandler {
    pub fn new(
        provider: Arc<dyn ScoreInputProvider>,
        repository: Arc<dyn ScoreRecordRepository>,
    ) -> Self {
        Self {
            compute: ComputeReadinessScoreHandler::with_model(
                provider.clone(),
                repository,
                ScoringModel::CURRENT,
            ),
            provider,
        }
    }

    /// Recomputes every entity.
    ///
    /// # Errors
    ///
    /// Only listing the entities can fail the whole batch; per-entity
    /// failures are reported in the summary.
    pub async fn handle(
        &self,
        cmd: RecomputeAllScoresCommand,
    ) -> Result<BatchRecomputeSummary, ReadinessError> {
        let entity_ids = self
            .provider
            .list_entity_ids()
            .await
            .map_err(ReadinessError::from_provider)?;

        let total = entity_ids.len();
        let concurrency = cmd.max_concurrency.max(1);
        info!(total, concurrency, "Starting batch readiness recomputation");

        let outcomes: Vec<(EntityId, Result<(), ReadinessError>)> = stream::iter(entity_ids)
            .map(|entity_id| async move {
                let result = self
                    .compute
                    .handle(ComputeReadinessScoreCommand {
                        entity_id: entity_id.clone(),
                    })
                    .await
                    .map(|_| ());
                (entity_id, result)
            })
            .buffer_unordered(concurrency)
            .collect()
            .await;

        let mut summary = BatchRecomputeSummary {
            total,
            ..Default::default()
        };
        for (entity_id, result) in outcomes {
            match result {
                Ok(()) => summary.succeeded += 1,
                Err(err) => {
                    warn!(entity_id = %entity_id, error = %err, "Entity recomputation failed");
                    summary.failures.push(EntityFailure {
                        entity_id,
                        code: err.code().to_string(),
                        message: err.to_string(),
                    });
                }
            }
        }
        summary.failures.sort_by(|a, b| a.entity_id.cmp(&b.entity_id));

        info!(
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failures.len(),
            "Batch readiness recomputation finished"
        );

        Ok(summary)
    }
}
