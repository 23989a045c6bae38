//! GetReadinessScoreHandler - Query handler with cache-or-compute semantics.

use std::sync::Arc;

use tracing::debug;

use super::compute_readiness_score::{ComputeReadinessScoreCommand, ComputeReadinessScoreHandler};
use crate::domain::foundation::EntityId;
use crate::domain::readiness::{ReadinessError, ScoreRecord, ScoringModel};
use crate::ports::{ScoreInputProvider, ScoreRecordRepository};

/// Query for an entity's readiness score.
#[derive(Debug, Clone)]
pub struct GetReadinessScoreQuery {
    pub entity_id: EntityId,
}

pub type GetReadinessScoreResult = ScoreRecord;

/// Returns the cached record when it was produced by the current model,
/// otherwise recomputes, persists and returns a fresh one.
pub struct GetReadinessScoreHandler {
    repository: Arc<dyn ScoreRecordRepository>,
    compute: ComputeReadinessScoreHandler,
}

impl GetReadinessScoreHandler {
    pub fn new(
        provider: Arc<dyn ScoreInputProvider>,
        repository: Arc<dyn ScoreRecordRepository>,
    ) -> Self {
        Self::with_model(provider, repository, ScoringModel::CURRENT)
    }

    pub fn with_model(
        provider: Arc<dyn ScoreInputProvider>,
        repository: Arc<dyn ScoreRecordRepository>,
        model: ScoringModel,
    ) -> Self {
        Self {
            compute: ComputeReadinessScoreHandler::with_model(provider, repository.clone(), model),
            repository,
        }
    }

    pub async fn handle(
        &self,
        query: GetReadinessScoreQuery,
    ) -> Result<GetReadinessScoreResult, ReadinessError> {
        let cached = self
            .repository
            .find_by_entity(&query.entity_id)
            .await
            .map_err(ReadinessError::from_store_read)?;

        match cached {
            Some(record) if !record.is_stale_for(self.compute.model()) => {
                debug!(entity_id = %query.entity_id, "Readiness score cache hit");
                return Ok(record);
            }
            Some(record) => {
                debug!(
                    entity_id = %query.entity_id,
                    cached_version = record.scoring_version(),
                    current_version = self.compute.model().version,
                    "Cached readiness score is stale"
                );
            }
            None => {
                debug!(entity_id = %query.entity_id, "Readiness score cache miss");
            }
        }

        self.compute
            .handle(ComputeReadinessScoreCommand {
                entity_id: query.entity_id,
            })
            .await
    }
}
