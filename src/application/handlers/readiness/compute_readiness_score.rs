//! ComputeReadinessScoreHandler - Command handler for forced recomputation.
//!
//! Always recomputes from a fresh input snapshot and replaces whatever
//! record the store holds for the entity.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::foundation::EntityId;
use crate::domain::readiness::{ReadinessError, ScoreRecord, ScoringModel};
use crate::ports::{ScoreInputProvider, ScoreRecordRepository};

/// Command to recompute one entity's score.
#[derive(Debug, Clone)]
pub struct ComputeReadinessScoreCommand {
    pub entity_id: EntityId,
}

/// Result of a successful recomputation: the record as persisted.
pub type ComputeReadinessScoreResult = ScoreRecord;

/// Handler for recomputing and persisting readiness scores.
pub struct ComputeReadinessScoreHandler {
    provider: Arc<dyn ScoreInputProvider>,
    repository: Arc<dyn ScoreRecordRepository>,
    model: ScoringModel,
}

impl ComputeReadinessScoreHandler {
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
            provider,
            repository,
            model,
        }
    }

    /// The model new records are computed with.
    pub fn model(&self) -> &ScoringModel {
        &self.model
    }

    pub async fn handle(
        &self,
        cmd: ComputeReadinessScoreCommand,
    ) -> Result<ComputeReadinessScoreResult, ReadinessError> {
        let entity_id = cmd.entity_id;

        // 1. Load the input snapshot
        let input = self
            .provider
            .load(&entity_id)
            .await
            .map_err(ReadinessError::from_provider)?
            .ok_or_else(|| ReadinessError::EntityNotFound(entity_id.clone()))?;

        debug!(
            entity_id = %entity_id,
            revenue_streams = input.revenue_streams.len(),
            historical_deals = input.historical_deals.len(),
            owned_assets = input.owned_assets.len(),
            process_documents = input.process_documents.len(),
            "Loaded score input"
        );

        // 2. Run the scoring pipeline
        let record = ScoreRecord::compute(entity_id.clone(), &input, &self.model).map_err(|e| {
            warn!(entity_id = %entity_id, field = e.field(), error = %e, "Rejected malformed score input");
            ReadinessError::MalformedInput(e)
        })?;

        // 3. Persist before returning
        self.repository.upsert(&record).await.map_err(|e| {
            error!(entity_id = %entity_id, error = %e, "Failed to persist score record");
            ReadinessError::from_store_write(e)
        })?;

        info!(
            entity_id = %entity_id,
            overall_score = record.overall_score().value(),
            tier = %record.tier(),
            recommendations = record.recommendations().len(),
            scoring_version = record.scoring_version(),
            "Readiness score recomputed"
        );

        Ok(record)
    }
}
