//! GetScoreBreakdownHandler - Query handler for the per-dimension report.

use std::sync::Arc;

use super::get_readiness_score::{GetReadinessScoreHandler, GetReadinessScoreQuery};
use crate::domain::foundation::EntityId;
use crate::domain::readiness::{ReadinessError, ScoreBreakdown, ScoringModel};
use crate::ports::{ScoreInputProvider, ScoreRecordRepository};

/// Query for an entity's score breakdown.
#[derive(Debug, Clone)]
pub struct GetScoreBreakdownQuery {
    pub entity_id: EntityId,
}

pub type GetScoreBreakdownResult = ScoreBreakdown;

/// Expands the (cached or freshly computed) score into a breakdown.
pub struct GetScoreBreakdownHandler {
    scores: GetReadinessScoreHandler,
}

impl GetScoreBreakdownHandler {
    pub fn new(
        provider: Arc<dyn ScoreInputProvider>,
        repository: Arc<dyn ScoreRecordRepository>,
    ) -> Self {
        Self {
            scores: GetReadinessScoreHandler::new(provider, repository),
        }
    }

    pub async fn handle(
        &self,
        query: GetScoreBreakdownQuery,
    ) -> Result<GetScoreBreakdownResult, ReadinessError> {
        let record = self
            .scores
            .handle(GetReadinessScoreQuery {
                entity_id: query.entity_id,
            })
            .await?;

        let model = ScoringModel::for_version(record.scoring_version()).ok_or_else(|| {
            ReadinessError::CorruptRecord(format!(
                "Unknown scoring version {} for {}",
                record.scoring_version(),
                record.entity_id()
            ))
        })?;

        Ok(ScoreBreakdown::from_record(&record, model))
    }
}
