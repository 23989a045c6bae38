//! Score breakdown view - per-dimension detail for reports.

use serde::Serialize;

use super::aggregator::Aggregator;
use super::dimension::Dimension;
use super::model::ScoringModel;
use super::score_record::ScoreRecord;
use super::tier::ReadinessTier;
use crate::domain::foundation::{EntityId, Percentage, Timestamp};

/// Detail of one dimension within a breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionDetail {
    pub dimension: Dimension,
    pub display: &'static str,
    pub description: &'static str,
    pub score: Percentage,
    pub weight: f64,
    /// Composite points this dimension contributes.
    pub contribution: f64,
    /// Composite points available by closing this dimension's gap.
    pub impact: f64,
    pub low_confidence: bool,
}

/// Overall score plus the detail behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub entity_id: EntityId,
    pub overall_score: Percentage,
    pub tier: ReadinessTier,
    pub scoring_version: u32,
    pub computed_at: Timestamp,
    /// Dimensions in declaration order.
    pub dimensions: Vec<DimensionDetail>,
}

impl ScoreBreakdown {
    /// Expands a record using the model that produced it.
    pub fn from_record(record: &ScoreRecord, model: &ScoringModel) -> Self {
        let dimensions = record
            .components()
            .iter()
            .map(|(dimension, score)| DimensionDetail {
                dimension,
                display: dimension.display_name(),
                description: dimension.description(),
                score,
                weight: model.weight(dimension),
                contribution: f64::from(score.value()) * model.weight(dimension),
                impact: Aggregator::impact(model, dimension, score),
                low_confidence: dimension.is_low_confidence(),
            })
            .collect();

        Self {
            entity_id: record.entity_id().clone(),
            overall_score: record.overall_score(),
            tier: record.tier(),
            scoring_version: record.scoring_version(),
            computed_at: record.computed_at(),
            dimensions,
        }
    }

    /// Returns the detail for one dimension.
    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionDetail> {
        self.dimensions.iter().find(|d| d.dimension == dimension)
    }
}
