//! ScoreRecord - the persisted readiness assessment of one entity.
//!
//! A record can only come into existence by running the full pipeline
//! (extract → aggregate → classify → recommend) or by reconstituting a
//! stored row whose overall score and tier are re-derived and checked. The
//! overall score is therefore never set independently of its components.

use serde::Serialize;

use super::aggregator::Aggregator;
use super::components::ComponentScores;
use super::extractors;
use super::input::ScoreInput;
use super::model::ScoringModel;
use super::recommendations::{Recommendation, RecommendationGenerator};
use super::tier::ReadinessTier;
use crate::domain::foundation::{
    DomainError, EntityId, ErrorCode, Percentage, Timestamp, ValidationError,
};

/// Last computed readiness score for an entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    entity_id: EntityId,
    overall_score: Percentage,
    tier: ReadinessTier,
    components: ComponentScores,
    recommendations: Vec<Recommendation>,
    scoring_version: u32,
    computed_at: Timestamp,
}

impl ScoreRecord {
    /// Scores an input snapshot, stamping the record with the current time.
    ///
    /// # Errors
    ///
    /// Returns the first contract violation found in `input`; no partial
    /// record is produced.
    pub fn compute(
        entity_id: EntityId,
        input: &ScoreInput,
        model: &ScoringModel,
    ) -> Result<Self, ValidationError> {
        Self::compute_at(entity_id, input, model, Timestamp::now())
    }

    /// Same as [`ScoreRecord::compute`] with an explicit timestamp.
    pub fn compute_at(
        entity_id: EntityId,
        input: &ScoreInput,
        model: &ScoringModel,
        computed_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        input.validate()?;

        let components = extractors::extract_all(input);
        let overall_score = Aggregator::overall_score(model, &components);

        Ok(Self {
            entity_id,
            overall_score,
            tier: ReadinessTier::classify(model, overall_score),
            components,
            recommendations: RecommendationGenerator::generate(model, &components),
            scoring_version: model.version,
            computed_at,
        })
    }

    /// Rebuilds a record from storage.
    ///
    /// The stored overall score and tier must equal the values re-derived
    /// from the stored components under the model that produced them.
    ///
    /// # Errors
    ///
    /// - `CorruptScoreRecord` if the scoring version is unknown or the
    ///   stored score or tier has drifted from its components
    pub fn reconstitute(
        entity_id: EntityId,
        stored_overall: Percentage,
        stored_tier: ReadinessTier,
        components: ComponentScores,
        recommendations: Vec<Recommendation>,
        scoring_version: u32,
        computed_at: Timestamp,
    ) -> Result<Self, DomainError> {
        let model = ScoringModel::for_version(scoring_version).ok_or_else(|| {
            DomainError::new(
                ErrorCode::CorruptScoreRecord,
                format!("Unknown scoring version {} for {}", scoring_version, entity_id),
            )
        })?;

        let overall_score = Aggregator::overall_score(model, &components);
        if overall_score != stored_overall {
            return Err(DomainError::new(
                ErrorCode::CorruptScoreRecord,
                format!(
                    "Stored overall score {} for {} does not match components ({})",
                    stored_overall, entity_id, overall_score
                ),
            ));
        }

        let tier = ReadinessTier::classify(model, overall_score);
        if tier != stored_tier {
            return Err(DomainError::new(
                ErrorCode::CorruptScoreRecord,
                format!(
                    "Stored tier {} for {} does not match score {} ({})",
                    stored_tier, entity_id, overall_score, tier
                ),
            ));
        }

        Ok(Self {
            entity_id,
            overall_score,
            tier,
            components,
            recommendations,
            scoring_version,
            computed_at,
        })
    }

    pub fn entity_id(&self) -> &EntityId {
        &self.entity_id
    }

    pub fn overall_score(&self) -> Percentage {
        self.overall_score
    }

    pub fn tier(&self) -> ReadinessTier {
        self.tier
    }

    pub fn components(&self) -> &ComponentScores {
        &self.components
    }

    /// Recommendations in display order (highest impact first).
    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn scoring_version(&self) -> u32 {
        self.scoring_version
    }

    pub fn computed_at(&self) -> Timestamp {
        self.computed_at
    }

    /// Whether the record was produced by a model other than `model`.
    pub fn is_stale_for(&self, model: &ScoringModel) -> bool {
        self.scoring_version != model.version
    }
}
