//! Readiness Module - Exit-readiness scoring of a business.
//!
//! Turns a snapshot of an entity's revenue, deals, assets and process
//! documentation into seven dimension scores, a weighted composite, a tier
//! and a short list of ranked recommendations.
//!
//! # Components
//!
//! - `extractors` - One pure function per dimension (input → 0..=100)
//! - `Aggregator` - Weighted composite and per-dimension impact
//! - `ReadinessTier` - Ordinal band of the composite
//! - `RecommendationGenerator` - Top-impact gaps mapped to catalogue actions
//! - `ScoreRecord` - Consistent, persistable result of the pipeline
//! - `ScoreBreakdown` - Per-dimension report view of a record
//!
//! Everything here is pure. Loading inputs and persisting records is done
//! through the ports in `crate::ports`.

mod aggregator;
mod breakdown;
mod components;
mod dimension;
mod errors;
pub mod extractors;
mod input;
mod model;
mod recommendations;
mod score_record;
mod tier;

pub use aggregator::Aggregator;
pub use breakdown::{DimensionDetail, ScoreBreakdown};
pub use components::ComponentScores;
pub use dimension::Dimension;
pub use errors::ReadinessError;
pub use input::{
    HistoricalDeal, LegalStatus, OwnedAsset, OwnershipStatus, ProcessDocument, RevenueStream,
    ScoreInput, FOUNDER_DEPENDENT_TAG,
};
pub use model::{ScoringModel, TierThresholds, WEIGHT_SCALE};
pub use recommendations::{
    catalogue_entry, CatalogueEntry, DimensionGap, Effort, Priority, Recommendation,
    RecommendationGenerator, Trigger, CATALOGUE, CONSIDERED_DIMENSIONS,
};
pub use score_record::ScoreRecord;
pub use tier::ReadinessTier;
