//! Readiness score handlers.
//!
//! - `GetReadinessScoreHandler` - cache-or-compute read
//! - `ComputeReadinessScoreHandler` - forced recompute and replace
//! - `GetScoreBreakdownHandler` - per-dimension report
//! - `RecomputeAllScoresHandler` - batch recompute with bounded concurrency

mod compute_readiness_score;
mod get_readiness_score;
mod get_score_breakdown;
mod recompute_all_scores;

pub use compute_readiness_score::{
    ComputeReadinessScoreCommand, ComputeReadinessScoreHandler, ComputeReadinessScoreResult,
};
pub use get_readiness_score::{
    GetReadinessScoreHandler, GetReadinessScoreQuery, GetReadinessScoreResult,
};
pub use get_score_breakdown::{
    GetScoreBreakdownHandler, GetScoreBreakdownQuery, GetScoreBreakdownResult,
};
pub use recompute_all_scores::{
    BatchRecomputeSummary, EntityFailure, RecomputeAllScoresCommand, RecomputeAllScoresHandler,
};
