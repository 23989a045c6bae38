//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod readiness;

pub use readiness::{
    BatchRecomputeSummary, ComputeReadinessScoreCommand, ComputeReadinessScoreHandler,
    ComputeReadinessScoreResult, EntityFailure, GetReadinessScoreHandler, GetReadinessScoreQuery,
    GetReadinessScoreResult, GetScoreBreakdownHandler, GetScoreBreakdownQuery,
    GetScoreBreakdownResult, RecomputeAllScoresCommand, RecomputeAllScoresHandler,
};
