//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Readiness queries
    GetReadinessScoreHandler, GetReadinessScoreQuery, GetReadinessScoreResult,
    GetScoreBreakdownHandler, GetScoreBreakdownQuery, GetScoreBreakdownResult,
    // Readiness commands
    ComputeReadinessScoreCommand, ComputeReadinessScoreHandler, ComputeReadinessScoreResult,
    RecomputeAllScoresCommand, RecomputeAllScoresHandler, BatchRecomputeSummary, EntityFailure,
};
