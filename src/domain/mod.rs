//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `readiness` - Exit-readiness scoring: extractors, aggregation, tiers, recommendations

pub mod foundation;
pub mod readiness;
