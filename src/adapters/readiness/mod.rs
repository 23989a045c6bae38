//! Readiness adapters that need no external infrastructure.

mod in_memory;

pub use in_memory::{InMemoryScoreInputProvider, InMemoryScoreRecordRepository};
