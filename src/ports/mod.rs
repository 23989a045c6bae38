//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ScoreInputProvider` - Read-only source of scoring inputs per entity
//! - `ScoreRecordRepository` - Last computed score per entity (atomic upsert)

mod score_input_provider;
mod score_record_repository;

pub use score_input_provider::ScoreInputProvider;
pub use score_record_repository::ScoreRecordRepository;
