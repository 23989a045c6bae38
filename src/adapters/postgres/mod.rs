//! PostgreSQL adapters - Database implementations for readiness ports.
//!
//! - `PostgresScoreInputReader` - Assembles score inputs from CRM tables
//! - `PostgresScoreRecordRepository` - Last computed score per entity
//! - `connect_pool` - Pool construction from `DatabaseConfig`

mod pool;
mod score_input_reader;
mod score_record_repository;

pub use pool::connect_pool;
pub use score_input_reader::PostgresScoreInputReader;
pub use score_record_repository::PostgresScoreRecordRepository;
