//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `readiness` - In-memory input provider and score store
//! - `postgres` - PostgreSQL input reader and score store

pub mod postgres;
pub mod readiness;

pub use postgres::{connect_pool, PostgresScoreInputReader, PostgresScoreRecordRepository};
pub use readiness::{InMemoryScoreInputProvider, InMemoryScoreRecordRepository};
