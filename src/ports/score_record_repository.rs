//! Score record repository port.
//!
//! Holds at most one [`ScoreRecord`] per entity: the last computed score.

use crate::domain::foundation::{DomainError, EntityId};
use crate::domain::readiness::ScoreRecord;
use async_trait::async_trait;

/// Repository port for the last computed score of each entity.
///
/// Implementations must ensure:
/// - `upsert` replaces the whole record atomically (no torn reads)
/// - concurrent upserts for one entity resolve to a single stored record
#[async_trait]
pub trait ScoreRecordRepository: Send + Sync {
    /// Find the cached record for an entity.
    ///
    /// Returns `None` if the entity has never been scored.
    ///
    /// # Errors
    ///
    /// - `CorruptScoreRecord` if the stored row disagrees with its components
    /// - `DatabaseError` on read failure
    async fn find_by_entity(&self, entity_id: &EntityId)
        -> Result<Option<ScoreRecord>, DomainError>;

    /// Insert or replace the record for `record.entity_id()`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn upsert(&self, record: &ScoreRecord) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn score_record_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ScoreRecordRepository) {}
    }
}
