//! Score input provider port (read side).
//!
//! Assembles the [`ScoreInput`] snapshot for one entity from whatever
//! system of record holds its revenue streams, deals, assets and process
//! documents.

use crate::domain::foundation::{DomainError, EntityId};
use crate::domain::readiness::ScoreInput;
use async_trait::async_trait;

/// Read-only source of scoring inputs.
///
/// Empty collections are a valid answer and must not be reported as an
/// error. `None` is reserved for entities with no business record at all.
#[async_trait]
pub trait ScoreInputProvider: Send + Sync {
    /// Load the input snapshot for an entity.
    ///
    /// Returns `None` if the entity does not exist.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if stored data violates the input contract
    /// - `DatabaseError` on read failure
    async fn load(&self, entity_id: &EntityId) -> Result<Option<ScoreInput>, DomainError>;

    /// List every entity that can be scored, ordered by id.
    async fn list_entity_ids(&self) -> Result<Vec<EntityId>, DomainError>;
}
