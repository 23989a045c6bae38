//! In-memory readiness adapters.
//!
//! Seedable input provider and score store for tests and for CLI runs
//! against an `--inputs` snapshot file.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, EntityId};
use crate::domain::readiness::{ScoreInput, ScoreRecord};
use crate::ports::{ScoreInputProvider, ScoreRecordRepository};

/// Input provider backed by a map of entity → snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScoreInputProvider {
    inputs: Arc<RwLock<BTreeMap<EntityId, ScoreInput>>>,
}

impl InMemoryScoreInputProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the snapshot for an entity.
    pub async fn insert(&self, entity_id: EntityId, input: ScoreInput) {
        self.inputs.write().await.insert(entity_id, input);
    }

    /// Removes an entity entirely.
    pub async fn remove(&self, entity_id: &EntityId) {
        self.inputs.write().await.remove(entity_id);
    }
}

#[async_trait]
impl ScoreInputProvider for InMemoryScoreInputProvider {
    async fn load(&self, entity_id: &EntityId) -> Result<Option<ScoreInput>, DomainError> {
        Ok(self.inputs.read().await.get(entity_id).cloned())
    }

    async fn list_entity_ids(&self) -> Result<Vec<EntityId>, DomainError> {
        Ok(self.inputs.read().await.keys().cloned().collect())
    }
}

/// Score store keyed by entity.
///
/// A whole record is swapped under the write lock, so readers only ever
/// see a complete record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScoreRecordRepository {
    records: Arc<RwLock<HashMap<EntityId, ScoreRecord>>>,
    upserts: Arc<AtomicUsize>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryScoreRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail.
    pub fn failing() -> Self {
        let repo = Self::default();
        repo.set_fail_writes(true);
        repo
    }

    /// Toggles write failure injection.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful upserts so far.
    pub fn upsert_count(&self) -> usize {
        self.upserts.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ScoreRecordRepository for InMemoryScoreRecordRepository {
    async fn find_by_entity(
        &self,
        entity_id: &EntityId,
    ) -> Result<Option<ScoreRecord>, DomainError> {
        Ok(self.records.read().await.get(entity_id).cloned())
    }

    async fn upsert(&self, record: &ScoreRecord) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::database(
                "Failed to upsert score record",
                "simulated write failure",
            ));
        }

        let mut records = self.records.write().await;
        records.insert(record.entity_id().clone(), record.clone());
        self.upserts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::readiness::ScoringModel;

    fn entity(id: &str) -> EntityId {
        EntityId::new(id).unwrap()
    }

    fn record(id: &str) -> ScoreRecord {
        ScoreRecord::compute(entity(id), &ScoreInput::default(), &ScoringModel::CURRENT).unwrap()
    }

    #[tokio::test]
    async fn provider_returns_none_for_unknown_entity() {
        let provider = InMemoryScoreInputProvider::new();
        assert!(provider.load(&entity("ghost")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn provider_lists_entities_in_id_order() {
        let provider = InMemoryScoreInputProvider::new();
        provider.insert(entity("b"), ScoreInput::default()).await;
        provider.insert(entity("a"), ScoreInput::default()).await;

        let ids = provider.list_entity_ids().await.unwrap();
        assert_eq!(ids, vec![entity("a"), entity("b")]);
    }

    #[tokio::test]
    async fn upsert_replaces_existing_record() {
        let repo = InMemoryScoreRecordRepository::new();
        repo.upsert(&record("t1")).await.unwrap();
        repo.upsert(&record("t1")).await.unwrap();

        assert_eq!(repo.len().await, 1);
        assert_eq!(repo.upsert_count(), 2);
        assert!(repo.find_by_entity(&entity("t1")).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn failing_store_rejects_writes_and_keeps_nothing() {
        let repo = InMemoryScoreRecordRepository::failing();
        assert!(repo.upsert(&record("t1")).await.is_err());
        assert!(repo.is_empty().await);

        repo.set_fail_writes(false);
        assert!(repo.upsert(&record("t1")).await.is_ok());
    }
}
