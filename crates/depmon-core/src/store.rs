//! # Storage Port
//!
//! The capability the core services consume, plus an in-memory
//! implementation for tests and local runs.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RepositoryStore                                                        │
//! │  ├── count()               total records                               │
//! │  ├── slice(offset, limit)  up to `limit` records from `offset`,        │
//! │  │                         ascending repository_id, empty past the end │
//! │  ├── get_by_id(id)         point lookup, None when absent              │
//! │  └── update(id, changes)   overwrite mutable fields, bump updated_at,  │
//! │                            StoreError::NotFound when absent            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Implementations own ordering and persistence. The services hold them
//! behind `Arc<dyn RepositoryStore>` and never cache what they return.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::types::{next_updated_at, Repository, RepositoryChanges};

/// Persistence capability for repository records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryStore: Send + Sync {
    /// Total number of records.
    async fn count(&self) -> StoreResult<i64>;

    /// Up to `limit` records starting at `offset`, in stable order.
    async fn slice(&self, offset: i64, limit: i64) -> StoreResult<Vec<Repository>>;

    /// Point lookup.
    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Repository>>;

    /// Overwrites the mutable fields of an existing record.
    async fn update(&self, id: i64, changes: RepositoryChanges) -> StoreResult<Repository>;
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// Store backed by an ordered map, keyed by `repository_id`.
///
/// ## Usage
/// ```rust,ignore
/// let store = InMemoryRepositoryStore::with_records(fixtures);
/// let paginator = Paginator::new(Arc::new(store));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryRepositoryStore {
    records: RwLock<BTreeMap<i64, Repository>>,
}

impl InMemoryRepositoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `records`. Later duplicates of an id win.
    pub fn with_records(records: impl IntoIterator<Item = Repository>) -> Self {
        let records = records
            .into_iter()
            .map(|r| (r.repository_id, r))
            .collect::<BTreeMap<_, _>>();
        InMemoryRepositoryStore {
            records: RwLock::new(records),
        }
    }

    /// Adds or replaces a record, bypassing update rules. Fixture helper.
    pub async fn insert(&self, record: Repository) {
        self.records.write().await.insert(record.repository_id, record);
    }

    /// Copy of every record in store order.
    pub async fn snapshot(&self) -> Vec<Repository> {
        self.records.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl RepositoryStore for InMemoryRepositoryStore {
    async fn count(&self) -> StoreResult<i64> {
        Ok(self.records.read().await.len() as i64)
    }

    async fn slice(&self, offset: i64, limit: i64) -> StoreResult<Vec<Repository>> {
        if offset < 0 || limit <= 0 {
            return Ok(Vec::new());
        }
        let records = self.records.read().await;
        Ok(records
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Repository>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn update(&self, id: i64, changes: RepositoryChanges) -> StoreResult<Repository> {
        let mut records = self.records.write().await;
        let record = records.get_mut(&id).ok_or(StoreError::NotFound { id })?;

        let updated_at = next_updated_at(record.updated_at, Utc::now());
        record.apply(changes, updated_at);
        Ok(record.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: i64) -> Repository {
        let created = Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap();
        Repository {
            repository_id: id,
            html_url: format!("https://github.com/depmon/sample-{id}"),
            description: None,
            archived: false,
            active: true,
            created_at: created,
            updated_at: created,
        }
    }

    #[tokio::test]
    async fn test_slice_is_ordered_by_id() {
        let store = InMemoryRepositoryStore::with_records([record(3), record(1), record(2)]);

        let ids: Vec<i64> = store
            .slice(0, 10)
            .await
            .unwrap()
            .iter()
            .map(|r| r.repository_id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_slice_bounds() {
        let store = InMemoryRepositoryStore::with_records((1..=10).map(record));

        assert_eq!(store.count().await.unwrap(), 10);
        assert_eq!(store.slice(8, 4).await.unwrap().len(), 2);
        assert!(store.slice(10, 4).await.unwrap().is_empty());
        assert!(store.slice(200, 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_id_fails() {
        let store = InMemoryRepositoryStore::new();
        let err = store.update(5, record(5).changes()).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound { id: 5 });
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_overwrites_mutable_fields() {
        let store = InMemoryRepositoryStore::with_records([record(1)]);
        let before = store.get_by_id(1).await.unwrap().unwrap();

        let changes = RepositoryChanges {
            html_url: "https://github.com/depmon/renamed".to_string(),
            description: Some("renamed".to_string()),
            archived: true,
            active: false,
        };
        let after = store.update(1, changes.clone()).await.unwrap();

        assert_eq!(after.changes(), changes);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
        assert_eq!(store.get_by_id(1).await.unwrap(), Some(after));
    }
}
