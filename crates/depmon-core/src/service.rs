//! # Services
//!
//! The operations the HTTP layer calls. Each service holds an injected
//! [`RepositoryStore`] and nothing else: no caching, no state between calls.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Paginator::get_page(page, per_page)                                    │
//! │       │                                                                 │
//! │       ├── PageRequest::new ── invalid? → ValidationError (no store I/O)│
//! │       ▼                                                                 │
//! │  store.count() → found                                                  │
//! │       │                                                                 │
//! │       ├── offset >= found? → empty items (no slice query)              │
//! │       ▼                                                                 │
//! │  store.slice(offset, limit) → items                                     │
//! │                                                                         │
//! │  RecordUpdater::update_record(path_id, payload)                         │
//! │       │                                                                 │
//! │       ├── path_id != payload id? → ValidationError (no store I/O)      │
//! │       ▼                                                                 │
//! │  store.update(path_id, payload.changes()) → NotFound | Repository      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::error::CoreResult;
use crate::pagination::PageRequest;
use crate::store::RepositoryStore;
use crate::types::{Page, Repository};
use crate::validation::validate_identity;

// =============================================================================
// Paginator
// =============================================================================

/// Pages through the full record collection.
#[derive(Clone)]
pub struct Paginator {
    store: Arc<dyn RepositoryStore>,
}

impl Paginator {
    pub fn new(store: Arc<dyn RepositoryStore>) -> Self {
        Paginator { store }
    }

    /// Returns page `page` (zero-based) of `per_page` records.
    ///
    /// ## Returns
    /// * `Ok(Page)` - possibly with empty `items` when `page` is past the end
    /// * `Err(CoreError::Validation)` - `page < 0` or `per_page < 1`
    /// * `Err(CoreError::Store)` - the store failed
    pub async fn get_page(&self, page: i64, per_page: i64) -> CoreResult<Page<Repository>> {
        let request = PageRequest::new(page, per_page)?;

        let found = self.store.count().await?;
        let pages = request.page_count(found);

        let items = match request.window(found) {
            Some((offset, limit)) => self.store.slice(offset, limit).await?,
            None => Vec::new(),
        };

        debug!(
            page,
            per_page,
            found,
            pages,
            returned = items.len(),
            "Built repository page"
        );

        Ok(Page {
            items,
            found,
            page: request.page(),
            per_page: request.per_page(),
            pages,
        })
    }
}

// =============================================================================
// Record Updater
// =============================================================================

/// Applies updates to existing records.
#[derive(Clone)]
pub struct RecordUpdater {
    store: Arc<dyn RepositoryStore>,
}

impl RecordUpdater {
    pub fn new(store: Arc<dyn RepositoryStore>) -> Self {
        RecordUpdater { store }
    }

    /// Overwrites record `path_id` with the mutable fields of `payload`.
    ///
    /// The payload's timestamps are ignored; the store keeps `created_at`
    /// and refreshes `updated_at`.
    ///
    /// ## Returns
    /// * `Ok(Repository)` - the record as stored after the update
    /// * `Err(CoreError::Validation)` - payload id differs from `path_id`
    /// * `Err(CoreError::NotFound)` - no record with `path_id`
    pub async fn update_record(&self, path_id: i64, payload: Repository) -> CoreResult<Repository> {
        validate_identity(path_id, payload.repository_id)?;

        debug!(repository_id = path_id, "Updating repository");
        let updated = self.store.update(path_id, payload.changes()).await?;
        Ok(updated)
    }
}

// =============================================================================
// Record Lookup
// =============================================================================

/// Single-record reads.
#[derive(Clone)]
pub struct RecordLookup {
    store: Arc<dyn RepositoryStore>,
}

impl RecordLookup {
    pub fn new(store: Arc<dyn RepositoryStore>) -> Self {
        RecordLookup { store }
    }

    /// Returns the record, or `None` when there is no such id.
    pub async fn get_by_id(&self, id: i64) -> CoreResult<Option<Repository>> {
        let record = self.store.get_by_id(id).await?;
        debug!(repository_id = id, found = record.is_some(), "Looked up repository");
        Ok(record)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, StoreError, ValidationError};
    use crate::store::{InMemoryRepositoryStore, MockRepositoryStore};
    use chrono::{DateTime, TimeZone, Utc};

    fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 6, 1, 9, 30, 0).unwrap()
    }

    fn record(id: i64) -> Repository {
        Repository {
            repository_id: id,
            html_url: format!("https://github.com/depmon/sample-{id}"),
            description: Some(format!("sample repository {id}")),
            archived: id % 2 == 0,
            active: id % 3 != 0,
            created_at: created_at(),
            updated_at: created_at(),
        }
    }

    fn ten_records() -> Arc<InMemoryRepositoryStore> {
        Arc::new(InMemoryRepositoryStore::with_records((1..=10).map(record)))
    }

    fn ids(page: &Page<Repository>) -> Vec<i64> {
        page.items.iter().map(|r| r.repository_id).collect()
    }

    // -------------------------------------------------------------------------
    // Paginator
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_first_page() {
        let paginator = Paginator::new(ten_records());

        let page = paginator.get_page(0, 5).await.unwrap();

        assert_eq!(ids(&page), vec![1, 2, 3, 4, 5]);
        assert_eq!(page.found, 10);
        assert_eq!(page.page, 0);
        assert_eq!(page.per_page, 5);
        assert_eq!(page.pages, 2);
    }

    #[tokio::test]
    async fn test_last_partial_page() {
        let paginator = Paginator::new(ten_records());

        let page = paginator.get_page(2, 4).await.unwrap();

        assert_eq!(ids(&page), vec![9, 10]);
        assert_eq!(page.found, 10);
        assert_eq!(page.pages, 3);
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty() {
        let paginator = Paginator::new(ten_records());

        let page = paginator.get_page(100, 2).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.found, 10);
        assert_eq!(page.page, 100);
        assert_eq!(page.per_page, 2);
        assert_eq!(page.pages, 5);
    }

    #[tokio::test]
    async fn test_empty_collection() {
        let paginator = Paginator::new(Arc::new(InMemoryRepositoryStore::new()));

        let page = paginator.get_page(0, 10).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.found, 0);
        assert_eq!(page.pages, 0);
    }

    #[tokio::test]
    async fn test_every_page_covers_the_collection_once() {
        let store = ten_records();
        let paginator = Paginator::new(store.clone());

        for per_page in 1..=11 {
            let mut seen = Vec::new();
            let first = paginator.get_page(0, per_page).await.unwrap();
            for page in 0..first.pages {
                let result = paginator.get_page(page, per_page).await.unwrap();
                assert!(!result.items.is_empty());
                assert!(result.items.len() as i64 <= per_page);
                seen.extend(ids(&result));
            }
            assert_eq!(seen, (1..=10).collect::<Vec<_>>(), "per_page={per_page}");
        }
    }

    #[tokio::test]
    async fn test_invalid_requests_never_touch_the_store() {
        // A mock with no expectations panics on any call
        let paginator = Paginator::new(Arc::new(MockRepositoryStore::new()));

        for (page, per_page) in [(0, 0), (0, -1), (-1, 4), (-5, -5)] {
            let err = paginator.get_page(page, per_page).await.unwrap_err();
            assert!(
                matches!(err, CoreError::Validation(ValidationError::OutOfRange { .. })),
                "page={page} per_page={per_page}"
            );
        }
    }

    #[tokio::test]
    async fn test_past_the_end_skips_slice_query() {
        let mut store = MockRepositoryStore::new();
        store.expect_count().times(1).returning(|| Ok(10));
        store.expect_slice().never();

        let paginator = Paginator::new(Arc::new(store));
        let page = paginator.get_page(5, 2).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.pages, 5);
    }

    #[tokio::test]
    async fn test_slice_uses_trimmed_window() {
        let mut store = MockRepositoryStore::new();
        store.expect_count().returning(|| Ok(10));
        store
            .expect_slice()
            .withf(|offset, limit| *offset == 8 && *limit == 2)
            .times(1)
            .returning(|_, _| Ok(vec![record(9), record(10)]));

        let paginator = Paginator::new(Arc::new(store));
        let page = paginator.get_page(2, 4).await.unwrap();

        assert_eq!(ids(&page), vec![9, 10]);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut store = MockRepositoryStore::new();
        store
            .expect_count()
            .returning(|| Err(StoreError::Backend("database is locked".to_string())));

        let paginator = Paginator::new(Arc::new(store));
        let err = paginator.get_page(0, 5).await.unwrap_err();

        assert_eq!(err, CoreError::Store("database is locked".to_string()));
    }

    // -------------------------------------------------------------------------
    // RecordUpdater
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_update_with_mismatched_id_is_rejected() {
        let store = ten_records();
        let before = store.snapshot().await;
        let updater = RecordUpdater::new(store.clone());

        let mut payload = record(1);
        payload.html_url = "https://github.com/depmon/hijacked".to_string();
        let err = updater.update_record(2, payload).await.unwrap_err();

        assert_eq!(
            err,
            CoreError::Validation(ValidationError::IdentityMismatch {
                path_id: 2,
                payload_id: 1,
            })
        );
        assert_eq!(store.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_mismatched_id_never_reaches_the_store() {
        let mut store = MockRepositoryStore::new();
        store.expect_update().never();

        let updater = RecordUpdater::new(Arc::new(store));
        assert!(updater.update_record(2, record(1)).await.is_err());
    }

    #[tokio::test]
    async fn test_update_existing_record() {
        let store = ten_records();
        store.insert(record(9999)).await;
        let updater = RecordUpdater::new(store.clone());

        let mut payload = record(9999);
        payload.html_url = "https://github.com/depmon/updated".to_string();
        payload.description = None;
        payload.archived = true;
        payload.active = false;
        // Client-sent timestamps are ignored
        payload.created_at = created_at() + chrono::Duration::days(365);
        payload.updated_at = created_at() - chrono::Duration::days(365);

        let updated = updater.update_record(9999, payload).await.unwrap();

        assert_eq!(updated.repository_id, 9999);
        assert_eq!(updated.created_at, created_at());
        assert!(updated.updated_at > created_at());
        assert_eq!(updated.html_url, "https://github.com/depmon/updated");
        assert_eq!(updated.description, None);
        assert!(updated.archived);
        assert!(!updated.active);

        let stored = store.get_by_id(9999).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_repeated_updates_advance_updated_at() {
        let store = ten_records();
        let updater = RecordUpdater::new(store.clone());

        let first = updater.update_record(3, record(3)).await.unwrap();
        let second = updater.update_record(3, record(3)).await.unwrap();

        assert!(second.updated_at > first.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_record_is_not_found() {
        let store = ten_records();
        let updater = RecordUpdater::new(store.clone());

        let err = updater.update_record(42, record(42)).await.unwrap_err();

        assert_eq!(err, CoreError::NotFound { id: 42 });
        assert_eq!(store.count().await.unwrap(), 10);
    }

    // -------------------------------------------------------------------------
    // RecordLookup
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_lookup() {
        let lookup = RecordLookup::new(ten_records());

        assert_eq!(lookup.get_by_id(1).await.unwrap(), Some(record(1)));
        assert_eq!(lookup.get_by_id(99).await.unwrap(), None);
    }
}
