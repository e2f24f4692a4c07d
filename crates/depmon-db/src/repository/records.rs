//! # Repository Record Store
//!
//! SQLite implementation of [`RepositoryStore`].
//!
//! ## Ordering
//! Every listing is `ORDER BY repository_id`, the stable total order pages
//! are cut from.
//!
//! ## Update
//! ```text
//! BEGIN IMMEDIATE (waits for other writers up to the busy timeout)
//!   SELECT current row ── none? → NotFound (rollback, nothing written)
//!   updated_at = max(now, previous + 1µs)
//!   UPDATE mutable columns + updated_at
//! COMMIT
//! ```

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use depmon_core::store::RepositoryStore;
use depmon_core::types::next_updated_at;
use depmon_core::{Repository, RepositoryChanges, StoreError};

const SELECT_COLUMNS: &str = r#"
    SELECT
        repository_id,
        html_url,
        description,
        archived,
        active,
        created_at,
        updated_at
    FROM repository
"#;

/// Store for repository records.
///
/// ## Usage
/// ```rust,ignore
/// let store = SqliteRepositoryStore::new(pool);
/// let page = store.fetch_slice(0, 5).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqliteRepositoryStore {
    pool: SqlitePool,
}

impl SqliteRepositoryStore {
    /// Creates a new SqliteRepositoryStore.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteRepositoryStore { pool }
    }

    /// Counts all records.
    pub async fn count_records(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM repository")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Returns up to `limit` records starting at `offset`.
    pub async fn fetch_slice(&self, offset: i64, limit: i64) -> DbResult<Vec<Repository>> {
        debug!(offset, limit, "Fetching repository slice");

        let sql = format!("{SELECT_COLUMNS} ORDER BY repository_id LIMIT ?1 OFFSET ?2");
        let records = sqlx::query_as::<_, Repository>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    /// Gets a record by id.
    ///
    /// ## Returns
    /// * `Ok(Some(Repository))` - Record found
    /// * `Ok(None)` - Record not found
    pub async fn fetch_by_id(&self, id: i64) -> DbResult<Option<Repository>> {
        let sql = format!("{SELECT_COLUMNS} WHERE repository_id = ?1");
        let record = sqlx::query_as::<_, Repository>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    /// Overwrites the mutable columns of an existing record.
    ///
    /// ## Returns
    /// * `Ok(Repository)` - The record after the update
    /// * `Err(DbError::NotFound)` - No row with this id; nothing is written
    pub async fn update_record(&self, id: i64, changes: RepositoryChanges) -> DbResult<Repository> {
        debug!(repository_id = id, "Updating repository");

        // IMMEDIATE takes the write lock before the read, so a writer that
        // committed in between cannot fail the read-to-write upgrade
        let mut tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let sql = format!("{SELECT_COLUMNS} WHERE repository_id = ?1");
        let mut record = sqlx::query_as::<_, Repository>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DbError::not_found("Repository", id.to_string()))?;

        let updated_at = next_updated_at(record.updated_at, Utc::now());

        sqlx::query(
            r#"
            UPDATE repository SET
                html_url = ?2,
                description = ?3,
                archived = ?4,
                active = ?5,
                updated_at = ?6
            WHERE repository_id = ?1
            "#,
        )
        .bind(id)
        .bind(&changes.html_url)
        .bind(&changes.description)
        .bind(changes.archived)
        .bind(changes.active)
        .bind(updated_at)
        .execute(&mut *tx)
        .await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        record.apply(changes, updated_at);
        Ok(record)
    }

    /// Inserts a record as-is, timestamps included.
    ///
    /// Not reachable over HTTP; used by the seed tool and test fixtures.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - id already stored
    pub async fn insert(&self, record: &Repository) -> DbResult<()> {
        debug!(repository_id = record.repository_id, "Inserting repository");

        sqlx::query(
            r#"
            INSERT INTO repository (
                repository_id, html_url, description,
                archived, active, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(record.repository_id)
        .bind(&record.html_url)
        .bind(&record.description)
        .bind(record.archived)
        .bind(record.active)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl RepositoryStore for SqliteRepositoryStore {
    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.count_records().await?)
    }

    async fn slice(&self, offset: i64, limit: i64) -> Result<Vec<Repository>, StoreError> {
        Ok(self.fetch_slice(offset, limit).await?)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Repository>, StoreError> {
        Ok(self.fetch_by_id(id).await?)
    }

    async fn update(&self, id: i64, changes: RepositoryChanges) -> Result<Repository, StoreError> {
        Ok(self.update_record(id, changes).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
