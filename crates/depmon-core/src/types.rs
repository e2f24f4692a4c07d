//! # Domain Types
//!
//! Core domain types of the repository records service.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────────┐                     │
//! │  │    Repository       │   │     Page<T>         │                     │
//! │  │  ─────────────────  │   │  ─────────────────  │                     │
//! │  │  repository_id      │   │  items              │                     │
//! │  │  html_url           │   │  found              │                     │
//! │  │  description        │   │  page (echoed)      │                     │
//! │  │  archived / active  │   │  per_page (echoed)  │                     │
//! │  │  created_at         │   │  pages              │                     │
//! │  │  updated_at         │   └─────────────────────┘                     │
//! │  └─────────────────────┘                                               │
//! │                                                                         │
//! │  ┌─────────────────────┐                                               │
//! │  │ RepositoryChanges   │  mutable subset handed to the store           │
//! │  └─────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `repository_id` is assigned externally (it is the id of the tracked
//! source-code repository) and never changes once a record exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Repository
// =============================================================================

/// A tracked source-code repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Repository {
    /// Externally assigned, stable identifier.
    pub repository_id: i64,

    /// Web URL of the repository.
    pub html_url: String,

    /// Free-form description, if the repository has one.
    pub description: Option<String>,

    /// Repository is archived upstream.
    pub archived: bool,

    /// Repository is monitored.
    pub active: bool,

    /// When the record was created. Immutable.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Repository {
    /// Returns the mutable attributes of this record.
    pub fn changes(&self) -> RepositoryChanges {
        RepositoryChanges {
            html_url: self.html_url.clone(),
            description: self.description.clone(),
            archived: self.archived,
            active: self.active,
        }
    }

    /// Overwrites the mutable attributes and stamps `updated_at`.
    ///
    /// `repository_id` and `created_at` are left alone.
    pub fn apply(&mut self, changes: RepositoryChanges, updated_at: DateTime<Utc>) {
        self.html_url = changes.html_url;
        self.description = changes.description;
        self.archived = changes.archived;
        self.active = changes.active;
        self.updated_at = updated_at;
    }
}

/// The attributes an update may overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryChanges {
    pub html_url: String,
    pub description: Option<String>,
    pub archived: bool,
    pub active: bool,
}

// =============================================================================
// Update Timestamps
// =============================================================================

/// Picks the `updated_at` for a record last touched at `previous`.
///
/// Wall clocks can repeat a reading or step backwards, so the result is
/// bumped to one microsecond past `previous` when `now` is not later.
/// Stored timestamps keep sub-second digits, so the bumped value reads back
/// unchanged.
pub fn next_updated_at(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + chrono::Duration::microseconds(1)
    }
}

// =============================================================================
// Page
// =============================================================================

/// One page of an ordered collection.
///
/// Constructed per request and discarded with the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records on this page, in store order. Empty past the last page.
    pub items: Vec<T>,

    /// Total records in the collection at query time.
    pub found: i64,

    /// Requested page index, echoed even when out of range.
    pub page: i64,

    /// Requested page size, echoed.
    pub per_page: i64,

    /// Total number of pages for `found` and `per_page`.
    pub pages: i64,
}

impl<T> Page<T> {
    /// Converts the items, keeping the paging fields.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            found: self.found,
            page: self.page,
            per_page: self.per_page,
            pages: self.pages,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
