//! # Data Transfer Objects
//!
//! Wire shapes of the HTTP API. Field names are camelCase for the dashboard
//! frontend, whose TypeScript types are generated from these structs.
//!
//! ## Why DTOs?
//! - Decouples the domain model from the API contract
//! - Keeps the wire names (`htmlUrl`, `perPage`) out of the core

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use depmon_core::{Page, Repository};

/// A repository record as clients see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RepositoryDto {
    pub repository_id: i64,
    pub html_url: String,
    pub description: Option<String>,
    pub archived: bool,
    pub active: bool,
    /// Ignored on update; the server keeps the stored value.
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
    /// Ignored on update; the server refreshes it.
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Repository> for RepositoryDto {
    fn from(r: Repository) -> Self {
        RepositoryDto {
            repository_id: r.repository_id,
            html_url: r.html_url,
            description: r.description,
            archived: r.archived,
            active: r.active,
            created_at: Some(r.created_at),
            updated_at: Some(r.updated_at),
        }
    }
}

impl RepositoryDto {
    /// Converts an update body into the record payload the core expects.
    ///
    /// Missing timestamps become the epoch; the updater never reads them.
    pub fn into_payload(self) -> Repository {
        Repository {
            repository_id: self.repository_id,
            html_url: self.html_url,
            description: self.description,
            archived: self.archived,
            active: self.active,
            created_at: self.created_at.unwrap_or_default(),
            updated_at: self.updated_at.unwrap_or_default(),
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub found: i64,
    pub page: i64,
    pub per_page: i64,
    pub pages: i64,
}

impl From<Page<Repository>> for PageDto<RepositoryDto> {
    fn from(page: Page<Repository>) -> Self {
        let page = page.map(RepositoryDto::from);
        PageDto {
            items: page.items,
            found: page.found,
            page: page.page,
            per_page: page.per_page,
            pages: page.pages,
        }
    }
}

/// Query string of `GET /repository/page`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HealthDto {
    /// "ok" or "unavailable"
    pub status: String,
    pub database: bool,
    #[ts(as = "String")]
    pub server_time: DateTime<Utc>,
}
