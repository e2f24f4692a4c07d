//! # depmon-db: Database Layer for DepMon
//!
//! This crate provides database access for the repository records service.
//! It uses SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        DepMon Data Flow                                 │
//! │                                                                         │
//! │  HTTP handler ──► Paginator / RecordUpdater (depmon-core)              │
//! │                          │  Arc<dyn RepositoryStore>                    │
//! │                          ▼                                              │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     depmon-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐  ┌──────────────┐ │   │
//! │  │   │   Database    │    │  Repositories    │  │  Migrations  │ │   │
//! │  │   │   (pool.rs)   │    │  (records.rs)    │  │  (embedded)  │ │   │
//! │  │   │               │    │                  │  │              │ │   │
//! │  │   │ SqlitePool    │◄───│ SqliteRepository │  │ 001_create_  │ │   │
//! │  │   │               │    │ Store            │  │ repository   │ │   │
//! │  │   └───────────────┘    └──────────────────┘  └──────────────┘ │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                          │                                              │
//! │                          ▼                                              │
//! │                    SQLite Database                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Store implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use depmon_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("depmon.db")).await?;
//! let store = db.repositories();
//! let found = store.count_records().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::records::SqliteRepositoryStore;
