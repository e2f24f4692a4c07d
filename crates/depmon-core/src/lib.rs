//! # depmon-core: Pure Domain Logic for DepMon
//!
//! This crate holds the rules of the repository records service: how a page
//! of records is computed, which requests are rejected, and how an update is
//! checked against the identity of the record it targets.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        DepMon Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (axum)                              │   │
//! │  │    GET /repository/{id}   GET /repository/page   PUT ...        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ depmon-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐ │   │
//! │  │   │   types   │  │ pagination │  │  service  │  │   store   │ │   │
//! │  │   │Repository │  │PageRequest │  │ Paginator │  │ Repository│ │   │
//! │  │   │   Page    │  │ page_count │  │ Updater   │  │   Store   │ │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  depmon-db (Database Layer)                     │   │
//! │  │           SQLite queries, migrations, SqliteRepositoryStore     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Repository, Page)
//! - [`pagination`] - Validated page requests and page math
//! - [`validation`] - Request validation rules
//! - [`store`] - The `RepositoryStore` port and an in-memory implementation
//! - [`service`] - Paginator, RecordUpdater, RecordLookup
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use depmon_core::pagination::PageRequest;
//!
//! let request = PageRequest::new(2, 4).unwrap();
//! assert_eq!(request.offset(), Some(8));
//! assert_eq!(request.page_count(10), 3);
//!
//! assert!(PageRequest::new(0, 0).is_err());
//! assert!(PageRequest::new(-1, 4).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pagination;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, StoreError, ValidationError};
pub use pagination::PageRequest;
pub use service::{Paginator, RecordLookup, RecordUpdater};
pub use store::{InMemoryRepositoryStore, RepositoryStore};
pub use types::*;
