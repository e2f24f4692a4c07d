//! # DepMon API
//!
//! HTTP interface to the repository records collection.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         API Layers                                      │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  routes        │  │  depmon-core   │  │  depmon-db                 ││
//! │  │                │  │                │  │                            ││
//! │  │ • get_repo     │─►│ • RecordLookup │─►│ • SqliteRepositoryStore    ││
//! │  │ • get_page     │─►│ • Paginator    │  │                            ││
//! │  │ • update_repo  │─►│ • RecordUpdater│  │                            ││
//! │  │ • health       │──┼────────────────┼─►│ • Database::health_check   ││
//! │  └────────────────┘  └────────────────┘  └────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HTTP_HOST` - Interface to bind (default: 0.0.0.0)
//! - `HTTP_PORT` - HTTP server port (default: 8080)
//! - `DATABASE_PATH` - SQLite file (default: ./depmon.db)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DEFAULT_PER_PAGE` - Page size when `perPage` is omitted (default: 10)
//! - `RUST_LOG` - Log filter

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use depmon_core::{Paginator, RecordLookup, RecordUpdater, RepositoryStore};
use depmon_db::Database;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;

/// Shared application state.
pub struct AppState {
    pub db: Database,
    pub paginator: Paginator,
    pub updater: RecordUpdater,
    pub lookup: RecordLookup,
    pub default_per_page: i64,
}

impl AppState {
    /// Wires the core services to the database's record store.
    pub fn new(db: Database, default_per_page: i64) -> Self {
        let store: Arc<dyn RepositoryStore> = Arc::new(db.repositories());

        AppState {
            paginator: Paginator::new(store.clone()),
            updater: RecordUpdater::new(store.clone()),
            lookup: RecordLookup::new(store),
            db,
            default_per_page,
        }
    }
}

/// Create all HTTP routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        // Static segment wins over `{id}`
        .route("/repository/page", get(routes::get_page))
        .route(
            "/repository/{id}",
            get(routes::get_repository).put(routes::update_repository),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
