//! # Error Types
//!
//! Domain-specific error types for depmon-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  depmon-core errors (this file)                                        │
//! │  ├── ValidationError  - Malformed request (bad page, id mismatch)      │
//! │  ├── StoreError       - What a RepositoryStore reports                 │
//! │  └── CoreError        - What the services return                       │
//! │                                                                         │
//! │  depmon-db errors (separate crate)                                     │
//! │  └── DbError          - Database operation failures → StoreError       │
//! │                                                                         │
//! │  HTTP API errors (in app)                                              │
//! │  └── ApiError         - What clients see (status + JSON body)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → HTTP 400               │
//! │        DbError → StoreError → CoreError → ApiError → HTTP 404/500      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, ids)
//! 3. A lookup miss is `Ok(None)`, never an error

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Request validation errors.
///
/// Always reported synchronously, never retried, and raised before the
/// store is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Numeric parameter is below its allowed minimum.
    #[error("{field} must be at least {min}, got {value}")]
    OutOfRange {
        field: String,
        min: i64,
        value: i64,
    },

    /// The id in the request path differs from the id in the payload.
    ///
    /// ## User Workflow
    /// ```text
    /// PUT /repository/2   { "repositoryId": 1, ... }
    ///      │
    ///      ▼
    /// IdentityMismatch { path_id: 2, payload_id: 1 }
    ///      │
    ///      ▼
    /// 400 Bad Request, store untouched
    /// ```
    #[error("repository id in path ({path_id}) does not match id in payload ({payload_id})")]
    IdentityMismatch { path_id: i64, payload_id: i64 },
}

// =============================================================================
// Store Error
// =============================================================================

/// Failures reported by a [`RepositoryStore`](crate::store::RepositoryStore)
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Update targeted an id with no row.
    #[error("repository not found: {id}")]
    NotFound { id: i64 },

    /// Anything the backend could not do (connection, query, transaction).
    #[error("store failure: {0}")]
    Backend(String),
}

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by the core services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Malformed request.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Update target does not exist.
    #[error("Repository not found: {id}")]
    NotFound { id: i64 },

    /// Underlying persistence failure, fatal for the request.
    #[error("Store error: {0}")]
    Store(String),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => CoreError::NotFound { id },
            StoreError::Backend(msg) => CoreError::Store(msg),
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
