//! # Validation Module
//!
//! Request validation rules for the repository records service.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extraction (axum)                                       │
//! │  └── Type validation: non-numeric ids/params rejected with 400          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── page >= 0, perPage >= 1                                           │
//! │  └── path id == payload id                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store                                                        │
//! │  └── update target must exist                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Smallest allowed page index.
pub const MIN_PAGE: i64 = 0;

/// Smallest allowed page size.
pub const MIN_PER_PAGE: i64 = 1;

/// Validates a zero-based page index.
///
/// ## Example
/// ```rust
/// use depmon_core::validation::validate_page;
///
/// assert!(validate_page(0).is_ok());
/// assert!(validate_page(100).is_ok());
/// assert!(validate_page(-1).is_err());
/// ```
pub fn validate_page(page: i64) -> ValidationResult<()> {
    if page < MIN_PAGE {
        return Err(ValidationError::OutOfRange {
            field: "page".to_string(),
            min: MIN_PAGE,
            value: page,
        });
    }

    Ok(())
}

/// Validates a page size.
///
/// ## Example
/// ```rust
/// use depmon_core::validation::validate_per_page;
///
/// assert!(validate_per_page(1).is_ok());
/// assert!(validate_per_page(0).is_err());
/// assert!(validate_per_page(-1).is_err());
/// ```
pub fn validate_per_page(per_page: i64) -> ValidationResult<()> {
    if per_page < MIN_PER_PAGE {
        return Err(ValidationError::OutOfRange {
            field: "perPage".to_string(),
            min: MIN_PER_PAGE,
            value: per_page,
        });
    }

    Ok(())
}

/// Checks that an update payload addresses the record named in the path.
///
/// ## Example
/// ```rust
/// use depmon_core::validation::validate_identity;
///
/// assert!(validate_identity(9999, 9999).is_ok());
/// assert!(validate_identity(2, 1).is_err());
/// ```
pub fn validate_identity(path_id: i64, payload_id: i64) -> ValidationResult<()> {
    if path_id != payload_id {
        return Err(ValidationError::IdentityMismatch {
            path_id,
            payload_id,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_page() {
        assert!(validate_page(0).is_ok());
        assert!(validate_page(2).is_ok());
        assert!(validate_page(i64::MAX).is_ok());

        assert!(validate_page(-1).is_err());
        assert!(validate_page(i64::MIN).is_err());
    }

    #[test]
    fn test_validate_per_page() {
        assert!(validate_per_page(1).is_ok());
        assert!(validate_per_page(5).is_ok());

        assert_eq!(
            validate_per_page(0),
            Err(ValidationError::OutOfRange {
                field: "perPage".to_string(),
                min: 1,
                value: 0,
            })
        );
        assert!(validate_per_page(-1).is_err());
    }

    #[test]
    fn test_validate_identity() {
        assert!(validate_identity(1, 1).is_ok());
        assert_eq!(
            validate_identity(2, 1),
            Err(ValidationError::IdentityMismatch {
                path_id: 2,
                payload_id: 1,
            })
        );
    }
}
