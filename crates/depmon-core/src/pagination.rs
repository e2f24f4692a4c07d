//! # Pagination
//!
//! Validated page requests and the arithmetic behind a page.
//!
//! ## Page Window
//! ```text
//! found = 10, perPage = 4
//!
//!  records:  [0 1 2 3] [4 5 6 7] [8 9]        pages = ceil(10 / 4) = 3
//!  page:         0         1       2
//!                                  │
//!                                  └── offset 8, tail of 2 records
//!
//!  page 100 → offset 400 >= found → empty items, pages still 3
//! ```

use crate::error::ValidationError;
use crate::validation::{validate_page, validate_per_page};

/// A page request that passed validation.
///
/// The only way to build one is [`PageRequest::new`], so holding a
/// `PageRequest` means `page >= 0` and `per_page >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    per_page: i64,
}

impl PageRequest {
    /// Validates and builds a page request.
    ///
    /// `page` is checked first, then `per_page`.
    pub fn new(page: i64, per_page: i64) -> Result<Self, ValidationError> {
        validate_page(page)?;
        validate_per_page(per_page)?;
        Ok(PageRequest { page, per_page })
    }

    /// Zero-based page index.
    #[inline]
    pub const fn page(&self) -> i64 {
        self.page
    }

    /// Page size.
    #[inline]
    pub const fn per_page(&self) -> i64 {
        self.per_page
    }

    /// Index of the first record on this page.
    ///
    /// `None` when `page * per_page` overflows; no collection is that large,
    /// so callers treat it as past the end.
    #[inline]
    pub fn offset(&self) -> Option<i64> {
        self.page.checked_mul(self.per_page)
    }

    /// Number of pages needed for `found` records: `ceil(found / per_page)`.
    ///
    /// Zero for an empty collection.
    pub fn page_count(&self, found: i64) -> i64 {
        if found <= 0 {
            return 0;
        }
        // found > 0 and per_page >= 1, so this cannot overflow
        (found - 1) / self.per_page + 1
    }

    /// Where this page lands in a collection of `found` records.
    ///
    /// Returns `(offset, limit)` to query, or `None` when the page starts at
    /// or beyond the end. `limit` is trimmed for the final, shorter page.
    pub fn window(&self, found: i64) -> Option<(i64, i64)> {
        let offset = self.offset()?;
        if offset >= found {
            return None;
        }
        let limit = self.per_page.min(found - offset);
        Some((offset, limit))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_requests() {
        assert!(PageRequest::new(0, 0).is_err());
        assert!(PageRequest::new(0, -1).is_err());
        assert!(PageRequest::new(-1, 4).is_err());

        // page is reported first when both are wrong
        let err = PageRequest::new(-1, 0).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { ref field, .. } if field == "page"));
    }

    #[test]
    fn test_page_count() {
        let req = PageRequest::new(0, 5).unwrap();
        assert_eq!(req.page_count(10), 2);
        assert_eq!(req.page_count(11), 3);
        assert_eq!(req.page_count(1), 1);
        assert_eq!(req.page_count(0), 0);

        assert_eq!(PageRequest::new(0, 4).unwrap().page_count(10), 3);
        assert_eq!(PageRequest::new(0, 2).unwrap().page_count(10), 5);
        assert_eq!(PageRequest::new(0, 100).unwrap().page_count(10), 1);
    }

    #[test]
    fn test_page_count_matches_ceil_division() {
        for found in 1..=50 {
            for per_page in 1..=12 {
                let req = PageRequest::new(0, per_page).unwrap();
                let expected = (found as f64 / per_page as f64).ceil() as i64;
                assert_eq!(req.page_count(found), expected, "found={found} per_page={per_page}");
                assert!(req.page_count(found) >= 1);
            }
        }
    }

    #[test]
    fn test_window_first_page() {
        let req = PageRequest::new(0, 5).unwrap();
        assert_eq!(req.window(10), Some((0, 5)));
    }

    #[test]
    fn test_window_last_partial_page() {
        let req = PageRequest::new(2, 4).unwrap();
        assert_eq!(req.window(10), Some((8, 2)));
    }

    #[test]
    fn test_window_past_the_end() {
        assert_eq!(PageRequest::new(100, 2).unwrap().window(10), None);
        // Exactly at the end is also empty
        assert_eq!(PageRequest::new(2, 5).unwrap().window(10), None);
        assert_eq!(PageRequest::new(0, 5).unwrap().window(0), None);
    }

    #[test]
    fn test_window_with_overflowing_offset() {
        let req = PageRequest::new(i64::MAX, 2).unwrap();
        assert_eq!(req.offset(), None);
        assert_eq!(req.window(10), None);
    }
}
