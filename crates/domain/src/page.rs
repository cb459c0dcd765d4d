//! Pagination value type for entity listings.

/// A 1-indexed page request.
///
/// Unparseable request parameters fall back to the defaults at the HTTP
/// boundary; parsed but non-positive values are rejected by the use-case
/// layer before reaching storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub size: i64,
    pub number: i64,
}

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

impl Page {
    pub fn new(size: i64, number: i64) -> Self {
        Self { size, number }
    }

    /// Number of items to skip before this page starts.
    ///
    /// Saturating: both values come straight from the query string, so
    /// extreme pages must clamp instead of overflowing.
    pub fn offset(&self) -> i64 {
        self.number.saturating_sub(1).saturating_mul(self.size)
    }

    pub fn is_valid_size(&self) -> bool {
        self.size > 0
    }

    pub fn is_valid_number(&self) -> bool {
        self.number > 0
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            size: DEFAULT_PAGE_SIZE,
            number: DEFAULT_PAGE_NUMBER,
        }
    }
}
