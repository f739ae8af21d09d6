//! Offset/limit pagination for incident listings

/// Default number of records per page
pub const DEFAULT_LIMIT: i64 = 20;

/// Offset/limit window over a result set.
///
/// Any integer is accepted from the client. Negative values are clamped to
/// zero so both database backends see the same window: a negative `skip`
/// starts from the first row and a negative `limit` yields an empty page.
/// Large values pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    skip: i64,
    limit: i64,
}

impl Page {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self {
            skip: skip.max(0),
            limit: limit.max(0),
        }
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        self.skip
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(0, DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = Page::default();
        assert_eq!(p.offset(), 0);
        assert_eq!(p.limit(), 20);
    }

    #[test]
    fn clamps_negative_values() {
        let p = Page::new(-5, -1);
        assert_eq!(p.offset(), 0);
        assert_eq!(p.limit(), 0);
    }

    #[test]
    fn passes_large_values_through() {
        let p = Page::new(i64::MAX, i64::MAX);
        assert_eq!(p.offset(), i64::MAX);
        assert_eq!(p.limit(), i64::MAX);
    }
}
