//! Per-request inputs to the page info calculator.

/// Offset/page pagination parameters for one connection resolution.
///
/// Built either directly or from a `customPagination` input block via
/// [`CustomPaginationInput::to_request`](crate::CustomPaginationInput::to_request).
///
/// # Example
///
/// ```
/// use custom_pagination::PaginationRequest;
///
/// let request = PaginationRequest::new(10).with_offset(20);
/// assert!(request.is_offset_driven());
/// assert_eq!(request.fetch_limit(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct PaginationRequest {
    /// Items per page. Zero is rejected by the calculator.
    pub page_size: u64,
    /// Zero-based number of items to skip. Drives the page number when positive.
    pub offset: u64,
    /// 1-based page number, used when `offset` is zero.
    pub page: u64,
}

impl PaginationRequest {
    /// Create a request for the first page with the given page size.
    #[must_use]
    pub const fn new(page_size: u64) -> Self {
        Self {
            page_size,
            offset: 0,
            page: 1,
        }
    }

    /// Set the number of items to skip.
    #[must_use]
    pub const fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the 1-based page number.
    #[must_use]
    pub const fn with_page(mut self, page: u64) -> Self {
        self.page = page;
        self
    }

    /// Whether `offset` takes precedence over `page`.
    #[inline]
    #[must_use]
    pub const fn is_offset_driven(&self) -> bool {
        self.offset > 0
    }

    /// Number of rows to ask the query engine for.
    ///
    /// One more than the page size: a surplus row proves a next page exists
    /// without counting the whole result set.
    #[inline]
    #[must_use]
    pub const fn fetch_limit(&self) -> u64 {
        self.page_size.saturating_add(1)
    }
}

/// What the underlying query actually returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct FetchResult {
    /// Rows returned for a query limited to [`PaginationRequest::fetch_limit`].
    pub fetched_count: usize,
    /// Total matching rows, `None` when counting was not enabled.
    pub total: Option<u64>,
}

impl FetchResult {
    /// Create a fetch result with an unknown total.
    #[must_use]
    pub const fn new(fetched_count: usize) -> Self {
        Self {
            fetched_count,
            total: None,
        }
    }

    /// Set the total row count, `None` for unknown.
    #[must_use]
    pub const fn with_total(mut self, total: Option<u64>) -> Self {
        self.total = total;
        self
    }
}
