//! PageInfo struct and the page number calculation.

use serde::Serialize;

use super::request::{FetchResult, PaginationRequest};
use crate::error::{PaginationError, Result};

/// Offset/page pagination state attached to a connection's page info.
///
/// Serializes with the GraphQL field names of `CustomPaginationPageInfo`:
///
/// ```
/// use custom_pagination::{FetchResult, PageInfo, PaginationRequest};
///
/// let info = PageInfo::compute(&PaginationRequest::new(10), &FetchResult::new(11)).unwrap();
/// let json = serde_json::to_value(info).unwrap();
///
/// assert_eq!(json["currentPage"], 1);
/// assert_eq!(json["nextPage"], 2);
/// assert!(json["totalPages"].is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PageInfo {
    /// Total matching rows, if counting was requested.
    pub total: Option<u64>,
    /// Whether a page exists before this one.
    pub has_previous_page: bool,
    /// Whether a page exists after this one.
    pub has_next_page: bool,
    /// Previous page number.
    pub previous_page: Option<u64>,
    /// Current 1-based page number.
    pub current_page: u64,
    /// Next page number.
    pub next_page: Option<u64>,
    /// Number of pages, known only together with `total`.
    pub total_pages: Option<u64>,
}

impl PageInfo {
    /// Compute pagination state from the request and what the query returned.
    ///
    /// `fetched.fetched_count` must come from a query limited to
    /// [`PaginationRequest::fetch_limit`]; anything beyond `page_size` marks a
    /// next page.
    ///
    /// Fails with [`PaginationError::InvalidPageSize`] for a zero page size and
    /// [`PaginationError::InvalidPage`] for page zero when the page drives the
    /// position.
    pub fn compute(request: &PaginationRequest, fetched: &FetchResult) -> Result<Self> {
        let page_size = request.page_size;
        if page_size == 0 {
            return Err(PaginationError::InvalidPageSize(0));
        }

        let (current_page, has_previous_page) = if request.is_offset_driven() {
            (request.offset / page_size + 1, true)
        } else {
            if request.page == 0 {
                return Err(PaginationError::InvalidPage(0));
            }
            (request.page, request.page > 1)
        };

        let fetched_count = u64::try_from(fetched.fetched_count).unwrap_or(u64::MAX);
        let has_next_page = fetched_count > page_size;

        let info = Self {
            total: fetched.total,
            has_previous_page,
            has_next_page,
            previous_page: has_previous_page.then(|| current_page - 1),
            current_page,
            next_page: has_next_page.then(|| current_page.saturating_add(1)),
            total_pages: fetched.total.map(|total| total.div_ceil(page_size)),
        };

        tracing::debug!(
            current_page = info.current_page,
            has_next_page = info.has_next_page,
            has_previous_page = info.has_previous_page,
            total = ?info.total,
            "computed custom pagination page info"
        );

        Ok(info)
    }
}
