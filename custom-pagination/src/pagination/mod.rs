//! Offset/page pagination state for connections.
//!
//! # Pagination Strategies
//!
//! | Strategy   | Jump to Page | Total Needed | Use Case                     |
//! |------------|--------------|--------------|------------------------------|
//! | **Cursor** | No           | No           | Feeds, infinite scroll       |
//! | **Offset** | Yes          | Optional     | Archives, numbered page bars |
//!
//! Offset pagination here never counts rows unless asked to. The query is
//! limited to `page_size + 1`; a surplus row means a next page exists.
//!
//! # Example
//!
//! ```
//! use custom_pagination::{FetchResult, PaginationRequest, compute};
//!
//! // Third page of ten, query returned 5 rows and a total of 25
//! let request = PaginationRequest::new(10).with_offset(20);
//! let info = compute(&request, &FetchResult::new(5).with_total(Some(25))).unwrap();
//!
//! assert_eq!(info.current_page, 3);
//! assert_eq!(info.previous_page, Some(2));
//! assert_eq!(info.next_page, None);
//! assert_eq!(info.total_pages, Some(3));
//! ```

mod page_info;
mod request;

pub use page_info::PageInfo;
pub use request::{FetchResult, PaginationRequest};

use crate::error::Result;

/// Compute page info for one request.
///
/// Shorthand for [`PageInfo::compute`].
pub fn compute(request: &PaginationRequest, fetched: &FetchResult) -> Result<PageInfo> {
    PageInfo::compute(request, fetched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_is_idempotent() {
        let request = PaginationRequest::new(7).with_offset(30);
        let fetched = FetchResult::new(8).with_total(Some(99));

        let first = compute(&request, &fetched).unwrap();
        let second = compute(&request, &fetched).unwrap();
        assert_eq!(first, second);
    }
}
