//! Property-based tests for the page info calculation using proptest.

use custom_pagination::{FetchResult, PaginationError, PaginationRequest, compute};
use proptest::prelude::*;

// =============================================================================
// Page Position Properties
// =============================================================================

proptest! {
    /// Without an offset or page number we are on page 1 with nothing before
    #[test]
    fn first_page_by_default(
        page_size in 1u64..10_000,
        fetched in 0usize..20_000,
    ) {
        let info = compute(&PaginationRequest::new(page_size), &FetchResult::new(fetched)).unwrap();

        prop_assert_eq!(info.current_page, 1);
        prop_assert!(!info.has_previous_page);
        prop_assert_eq!(info.previous_page, None);
    }

    /// A positive offset determines the page and always has a previous page
    #[test]
    fn offset_determines_page(
        page_size in 1u64..10_000,
        offset in 1u64..10_000_000,
        page in 1u64..1_000,
    ) {
        let request = PaginationRequest::new(page_size).with_offset(offset).with_page(page);
        let info = compute(&request, &FetchResult::new(0)).unwrap();

        prop_assert_eq!(info.current_page, offset / page_size + 1);
        prop_assert!(info.has_previous_page);
        prop_assert_eq!(info.previous_page, Some(info.current_page - 1));
    }

    /// Without an offset the page number is used as-is
    #[test]
    fn page_number_used_without_offset(
        page_size in 1u64..10_000,
        page in 1u64..1_000_000,
    ) {
        let request = PaginationRequest::new(page_size).with_page(page);
        let info = compute(&request, &FetchResult::new(0)).unwrap();

        prop_assert_eq!(info.current_page, page);
        prop_assert_eq!(info.has_previous_page, page > 1);
    }
}

// =============================================================================
// Next Page Properties
// =============================================================================

proptest! {
    /// A next page exists exactly when the over-fetched row came back
    #[test]
    fn next_page_iff_surplus_row(
        page_size in 1u64..10_000,
        fetched in 0usize..20_000,
    ) {
        let info = compute(&PaginationRequest::new(page_size), &FetchResult::new(fetched)).unwrap();

        prop_assert_eq!(info.has_next_page, fetched as u64 > page_size);
        prop_assert_eq!(info.next_page.is_some(), info.has_next_page);
        if let Some(next) = info.next_page {
            prop_assert_eq!(next, info.current_page + 1);
        }
    }
}

// =============================================================================
// Total Properties
// =============================================================================

proptest! {
    /// Known totals yield the rounded-up page count
    #[test]
    fn total_pages_is_ceiling(
        page_size in 1u64..10_000,
        total in 0u64..100_000_000,
    ) {
        let fetched = FetchResult::new(0).with_total(Some(total));
        let info = compute(&PaginationRequest::new(page_size), &fetched).unwrap();

        let expected = total / page_size + u64::from(total % page_size != 0);
        prop_assert_eq!(info.total_pages, Some(expected));
        prop_assert_eq!(info.total, Some(total));
    }

    /// Unknown totals stay unknown
    #[test]
    fn unknown_total_stays_unknown(
        page_size in 1u64..10_000,
        offset in 0u64..1_000_000,
        fetched in 0usize..20_000,
    ) {
        let request = PaginationRequest::new(page_size).with_offset(offset);
        let info = compute(&request, &FetchResult::new(fetched)).unwrap();

        prop_assert_eq!(info.total, None);
        prop_assert_eq!(info.total_pages, None);
    }

    /// Same inputs, same output
    #[test]
    fn compute_is_idempotent(
        page_size in 1u64..10_000,
        offset in 0u64..1_000_000,
        page in 1u64..1_000,
        fetched in 0usize..20_000,
        total in proptest::option::of(0u64..1_000_000),
    ) {
        let request = PaginationRequest::new(page_size).with_offset(offset).with_page(page);
        let fetched = FetchResult::new(fetched).with_total(total);

        prop_assert_eq!(compute(&request, &fetched).unwrap(), compute(&request, &fetched).unwrap());
    }

    /// A zero page size is always a configuration error
    #[test]
    fn zero_page_size_rejected(
        offset in 0u64..1_000_000,
        fetched in 0usize..100,
    ) {
        let request = PaginationRequest::new(0).with_offset(offset);
        let result = compute(&request, &FetchResult::new(fetched));

        prop_assert!(matches!(result, Err(PaginationError::InvalidPageSize(0))));
    }
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[test]
fn scenario_first_page_with_more() {
    let request = PaginationRequest::new(10).with_page(1);
    let info = compute(&request, &FetchResult::new(11)).unwrap();

    assert!(!info.has_previous_page);
    assert!(info.has_next_page);
    assert_eq!(info.current_page, 1);
    assert_eq!(info.next_page, Some(2));
    assert_eq!(info.previous_page, None);
    assert_eq!(info.total_pages, None);
}

#[test]
fn scenario_last_page_by_offset() {
    let request = PaginationRequest::new(10).with_offset(20);
    let info = compute(&request, &FetchResult::new(5).with_total(Some(25))).unwrap();

    assert_eq!(info.current_page, 3);
    assert!(info.has_previous_page);
    assert_eq!(info.previous_page, Some(2));
    assert!(!info.has_next_page);
    assert_eq!(info.next_page, None);
    assert_eq!(info.total_pages, Some(3));
}

#[test]
fn scenario_middle_page_by_number() {
    let request = PaginationRequest::new(5).with_page(4);
    let info = compute(&request, &FetchResult::new(6)).unwrap();

    assert_eq!(info.current_page, 4);
    assert!(info.has_previous_page);
    assert_eq!(info.previous_page, Some(3));
    assert!(info.has_next_page);
    assert_eq!(info.next_page, Some(5));
}

#[test]
fn scenario_no_items() {
    let request = PaginationRequest::new(10);
    let info = compute(&request, &FetchResult::new(0).with_total(Some(0))).unwrap();

    assert_eq!(info.total_pages, Some(0));
    assert!(!info.has_next_page);
    assert_eq!(info.current_page, 1);
}
