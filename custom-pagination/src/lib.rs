// =============================================================================
// CRATE-LEVEL QUALITY LINTS
// =============================================================================
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION
// =============================================================================
#![allow(clippy::doc_markdown)] // GraphQL field names in docs
#![allow(clippy::missing_errors_doc)] // # Errors sections - every error is a PaginationError
#![allow(clippy::format_push_string)] // SDL building style preference

//! # custom-pagination - Offset/Page Pagination for GraphQL Connections
//!
//! Adds numbered pages to cursor-based connections. A connection switches to
//! offset/page pagination when its `where` arguments carry a
//! `customPagination` block:
//!
//! ```graphql
//! posts(where: { customPagination: { postsPerPage: 10, paged: 3 } }) {
//!   nodes { id }
//!   pageInfo {
//!     customPagination { currentPage previousPage nextPage hasNextPage total totalPages }
//!   }
//! }
//! ```
//!
//! ## How it works
//!
//! - The query is limited to `postsPerPage + 1` rows. Getting the extra row
//!   back proves a next page exists, no `COUNT(*)` needed.
//! - Total counting is only switched on when `total` or `totalPages` is in the
//!   selection.
//! - Page numbers come from `offset` when it is positive, from `paged`
//!   otherwise.
//!
//! ## Quick Start
//!
//! ```
//! use custom_pagination::prelude::*;
//!
//! let request = PaginationRequest::new(5).with_page(4);
//! let info = compute(&request, &FetchResult::new(6)).unwrap();
//!
//! assert_eq!(info.current_page, 4);
//! assert_eq!(info.previous_page, Some(3));
//! assert_eq!(info.next_page, Some(5));
//! assert_eq!(info.total_pages, None);
//! ```
//!
//! ## Host integration
//!
//! The host implements [`ConnectionResolver`] for its resolvers and
//! [`NativeQueryArgs`] for its query arguments, then calls the
//! [`CustomPagination`] method matching each stage of its pipeline.

mod config;
mod error;
mod extension;
mod input;
mod pagination;
mod query;
pub mod schema;
mod selection;

pub use config::{
    DEFAULT_SELECTION_DEPTH, ENV_MAX_PAGE_SIZE, ENV_SELECTION_DEPTH, PaginationConfig,
};
pub use error::{PaginationError, Result};
pub use extension::{ConnectionResolver, CustomPagination};
pub use input::CustomPaginationInput;
pub use pagination::{FetchResult, PageInfo, PaginationRequest, compute};
pub use query::{NativeQueryArgs, QueryArgs, QueryKind, QueryOutcome, map_input};
pub use selection::{FieldSelection, requests_total};

/// Prelude module for convenient imports.
///
/// ```
/// use custom_pagination::prelude::*;
/// let ext = CustomPagination::new(PaginationConfig::default());
/// assert_eq!(ext.config().selection_depth, 2);
/// ```
pub mod prelude {
    pub use crate::{
        ConnectionResolver, CustomPagination, CustomPaginationInput, FetchResult, FieldSelection,
        NativeQueryArgs, PageInfo, PaginationConfig, PaginationError, PaginationRequest, QueryArgs,
        QueryKind, QueryOutcome, compute, map_input, requests_total,
    };
}
