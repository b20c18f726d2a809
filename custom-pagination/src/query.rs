//! Query engine boundary: native argument translation and query outcomes.
//!
//! The host owns its query engines and their argument names. It implements
//! [`NativeQueryArgs`] for its argument type and reports what a query
//! returned as a [`QueryOutcome`].

use crate::error::{PaginationError, Result};
use crate::input::CustomPaginationInput;

/// Which query engine backs a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum QueryKind {
    /// Posts, pages and other content nodes.
    #[default]
    Content,
    /// User accounts.
    User,
}

/// Query result as handed back by the host, decided once at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryOutcome {
    /// Content query. `found` is set when row counting was enabled.
    Content {
        /// Rows matching the query, ignoring pagination.
        found: Option<u64>,
    },
    /// User query. `total` is set when row counting was enabled.
    User {
        /// Users matching the query, ignoring pagination.
        total: Option<u64>,
    },
    /// Any other resolver. Pagination still works, totals stay unknown.
    Other,
}

impl QueryOutcome {
    /// Total matching rows, if known.
    #[must_use]
    pub const fn total(&self) -> Option<u64> {
        match self {
            Self::Content { found } => *found,
            Self::User { total } => *total,
            Self::Other => None,
        }
    }

    /// Engine that produced the outcome.
    #[must_use]
    pub const fn kind(&self) -> Option<QueryKind> {
        match self {
            Self::Content { .. } => Some(QueryKind::Content),
            Self::User { .. } => Some(QueryKind::User),
            Self::Other => None,
        }
    }
}

/// Setters for the host's native query arguments.
///
/// Implementations map each call to whatever their engine calls it.
pub trait NativeQueryArgs {
    /// Rows to skip.
    fn set_offset(&mut self, offset: u64);

    /// 1-based page number.
    fn set_paged(&mut self, paged: u64);

    /// Row limit. Receives the page size plus one.
    fn set_per_page(&mut self, per_page: u64);

    /// Turn on total row counting for the given engine.
    fn enable_total_count(&mut self, kind: QueryKind);
}

/// Plain query arguments, for hosts without their own argument type.
///
/// # Example
///
/// ```
/// use custom_pagination::{CustomPaginationInput, QueryArgs, map_input};
///
/// let mut args = QueryArgs::new();
/// map_input(&mut args, &CustomPaginationInput::new(10).with_paged(3)).unwrap();
///
/// assert_eq!(args.per_page, Some(11));
/// assert_eq!(args.window(), Some((11, 20)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct QueryArgs {
    /// Rows to skip.
    pub offset: Option<u64>,
    /// 1-based page number.
    pub paged: Option<u64>,
    /// Row limit, including the over-fetched row.
    pub per_page: Option<u64>,
    /// Whether total rows are counted.
    pub count_total: bool,
}

impl QueryArgs {
    /// Create empty arguments.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: None,
            paged: None,
            per_page: None,
            count_total: false,
        }
    }

    /// Row window as `(limit, offset)`.
    ///
    /// An explicit offset wins. Otherwise the offset is derived from the page
    /// number and the page size, which is `per_page` minus the over-fetched
    /// row. `None` without a limit.
    #[must_use]
    pub const fn window(&self) -> Option<(u64, u64)> {
        let Some(limit) = self.per_page else {
            return None;
        };
        let offset = match (self.offset, self.paged) {
            (Some(offset), _) if offset > 0 => offset,
            (_, Some(paged)) => paged
                .saturating_sub(1)
                .saturating_mul(limit.saturating_sub(1)),
            _ => 0,
        };
        Some((limit, offset))
    }
}

impl NativeQueryArgs for QueryArgs {
    fn set_offset(&mut self, offset: u64) {
        self.offset = Some(offset);
    }

    fn set_paged(&mut self, paged: u64) {
        self.paged = Some(paged);
    }

    fn set_per_page(&mut self, per_page: u64) {
        self.per_page = Some(per_page);
    }

    fn enable_total_count(&mut self, _kind: QueryKind) {
        self.count_total = true;
    }
}

/// Copy the input block onto native query arguments.
///
/// Every supplied field is validated before any of them is written, so a
/// rejected input leaves the arguments untouched. Absent fields are skipped.
/// The page size is written as `postsPerPage + 1` so the caller can detect a
/// next page from the row count.
pub fn map_input<A>(args: &mut A, input: &CustomPaginationInput) -> Result<()>
where
    A: NativeQueryArgs + ?Sized,
{
    let offset = input
        .offset
        .map(|offset| u64::try_from(offset).map_err(|_| PaginationError::NegativeOffset(offset)))
        .transpose()?;

    let paged = input
        .paged
        .map(|paged| match u64::try_from(paged) {
            Ok(page) if page > 0 => Ok(page),
            _ => Err(PaginationError::InvalidPage(paged)),
        })
        .transpose()?;

    let per_page = match input.posts_per_page {
        Some(_) => Some(input.page_size()?.saturating_add(1)),
        None => None,
    };

    if let Some(offset) = offset {
        args.set_offset(offset);
    }
    if let Some(paged) = paged {
        args.set_paged(paged);
    }
    if let Some(per_page) = per_page {
        args.set_per_page(per_page);
    }

    Ok(())
}
