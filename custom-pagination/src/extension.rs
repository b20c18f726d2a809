//! The pagination extension and the resolver contract it relies on.
//!
//! The host calls one method per pipeline stage:
//!
//! | Stage                      | Method                                      |
//! |----------------------------|---------------------------------------------|
//! | Map input to query args    | [`CustomPagination::map_input_fields`]      |
//! | Items to request           | [`CustomPagination::amount_requested`]      |
//! | Final query args           | [`CustomPagination::connection_query_args`] |
//! | Page info assembly         | [`CustomPagination::page_info`]             |
//!
//! Connections without a `customPagination` block pass through every stage
//! untouched, so cursor pagination keeps working.

use serde_json::{Map, Value};

use crate::config::PaginationConfig;
use crate::error::{PaginationError, Result};
use crate::input::CustomPaginationInput;
use crate::pagination::{FetchResult, PageInfo};
use crate::query::{NativeQueryArgs, QueryKind, QueryOutcome, map_input};
use crate::schema::CUSTOM_PAGINATION_FIELD;
use crate::selection::{FieldSelection, requests_total};

/// A connection being resolved, as seen by the extension.
pub trait ConnectionResolver {
    /// Full connection arguments, including `where`.
    fn args(&self) -> &Value;

    /// Engine backing the connection.
    fn query_kind(&self) -> QueryKind;

    /// Requested fields below the connection, at least `depth` levels below
    /// its direct children.
    fn field_selection(&self, depth: usize) -> FieldSelection;

    /// What the executed query returned. Only called after execution.
    fn query_outcome(&self) -> QueryOutcome;

    /// Rows the executed query returned. Only called after execution.
    fn fetched_count(&self) -> usize;
}

/// Offset/page pagination for cursor-based connections.
///
/// Stateless apart from its configuration; one instance serves every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomPagination {
    config: PaginationConfig,
}

impl CustomPagination {
    /// Create the extension.
    #[must_use]
    pub const fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// The resolver's `customPagination` block, `None` for cursor pagination.
    pub fn input<R>(resolver: &R) -> Result<Option<CustomPaginationInput>>
    where
        R: ConnectionResolver + ?Sized,
    {
        CustomPaginationInput::from_args(resolver.args())
    }

    /// Translate the block in `where_args` onto native query arguments,
    /// over-fetching one row.
    pub fn map_input_fields<A>(&self, args: &mut A, where_args: &Value) -> Result<()>
    where
        A: NativeQueryArgs + ?Sized,
    {
        let Some(input) = CustomPaginationInput::from_where_args(where_args)? else {
            return Ok(());
        };

        if input.posts_per_page.is_some() {
            self.config
                .check_page_size(input.page_size()?)
                .inspect_err(|err| tracing::warn!(%err, "rejected custom pagination input"))?;
        }

        map_input(args, &input)
            .inspect_err(|err| tracing::warn!(%err, "rejected custom pagination input"))
    }

    /// Items the connection should return: the page size when custom
    /// pagination is active, `amount` otherwise.
    pub fn amount_requested<R>(&self, amount: u64, resolver: &R) -> Result<u64>
    where
        R: ConnectionResolver + ?Sized,
    {
        let Some(input) = Self::input(resolver)? else {
            return Ok(amount);
        };

        let page_size = input
            .page_size()
            .and_then(|size| self.config.check_page_size(size))
            .inspect_err(|err| tracing::warn!(%err, "rejected custom pagination page size"))?;

        tracing::debug!(page_size, default_amount = amount, "custom pagination active");
        Ok(page_size)
    }

    /// Enable total row counting when the selection asks for `total` or
    /// `totalPages`. Returns whether counting was enabled.
    ///
    /// Only `config.selection_depth` levels are searched; see
    /// [`requests_total`].
    pub fn connection_query_args<A, R>(&self, args: &mut A, resolver: &R) -> bool
    where
        A: NativeQueryArgs + ?Sized,
        R: ConnectionResolver + ?Sized,
    {
        let depth = self.config.selection_depth;
        let selection = resolver.field_selection(depth);
        if !requests_total(&selection, depth) {
            return false;
        }

        let kind = resolver.query_kind();
        tracing::debug!(?kind, "enabling total row counting");
        args.enable_total_count(kind);
        true
    }

    /// Compute the page info of an executed custom-paginated connection.
    ///
    /// `Ok(None)` for cursor-paginated connections.
    pub fn resolve_page_info<R>(&self, resolver: &R) -> Result<Option<PageInfo>>
    where
        R: ConnectionResolver + ?Sized,
    {
        let Some(input) = Self::input(resolver)? else {
            return Ok(None);
        };

        let info = input
            .to_request()
            .and_then(|request| {
                self.config.check_page_size(request.page_size)?;
                let fetched = FetchResult::new(resolver.fetched_count())
                    .with_total(resolver.query_outcome().total());
                PageInfo::compute(&request, &fetched)
            })
            .inspect_err(|err| tracing::warn!(%err, "custom pagination page info failed"))?;

        Ok(Some(info))
    }

    /// Attach the page info under `customPagination` in the connection's
    /// page info object.
    ///
    /// Cursor-paginated connections leave `page_info` untouched and return
    /// `Ok(None)`.
    pub fn page_info<R>(
        &self,
        page_info: &mut Map<String, Value>,
        resolver: &R,
    ) -> Result<Option<PageInfo>>
    where
        R: ConnectionResolver + ?Sized,
    {
        let Some(info) = self.resolve_page_info(resolver)? else {
            return Ok(None);
        };

        page_info.insert(
            CUSTOM_PAGINATION_FIELD.to_string(),
            serde_json::to_value(info).map_err(PaginationError::Output)?,
        );
        Ok(Some(info))
    }
}
