//! The `customPagination` input block of a connection's `where` arguments.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{PaginationError, Result};
use crate::pagination::PaginationRequest;
use crate::schema::{CUSTOM_PAGINATION_FIELD, WHERE_ARG};

/// Raw `customPagination` input as sent by the client.
///
/// Values are GraphQL `Int`s and may be negative; [`to_request`](Self::to_request)
/// validates them. The legacy `posts_per_page` key is accepted for
/// `postsPerPage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CustomPaginationInput {
    /// Items per page.
    #[serde(alias = "posts_per_page")]
    pub posts_per_page: Option<i64>,
    /// 1-based page number.
    pub paged: Option<i64>,
    /// Items to skip.
    pub offset: Option<i64>,
}

impl CustomPaginationInput {
    /// Create an input block with the given page size.
    #[must_use]
    pub const fn new(posts_per_page: i64) -> Self {
        Self {
            posts_per_page: Some(posts_per_page),
            paged: None,
            offset: None,
        }
    }

    /// Set the page number.
    #[must_use]
    pub const fn with_paged(mut self, paged: i64) -> Self {
        self.paged = Some(paged);
        self
    }

    /// Set the offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Read the block from a connection's full argument object
    /// (`{"first": .., "where": {"customPagination": {..}}}`).
    ///
    /// Returns `Ok(None)` when the connection is not custom-paginated.
    pub fn from_args(args: &Value) -> Result<Option<Self>> {
        match args.get(WHERE_ARG) {
            Some(where_args) => Self::from_where_args(where_args),
            None => Ok(None),
        }
    }

    /// Read the block from a connection's `where` argument object.
    ///
    /// A missing, null or empty block means cursor pagination stays in charge.
    pub fn from_where_args(where_args: &Value) -> Result<Option<Self>> {
        let block = match where_args.get(CUSTOM_PAGINATION_FIELD) {
            None | Some(Value::Null) => return Ok(None),
            Some(block) => block,
        };

        let input = Self::deserialize(block)?;
        if input.is_empty() {
            return Ok(None);
        }
        Ok(Some(input))
    }

    /// Whether no field was supplied at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.posts_per_page.is_none() && self.paged.is_none() && self.offset.is_none()
    }

    /// Validated page size.
    ///
    /// A missing value is reported as page size 0.
    pub fn page_size(&self) -> Result<u64> {
        let raw = self.posts_per_page.unwrap_or(0);
        match u64::try_from(raw) {
            Ok(size) if size > 0 => Ok(size),
            _ => Err(PaginationError::InvalidPageSize(raw)),
        }
    }

    /// Validate into a [`PaginationRequest`].
    ///
    /// Missing `offset` defaults to 0 and missing `paged` to 1.
    pub fn to_request(&self) -> Result<PaginationRequest> {
        let page_size = self.page_size()?;

        let offset = self.offset.unwrap_or(0);
        let offset = u64::try_from(offset).map_err(|_| PaginationError::NegativeOffset(offset))?;

        let paged = self.paged.unwrap_or(1);
        let page = match u64::try_from(paged) {
            Ok(page) if page > 0 => page,
            _ => return Err(PaginationError::InvalidPage(paged)),
        };

        Ok(PaginationRequest::new(page_size)
            .with_offset(offset)
            .with_page(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_block_is_cursor_pagination() {
        assert_eq!(CustomPaginationInput::from_args(&json!({"first": 10})).unwrap(), None);
        assert_eq!(
            CustomPaginationInput::from_args(&json!({"where": {"search": "x"}})).unwrap(),
            None
        );
        assert_eq!(
            CustomPaginationInput::from_args(&json!({"where": {"customPagination": null}}))
                .unwrap(),
            None
        );
        assert_eq!(
            CustomPaginationInput::from_args(&json!({"where": {"customPagination": {}}})).unwrap(),
            None
        );
    }

    #[test]
    fn test_reads_camel_case_block() {
        let args = json!({
            "where": {"customPagination": {"postsPerPage": 10, "paged": 2, "offset": 5}}
        });
        let input = CustomPaginationInput::from_args(&args).unwrap().unwrap();

        assert_eq!(input, CustomPaginationInput::new(10).with_paged(2).with_offset(5));
    }

    #[test]
    fn test_accepts_legacy_snake_case_page_size() {
        let where_args = json!({"customPagination": {"posts_per_page": 3}});
        let input = CustomPaginationInput::from_where_args(&where_args)
            .unwrap()
            .unwrap();
        assert_eq!(input.posts_per_page, Some(3));
    }

    #[test]
    fn test_malformed_block() {
        let where_args = json!({"customPagination": {"postsPerPage": "ten"}});
        let err = CustomPaginationInput::from_where_args(&where_args).unwrap_err();
        assert!(matches!(err, PaginationError::MalformedInput(_)));

        let where_args = json!({"customPagination": 10});
        assert!(CustomPaginationInput::from_where_args(&where_args).is_err());
    }

    #[test]
    fn test_to_request_defaults() {
        let request = CustomPaginationInput::new(10).to_request().unwrap();
        assert_eq!(request, PaginationRequest::new(10));
        assert_eq!(request.page, 1);
        assert_eq!(request.offset, 0);
    }

    #[test]
    fn test_to_request_rejects_bad_values() {
        let missing = CustomPaginationInput {
            posts_per_page: None,
            paged: Some(2),
            offset: None,
        };
        assert!(matches!(
            missing.to_request(),
            Err(PaginationError::InvalidPageSize(0))
        ));
        assert!(matches!(
            CustomPaginationInput::new(-5).to_request(),
            Err(PaginationError::InvalidPageSize(-5))
        ));
        assert!(matches!(
            CustomPaginationInput::new(10).with_offset(-1).to_request(),
            Err(PaginationError::NegativeOffset(-1))
        ));
        assert!(matches!(
            CustomPaginationInput::new(10).with_paged(0).to_request(),
            Err(PaginationError::InvalidPage(0))
        ));
    }
}
