//! Error type for pagination requests and configuration.

use thiserror::Error;

/// Errors raised while building or evaluating a custom pagination request.
///
/// Every variant is scoped to a single connection resolution. None of them
/// are retryable: the request was built wrong and retrying yields the same
/// result.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PaginationError {
    /// `postsPerPage` is missing, zero or negative.
    #[error("invalid page size {0}: postsPerPage must be a positive integer")]
    InvalidPageSize(i64),

    /// `paged` is zero or negative.
    #[error("invalid page {0}: paged must be 1 or greater")]
    InvalidPage(i64),

    /// `offset` is negative.
    #[error("invalid offset {0}: offset must not be negative")]
    NegativeOffset(i64),

    /// `postsPerPage` exceeds the configured cap.
    #[error("page size {requested} exceeds the maximum of {max}")]
    PageSizeTooLarge {
        /// Page size the caller asked for.
        requested: u64,
        /// Configured maximum.
        max: u64,
    },

    /// The `customPagination` block could not be decoded.
    #[error("malformed customPagination input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// The computed page info could not be serialized into the host's page
    /// info object.
    #[error("failed to serialize custom pagination page info: {0}")]
    Output(#[source] serde_json::Error),

    /// The configuration document could not be decoded.
    #[error("invalid pagination config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PaginationError>;
