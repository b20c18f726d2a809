//! Extension configuration.
//!
//! # Environment Variables
//!
//! | Variable                            | Default | Description                             |
//! |-------------------------------------|---------|-----------------------------------------|
//! | `CUSTOM_PAGINATION_SELECTION_DEPTH` | 2       | Selection levels inspected for totals   |
//! | `CUSTOM_PAGINATION_MAX_PAGE_SIZE`   | unset   | Largest accepted `postsPerPage`         |
//!
//! # TOML
//!
//! ```
//! use custom_pagination::PaginationConfig;
//!
//! let config = PaginationConfig::from_toml_str("max_page_size = 100").unwrap();
//! assert_eq!(config.max_page_size, Some(100));
//! assert_eq!(config.selection_depth, 2);
//! ```

use serde::Deserialize;

use crate::error::{PaginationError, Result};

/// Default number of selection levels below the connection's direct
/// children that are searched for total fields.
pub const DEFAULT_SELECTION_DEPTH: usize = 2;

/// Environment variable overriding [`PaginationConfig::selection_depth`].
pub const ENV_SELECTION_DEPTH: &str = "CUSTOM_PAGINATION_SELECTION_DEPTH";

/// Environment variable setting [`PaginationConfig::max_page_size`].
pub const ENV_MAX_PAGE_SIZE: &str = "CUSTOM_PAGINATION_MAX_PAGE_SIZE";

/// Tunables for [`CustomPagination`](crate::CustomPagination).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[non_exhaustive]
pub struct PaginationConfig {
    /// Levels below the connection's direct children searched for
    /// `pageInfo.customPagination.total`. Needs at least 2 to reach it.
    pub selection_depth: usize,
    /// Largest accepted page size. `None` accepts any positive size.
    pub max_page_size: Option<u64>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            selection_depth: DEFAULT_SELECTION_DEPTH,
            max_page_size: None,
        }
    }
}

impl PaginationConfig {
    /// Set the selection depth.
    #[must_use]
    pub const fn with_selection_depth(mut self, depth: usize) -> Self {
        self.selection_depth = depth;
        self
    }

    /// Cap the page size.
    #[must_use]
    pub const fn with_max_page_size(mut self, max: u64) -> Self {
        self.max_page_size = Some(max);
        self
    }

    /// Parse a TOML document. Missing keys keep their defaults and a
    /// `max_page_size` of 0 means no cap.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(source)?;
        config.max_page_size = config.max_page_size.filter(|max| *max > 0);
        Ok(config)
    }

    /// Read overrides from the process environment.
    ///
    /// Unset or unparsable variables keep their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read overrides from a list of environment variables.
    ///
    /// ```
    /// use custom_pagination::PaginationConfig;
    ///
    /// let env = vec![("CUSTOM_PAGINATION_MAX_PAGE_SIZE".to_string(), "50".to_string())];
    /// assert_eq!(PaginationConfig::from_env_vars(&env).max_page_size, Some(50));
    /// ```
    #[must_use]
    pub fn from_env_vars(env: &[(String, String)]) -> Self {
        Self::from_lookup(|name| {
            env.iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        })
    }

    /// Apply overrides found by `lookup`. A max page size of 0 is treated as
    /// unset, like any other value that cannot be a cap.
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(depth) = lookup(ENV_SELECTION_DEPTH).and_then(|v| v.trim().parse().ok()) {
            config.selection_depth = depth;
        }
        if let Some(max) = lookup(ENV_MAX_PAGE_SIZE)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|max| *max > 0)
        {
            config.max_page_size = Some(max);
        }
        config
    }

    /// Check a page size against the cap.
    pub fn check_page_size(&self, page_size: u64) -> Result<u64> {
        match self.max_page_size {
            Some(max) if page_size > max => Err(PaginationError::PageSizeTooLarge {
                requested: page_size,
                max,
            }),
            _ => Ok(page_size),
        }
    }
}
