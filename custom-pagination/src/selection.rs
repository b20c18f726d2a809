//! Requested field selection, as reported by the host before execution.
//!
//! Used to decide whether the caller asked for total-dependent fields. Only
//! the top `depth + 1` levels below the connection field are inspected, the
//! same window the host's depth-limited selection exposes. A `total`
//! requested deeper than that window does not enable counting.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde_json::Value;

use crate::schema::{CUSTOM_PAGINATION_FIELD, PAGE_INFO_FIELD, TOTAL_FIELD, TOTAL_PAGES_FIELD};

/// Tree of requested field names below a connection field.
///
/// # Example
///
/// ```
/// use custom_pagination::FieldSelection;
///
/// let selection = FieldSelection::new()
///     .leaf("nodes")
///     .field("pageInfo", FieldSelection::new().leaf("hasNextPage"));
///
/// assert!(selection.contains_path(&["pageInfo", "hasNextPage"]));
/// assert!(!selection.contains_path(&["pageInfo", "endCursor"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct FieldSelection {
    fields: BTreeMap<String, FieldSelection>,
}

impl FieldSelection {
    /// Create an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Add a field with sub-selections. Selecting the same field twice merges
    /// the sub-selections.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, selection: Self) -> Self {
        self.insert(name.into(), selection);
        self
    }

    /// Add a scalar field.
    #[must_use]
    pub fn leaf(self, name: impl Into<String>) -> Self {
        self.field(name, Self::new())
    }

    /// Build from the nested-map form hosts commonly expose:
    /// objects for composite fields, `true` for scalars.
    ///
    /// ```
    /// use custom_pagination::FieldSelection;
    /// use serde_json::json;
    ///
    /// let selection = FieldSelection::from_json(&json!({
    ///     "pageInfo": {"customPagination": {"total": true}}
    /// }));
    /// assert!(selection.contains_path(&["pageInfo", "customPagination", "total"]));
    /// ```
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let mut selection = Self::new();
        if let Value::Object(map) = value {
            for (name, child) in map {
                selection.insert(name.clone(), Self::from_json(child));
            }
        }
        selection
    }

    fn insert(&mut self, name: String, selection: Self) {
        match self.fields.entry(name) {
            Entry::Occupied(mut existing) => existing.get_mut().merge(selection),
            Entry::Vacant(slot) => {
                slot.insert(selection);
            },
        }
    }

    /// Merge another selection into this one.
    pub fn merge(&mut self, other: Self) {
        for (name, child) in other.fields {
            self.insert(name, child);
        }
    }

    /// Sub-selection of a direct child field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Self> {
        self.fields.get(name)
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether the path of field names is selected.
    #[must_use]
    pub fn contains_path(&self, path: &[&str]) -> bool {
        let mut node = self;
        for name in path {
            match node.get(name) {
                Some(child) => node = child,
                None => return false,
            }
        }
        true
    }

    /// Copy keeping `depth` levels below the direct children.
    ///
    /// Depth 0 keeps direct children only.
    #[must_use]
    pub fn truncated(&self, depth: usize) -> Self {
        let fields = self
            .fields
            .iter()
            .map(|(name, child)| {
                let child = match depth.checked_sub(1) {
                    Some(rest) => child.truncated(rest),
                    None => Self::new(),
                };
                (name.clone(), child)
            })
            .collect();
        Self { fields }
    }
}

/// Whether `pageInfo.customPagination.total` or `totalPages` is selected
/// within `depth` levels below the direct children of the connection.
#[must_use]
pub fn requests_total(selection: &FieldSelection, depth: usize) -> bool {
    let window = selection.truncated(depth);
    [TOTAL_FIELD, TOTAL_PAGES_FIELD]
        .into_iter()
        .any(|field| window.contains_path(&[PAGE_INFO_FIELD, CUSTOM_PAGINATION_FIELD, field]))
}
