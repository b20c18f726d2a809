//! Names and SDL of the `customPagination` schema contract.
//!
//! The host registers these types; this module only describes them so the
//! host and the extension agree on field names.
//!
//! ```
//! use custom_pagination::schema;
//!
//! let sdl = schema::sdl("WPPageInfo", &schema::DEFAULT_WHERE_ARGS_TYPES);
//! assert!(sdl.contains("input CustomPagination {"));
//! assert!(sdl.contains("extend input TagToPostConnectionWhereArgs {"));
//! ```

/// Connection argument holding the filter block.
pub const WHERE_ARG: &str = "where";

/// Connection field holding page info.
pub const PAGE_INFO_FIELD: &str = "pageInfo";

/// Field name of both the input block and the page info block.
pub const CUSTOM_PAGINATION_FIELD: &str = "customPagination";

/// Input type name.
pub const INPUT_TYPE: &str = "CustomPagination";

/// Output type name.
pub const PAGE_INFO_TYPE: &str = "CustomPaginationPageInfo";

/// Output field that requires a total count.
pub const TOTAL_FIELD: &str = "total";

/// Output field derived from the total count.
pub const TOTAL_PAGES_FIELD: &str = "totalPages";

/// Where-argument types that carry the input block regardless of post types.
pub const DEFAULT_WHERE_ARGS_TYPES: [&str; 4] = [
    "RootQueryToContentNodeConnectionWhereArgs",
    "RootQueryToUserConnectionWhereArgs",
    "CategoryToPostConnectionWhereArgs",
    "TagToPostConnectionWhereArgs",
];

const INPUT_FIELDS: [(&str, &str); 3] = [
    ("postsPerPage", "Number of items to show per page."),
    ("paged", "Page number, starting at 1."),
    ("offset", "Number of items to displace or pass over."),
];

const OUTPUT_FIELDS: [(&str, &str); 7] = [
    ("total", "Int"),
    ("hasPreviousPage", "Boolean"),
    ("hasNextPage", "Boolean"),
    ("previousPage", "Int"),
    ("currentPage", "Int"),
    ("nextPage", "Int"),
    ("totalPages", "Int"),
];

/// Where-argument type of the root connection for a post type.
///
/// The GraphQL single name is capitalized: `post` becomes
/// `RootQueryToPostConnectionWhereArgs`.
#[must_use]
pub fn where_args_type_for(graphql_single_name: &str) -> String {
    let mut chars = graphql_single_name.chars();
    let type_name: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("RootQueryTo{type_name}ConnectionWhereArgs")
}

/// Render the SDL for the input type, the output type and the extensions
/// attaching them to `page_info_type` and every type in `where_types`.
#[must_use]
pub fn sdl<S: AsRef<str>>(page_info_type: &str, where_types: &[S]) -> String {
    let mut out = String::new();

    out.push_str("\"Custom pagination input type\"\n");
    out.push_str(&format!("input {INPUT_TYPE} {{\n"));
    for (name, description) in INPUT_FIELDS {
        out.push_str(&format!("  \"{description}\"\n  {name}: Int\n"));
    }
    out.push_str("}\n\n");

    out.push_str("\"Get information about the custom pagination state\"\n");
    out.push_str(&format!("type {PAGE_INFO_TYPE} {{\n"));
    for (name, ty) in OUTPUT_FIELDS {
        out.push_str(&format!("  {name}: {ty}\n"));
    }
    out.push_str("}\n\n");

    out.push_str(&format!(
        "extend type {page_info_type} {{\n  {CUSTOM_PAGINATION_FIELD}: {PAGE_INFO_TYPE}\n}}\n"
    ));

    for where_type in where_types {
        out.push_str(&format!(
            "\nextend input {} {{\n  {CUSTOM_PAGINATION_FIELD}: {INPUT_TYPE}\n}}\n",
            where_type.as_ref()
        ));
    }

    out
}
