//! Domain layer constants
//!
//! Contains constants that are part of the search contract. Infrastructure
//! constants live in `devhub_infrastructure::constants`.

// ============================================================================
// SEARCH DOMAIN CONSTANTS
// ============================================================================

/// Maximum number of records fetched from each collection per query
pub const SEARCH_PER_TYPE_LIMIT: usize = 5;

/// Maximum number of results returned to the client after ranking
pub const SEARCH_MAX_RESULTS: usize = 10;

/// Message returned when the query parameter is missing or blank
pub const SEARCH_QUERY_REQUIRED: &str = "Search query is required";

/// Longest accepted query, in characters after trimming
pub const SEARCH_QUERY_MAX_CHARS: usize = 256;

/// Message returned when the query exceeds [`SEARCH_QUERY_MAX_CHARS`]
pub const SEARCH_QUERY_TOO_LONG: &str = "Search query is too long";
