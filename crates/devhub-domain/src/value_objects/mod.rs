//! Domain Value Objects
//!
//! Immutable values used by the search subsystem. None of them carry
//! identity; two values with the same attributes are interchangeable.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`TextPattern`] | Case-insensitive literal matcher, anchored or not |
//! | [`SearchQuery`] | Validated, trimmed query with its compiled matchers |
//! | [`SearchResult`] | Unified result shape returned to clients |
//! | [`ResultType`] | Tag identifying the collection a result came from |
//! | [`SearchEntity`] | Tagged union over the searchable entities |

/// Text matching patterns
pub mod pattern;
/// Validated search query
pub mod query;
/// Search results and the entity union
pub mod search;

pub use pattern::{MatchAnchor, TextPattern};
pub use query::SearchQuery;
pub use search::{ResultType, SearchEntity, SearchResult};
