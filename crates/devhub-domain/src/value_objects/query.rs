//! Search Query Value Object

use crate::constants::{SEARCH_QUERY_MAX_CHARS, SEARCH_QUERY_REQUIRED, SEARCH_QUERY_TOO_LONG};
use crate::error::{Error, Result};
use crate::value_objects::TextPattern;

/// Value Object: Validated search query
///
/// Holds the trimmed query text together with the two matchers derived from
/// it. A `SearchQuery` can only be built from non-blank input, so any code
/// holding one may touch the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    prefix: TextPattern,
    contains: TextPattern,
}

impl SearchQuery {
    /// Parse a raw query parameter
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the parameter is missing,
    /// empty or whitespace only, or longer than [`SEARCH_QUERY_MAX_CHARS`].
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let text = raw.map(str::trim).unwrap_or_default();
        if text.is_empty() {
            return Err(Error::invalid_argument(SEARCH_QUERY_REQUIRED));
        }
        if text.chars().count() > SEARCH_QUERY_MAX_CHARS {
            return Err(Error::invalid_argument(SEARCH_QUERY_TOO_LONG));
        }

        Ok(Self {
            text: text.to_owned(),
            prefix: TextPattern::prefix(text)?,
            contains: TextPattern::contains(text)?,
        })
    }

    /// Trimmed query text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Matcher anchored at the start of a field
    pub fn prefix(&self) -> &TextPattern {
        &self.prefix
    }

    /// Unanchored matcher
    pub fn contains(&self) -> &TextPattern {
        &self.contains
    }

    /// Case-insensitive "`field` starts with the query"
    pub fn is_prefix_of(&self, field: &str) -> bool {
        self.prefix.is_match(field)
    }
}
