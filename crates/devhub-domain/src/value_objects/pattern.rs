//! Text Pattern Value Object
//!
//! Case-insensitive matchers built from user input. The input is always
//! escaped, so regex metacharacters typed by a user match literally.

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

/// Where a [`TextPattern`] must match inside a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchAnchor {
    /// Field must start with the text
    Prefix,
    /// Text may appear anywhere in the field
    Contains,
}

/// Value Object: Case-insensitive literal text matcher
///
/// ## Example
///
/// ```rust
/// use devhub_domain::value_objects::TextPattern;
///
/// let pattern = TextPattern::prefix("zen").unwrap();
/// assert!(pattern.is_match("ZenParser"));
/// assert!(!pattern.is_match("The Zen of Code"));
/// ```
#[derive(Debug, Clone)]
pub struct TextPattern {
    text: String,
    anchor: MatchAnchor,
    regex: Regex,
}

impl TextPattern {
    /// Build a pattern with the given anchor
    ///
    /// # Errors
    ///
    /// Returns an internal error if the escaped pattern cannot be compiled,
    /// which only happens when it exceeds the regex size limit.
    pub fn new(text: impl Into<String>, anchor: MatchAnchor) -> Result<Self> {
        let text = text.into();
        let escaped = regex::escape(&text);
        let source = match anchor {
            MatchAnchor::Prefix => format!("^{escaped}"),
            MatchAnchor::Contains => escaped,
        };
        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::internal(format!("Failed to compile search pattern: {e}")))?;

        Ok(Self {
            text,
            anchor,
            regex,
        })
    }

    /// Pattern matching fields that start with `text`
    ///
    /// # Errors
    ///
    /// See [`TextPattern::new`].
    pub fn prefix(text: impl Into<String>) -> Result<Self> {
        Self::new(text, MatchAnchor::Prefix)
    }

    /// Pattern matching fields that contain `text`
    ///
    /// # Errors
    ///
    /// See [`TextPattern::new`].
    pub fn contains(text: impl Into<String>) -> Result<Self> {
        Self::new(text, MatchAnchor::Contains)
    }

    /// Whether `field` matches this pattern
    pub fn is_match(&self, field: &str) -> bool {
        self.regex.is_match(field)
    }

    /// Whether an optional field is present and matches
    pub fn matches_opt(&self, field: Option<&str>) -> bool {
        field.is_some_and(|f| self.is_match(f))
    }

    /// Anchor of this pattern
    pub fn anchor(&self) -> MatchAnchor {
        self.anchor
    }

    /// Original unescaped text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl PartialEq for TextPattern {
    fn eq(&self, other: &Self) -> bool {
        self.anchor == other.anchor && self.text == other.text
    }
}

impl Eq for TextPattern {}

impl fmt::Display for TextPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.regex.as_str())
    }
}
