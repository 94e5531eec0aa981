//! Query parameter filtering.
//!
//! The parser asks a [`ParameterFilter`] about every query parameter it
//! finds, once, in document order. Parameters the filter rejects are left
//! out of the resulting URL.

/// Decides which query parameters are kept in a parsed URL template.
///
/// Implementations must be pure: the same `(key, value)` gives the same
/// answer for the duration of a parse.
pub trait ParameterFilter: Send + Sync {
    /// Return `true` to keep the parameter.
    fn keep_parameter(&self, key: &str, value: &str) -> bool;
}

impl<F> ParameterFilter for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn keep_parameter(&self, key: &str, value: &str) -> bool {
        self(key, value)
    }
}

/// Rejects parameters whose key or value contains a substring.
///
/// An empty needle disables that side of the check.
///
/// # Examples
/// ```
/// use osdd_parser::{ParameterFilter, SubstringFilter};
///
/// let filter = SubstringFilter::new("", "Mozilla");
/// assert!(filter.keep_parameter("q", "{searchTerms}"));
/// assert!(!filter.keep_parameter("client", "Mozilla-search"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstringFilter {
    key: String,
    value: String,
}

impl SubstringFilter {
    /// Create a filter rejecting keys containing `key` or values containing `value`.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// True when neither needle is set and every parameter is kept.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.key.is_empty() && self.value.is_empty()
    }
}

impl ParameterFilter for SubstringFilter {
    fn keep_parameter(&self, key: &str, value: &str) -> bool {
        (self.key.is_empty() || !key.contains(&self.key))
            && (self.value.is_empty() || !value.contains(&self.value))
    }
}
