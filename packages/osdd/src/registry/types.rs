//! Types for the element registry system.

use std::fmt;

use crate::config::{ParserOptions, SEARCH_URL_TYPE, SUGGESTIONS_URL_TYPE};
use crate::error::ParseError;
use crate::filter::ParameterFilter;
use crate::types::{SearchTemplate, UrlTemplate};

/// Which template a `<Url>` element describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    /// The search results page (`text/html`).
    Search,
    /// The search suggestions endpoint (`application/x-suggestions+json`).
    Suggestions,
}

impl UrlKind {
    /// Classify a `<Url type="...">` value. Other types are not used.
    #[must_use]
    pub fn from_type(mime_type: &str) -> Option<Self> {
        match mime_type {
            SEARCH_URL_TYPE => Some(Self::Search),
            SUGGESTIONS_URL_TYPE => Some(Self::Suggestions),
            _ => None,
        }
    }

    /// Get the `type` attribute value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Search => SEARCH_URL_TYPE,
            Self::Suggestions => SUGGESTIONS_URL_TYPE,
        }
    }
}

/// State collected while walking one document.
///
/// Every field is filled at most once (first occurrence wins), except
/// `input_encodings` which collects all values in document order.
pub struct ParseContext<'f> {
    /// Filter consulted for every query parameter.
    pub filter: Option<&'f dyn ParameterFilter>,

    /// Text of the first non-empty `<ShortName>`.
    pub short_name: Option<String>,

    /// Text of the first non-empty `<Description>`.
    pub description: Option<String>,

    /// First usable `<Image>` URL.
    pub favicon_url: Option<String>,

    /// First GET search URL.
    pub search_url: Option<UrlTemplate>,

    /// First GET suggestions URL.
    pub suggestions_url: Option<UrlTemplate>,

    /// `<InputEncoding>` values.
    pub input_encodings: Vec<String>,

    /// Set when a search URL was dropped for using an unsupported method.
    pub dropped_post_search: bool,
}

impl<'f> ParseContext<'f> {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            filter: None,
            short_name: None,
            description: None,
            favicon_url: None,
            search_url: None,
            suggestions_url: None,
            input_encodings: Vec::new(),
            dropped_post_search: false,
        }
    }

    /// Set the parameter filter.
    #[must_use]
    pub fn with_filter(mut self, filter: Option<&'f dyn ParameterFilter>) -> Self {
        self.filter = filter;
        self
    }

    /// Get the URL recorded for a kind.
    #[must_use]
    pub fn url(&self, kind: UrlKind) -> Option<&UrlTemplate> {
        match kind {
            UrlKind::Search => self.search_url.as_ref(),
            UrlKind::Suggestions => self.suggestions_url.as_ref(),
        }
    }

    /// Record a URL. Returns `false` if one was already recorded for this kind.
    pub fn set_url(&mut self, kind: UrlKind, url: UrlTemplate) -> bool {
        let slot = match kind {
            UrlKind::Search => &mut self.search_url,
            UrlKind::Suggestions => &mut self.suggestions_url,
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(url);
        true
    }

    /// Validate the collected state and build the template.
    ///
    /// # Errors
    /// `MissingSearchUrl` without a GET search URL, `MissingShortName` when
    /// the options require a short name and there is none.
    pub fn into_template(self, options: &ParserOptions) -> Result<SearchTemplate, ParseError> {
        let Some(search_url) = self.search_url else {
            return Err(ParseError::MissingSearchUrl {
                dropped_post: self.dropped_post_search,
            });
        };

        if options.require_short_name && self.short_name.is_none() {
            return Err(ParseError::MissingShortName);
        }

        Ok(SearchTemplate {
            short_name: self.short_name.unwrap_or_default(),
            description: self.description,
            favicon_url: self.favicon_url,
            search_url,
            suggestions_url: self.suggestions_url,
            input_encodings: self.input_encodings,
        })
    }
}

impl Default for ParseContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ParseContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseContext")
            .field("short_name", &self.short_name)
            .field("description", &self.description)
            .field("favicon_url", &self.favicon_url)
            .field("search_url", &self.search_url)
            .field("suggestions_url", &self.suggestions_url)
            .field("input_encodings", &self.input_encodings)
            .field("dropped_post_search", &self.dropped_post_search)
            .field("has_filter", &self.filter.is_some())
            .finish()
    }
}
