//! Core data types: the parsed search engine template.

use serde::Serialize;
use url::Url;

use crate::config::FAVICON_PATH;
use crate::placeholder::{self, PlaceholderToken, SearchTermsArgs};
use crate::query::{parse_query, split_url};

/// A query parameter of a template URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlParameter {
    /// Parameter name, as written in the document.
    pub name: String,
    /// Parameter value, possibly a placeholder such as `{searchTerms}`.
    pub value: String,
}

impl UrlParameter {
    /// Create a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Render as `name=value`.
    #[must_use]
    pub fn to_query_pair(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

/// A URL with placeholders, such as the search or suggestions URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlTemplate {
    url: String,
    parameters: Vec<UrlParameter>,
}

impl UrlTemplate {
    /// Create a template from a URL string, reading its query parameters.
    ///
    /// # Examples
    /// ```
    /// use osdd_parser::UrlTemplate;
    ///
    /// let url = UrlTemplate::new("http://x.test/s?q={searchTerms}&ie=UTF-8");
    /// assert!(url.supports_replacement());
    /// assert_eq!(url.parameters().len(), 2);
    /// ```
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let parameters = split_url(&url).query.map(parse_query).unwrap_or_default();
        Self { url, parameters }
    }

    pub(crate) fn from_parts(url: impl Into<String>, parameters: Vec<UrlParameter>) -> Self {
        Self {
            url: url.into(),
            parameters,
        }
    }

    /// The template URL, including kept query parameters.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The kept query parameters, in URL order.
    #[must_use]
    pub fn parameters(&self) -> &[UrlParameter] {
        &self.parameters
    }

    /// All placeholder tokens in the URL.
    #[must_use]
    pub fn placeholders(&self) -> Vec<PlaceholderToken> {
        placeholder::scan(&self.url)
    }

    /// Whether the URL contains a `{searchTerms}` placeholder.
    #[must_use]
    pub fn supports_replacement(&self) -> bool {
        placeholder::has_search_terms(&self.url)
    }

    /// Expand the template into a query URL.
    #[must_use]
    pub fn expand(&self, args: &SearchTermsArgs<'_>) -> String {
        placeholder::expand(&self.url, args)
    }
}

/// A search engine described by an OpenSearch description document.
///
/// Produced by [`TemplateParser::parse`](crate::TemplateParser::parse);
/// a value of this type always has a GET search URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchTemplate {
    /// Display name from `<ShortName>`, empty if the document has none.
    pub short_name: String,

    /// Text of `<Description>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Favicon URL from `<Image>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<String>,

    /// The search URL.
    pub search_url: UrlTemplate,

    /// The suggestions URL, if the document has a GET one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions_url: Option<UrlTemplate>,

    /// Accepted input encodings, in document order.
    pub input_encodings: Vec<String>,
}

impl SearchTemplate {
    /// The favicon URL, falling back to `/favicon.ico` on the search URL's origin.
    ///
    /// Returns `None` when there is no `<Image>` and the search URL has no
    /// usable origin.
    ///
    /// # Examples
    /// ```
    /// use osdd_parser::parse_template;
    ///
    /// let xml = br#"<OpenSearchDescription>
    ///   <Url type="text/html" template="http://en.wikipedia.org/w/index.php?search={searchTerms}"/>
    /// </OpenSearchDescription>"#;
    /// let template = parse_template(xml, None).unwrap();
    /// assert_eq!(
    ///     template.favicon_url_or_default().as_deref(),
    ///     Some("http://en.wikipedia.org/favicon.ico")
    /// );
    /// ```
    #[must_use]
    pub fn favicon_url_or_default(&self) -> Option<String> {
        if let Some(favicon) = &self.favicon_url {
            return Some(favicon.clone());
        }
        let origin = Url::parse(self.search_url.url()).ok()?;
        if origin.cannot_be_a_base() || origin.host_str().is_none() {
            return None;
        }
        origin.join(FAVICON_PATH).ok().map(String::from)
    }

    /// The first declared input encoding, if any.
    #[must_use]
    pub fn preferred_input_encoding(&self) -> Option<&str> {
        self.input_encodings.first().map(String::as_str)
    }

    /// Expand the search URL for a query, using the preferred input encoding.
    #[must_use]
    pub fn search_url_for(&self, terms: &str) -> String {
        let mut args = SearchTermsArgs::new(terms);
        if let Some(encoding) = self.preferred_input_encoding() {
            args = args.with_input_encoding(encoding);
        }
        self.search_url.expand(&args)
    }
}
