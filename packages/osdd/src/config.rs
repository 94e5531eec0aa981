//! Configuration constants, parser options and validation functions.

use regex::Regex;
use std::sync::LazyLock;

/// `type` attribute of the `<Url>` element that carries the search URL.
pub const SEARCH_URL_TYPE: &str = "text/html";

/// `type` attribute of the `<Url>` element that carries the suggestions URL.
pub const SUGGESTIONS_URL_TYPE: &str = "application/x-suggestions+json";

/// Accepted root element names.
///
/// `SearchPlugin` is the root used by Firefox's own plugin format,
/// `OpenSearchDescription` is the OpenSearch 1.1 root.
pub const OPENSEARCH_ROOTS: [&str; 2] = ["OpenSearchDescription", "SearchPlugin"];

/// The only HTTP method a usable search or suggestions URL may use.
pub const SUPPORTED_METHOD: &str = "GET";

/// Path of the conventional favicon relative to the search URL's origin.
pub const FAVICON_PATH: &str = "/favicon.ico";

/// Charset label pattern (e.g. `UTF-8`, `Shift_JIS`, `ISO-8859-1`).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ENCODING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._:-]*$").expect("valid regex"));

/// Options controlling how strict the parser is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Documents larger than this many bytes are rejected before parsing.
    ///
    /// Unlimited by default.
    pub max_document_size: Option<usize>,

    /// Reject documents without a `<ShortName>`.
    ///
    /// Off by default: a missing short name leaves the field empty.
    pub require_short_name: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_document_size: None,
            require_short_name: false,
        }
    }
}

impl ParserOptions {
    /// Reject documents larger than `size` bytes.
    #[must_use]
    pub fn with_max_document_size(mut self, size: usize) -> Self {
        self.max_document_size = Some(size);
        self
    }

    /// Require a `<ShortName>` element.
    #[must_use]
    pub fn with_require_short_name(mut self, require: bool) -> Self {
        self.require_short_name = require;
        self
    }
}

/// Validate an `<InputEncoding>` value.
///
/// # Examples
/// ```
/// use osdd_parser::config::validate_input_encoding;
///
/// assert!(validate_input_encoding("UTF-8"));
/// assert!(validate_input_encoding("Shift_JIS"));
/// assert!(!validate_input_encoding("UTF 8"));
/// ```
pub fn validate_input_encoding(encoding: &str) -> bool {
    ENCODING_PATTERN.is_match(encoding)
}

/// Check whether a root element name starts an OpenSearch description.
pub fn is_opensearch_root(tag_name: &str) -> bool {
    OPENSEARCH_ROOTS.contains(&tag_name)
}

/// Check whether a `method` attribute value is supported.
///
/// Comparison is case-insensitive; a missing method means GET.
pub fn is_supported_method(method: Option<&str>) -> bool {
    method.map_or(true, |m| m.trim().eq_ignore_ascii_case(SUPPORTED_METHOD))
}
