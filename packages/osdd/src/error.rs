//! Error types for the parser.
//!
//! Uses the dual-error pattern: `OsddError` for library and CLI consumers,
//! and `ParseError` for the binary success/failure of a single parse.

use thiserror::Error;

/// Why a description document was rejected.
///
/// Any of these means no template was produced. Dropped optional fields
/// (POST suggestion URLs, filtered parameters) are not errors.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The bytes are not a well-formed XML document.
    #[error("Malformed description document: {0}")]
    Malformed(#[from] roxmltree::Error),

    /// The root element is not an OpenSearch description.
    #[error("Unexpected root element <{0}>. Expected <OpenSearchDescription> or <SearchPlugin>")]
    UnexpectedRoot(String),

    /// No usable GET search URL was found.
    #[error("No GET search URL found{}", post_hint(.dropped_post))]
    MissingSearchUrl { dropped_post: bool },

    /// The document has no short name and the parser requires one.
    #[error("Missing required element <ShortName>")]
    MissingShortName,

    /// The document is larger than the configured limit.
    #[error("Description document is {size} bytes, limit is {limit}")]
    DocumentTooLarge { size: usize, limit: usize },
}

fn post_hint(dropped_post: &bool) -> &'static str {
    if *dropped_post {
        " (POST search URLs are not supported)"
    } else {
        ""
    }
}

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum OsddError {
    /// Parsing the description document failed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The search URL cannot be expanded into a query URL.
    #[error("Search URL does not support replacement: {0}")]
    NoReplacement(String),

    /// The document has no suggestions URL.
    #[error("No suggestions URL in {0}")]
    NoSuggestions(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, OsddError>;
