//! OSDD Parser - turn OpenSearch description documents into search templates.
//!
//! This crate parses OpenSearch Description Documents (the XML "search
//! plugins" published by websites and shipped with Firefox) into a
//! validated [`SearchTemplate`]: short name, favicon, search URL,
//! suggestions URL and accepted input encodings.
//!
//! # Example
//!
//! ```
//! use osdd_parser::parse_template;
//!
//! let xml = br#"<OpenSearchDescription xmlns="http://a9.com/-/spec/opensearch/1.1/">
//!   <ShortName>Dictionary.com</ShortName>
//!   <Url type="text/html" method="GET"
//!        template="http://dictionary.reference.com/browse/{searchTerms}?r=75"/>
//! </OpenSearchDescription>"#;
//!
//! let template = parse_template(xml, None).unwrap();
//! assert_eq!(template.short_name, "Dictionary.com");
//! assert!(template.search_url.supports_replacement());
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, parser options and input validation
//! - [`types`]: The parse result (`SearchTemplate`, `UrlTemplate`)
//! - [`error`]: Error types and Result alias
//! - [`filter`]: The `ParameterFilter` capability
//! - [`placeholder`]: Template token scanning and expansion
//! - [`query`]: Query string rebuilding with parameter filtering
//! - [`xml`]: XML utilities
//! - [`registry`]: Element handlers for the description document
//! - [`parser`]: The `TemplateParser` entry point
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod parser;
pub mod placeholder;
pub mod query;
pub mod registry;
pub mod types;
pub mod xml;

// Re-export main functions
pub use parser::{parse_template, TemplateParser};

// Re-export commonly used items
pub use config::ParserOptions;
pub use error::{OsddError, ParseError, Result};
pub use filter::{ParameterFilter, SubstringFilter};
pub use placeholder::{Placeholder, PlaceholderToken, SearchTermsArgs};
pub use types::{SearchTemplate, UrlParameter, UrlTemplate};
