//! The description document parser.

use crate::config::{is_opensearch_root, ParserOptions};
use crate::error::ParseError;
use crate::filter::ParameterFilter;
use crate::registry::{create_osdd_registry, ParseContext, ParseEngine};
use crate::types::SearchTemplate;
use crate::xml::{decode_document, get_tag_name, parse_document};

/// Parses OpenSearch description documents into search templates.
///
/// The parser holds no per-document state: one instance can be shared
/// between threads and used for any number of documents.
pub struct TemplateParser {
    options: ParserOptions,
    engine: ParseEngine,
}

impl TemplateParser {
    /// Create a parser with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ParserOptions::default())
    }

    /// Create a parser with the given options.
    #[must_use]
    pub fn with_options(options: ParserOptions) -> Self {
        Self {
            options,
            engine: ParseEngine::new(create_osdd_registry()),
        }
    }

    /// Get the parser options.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse a description document.
    ///
    /// # Arguments
    /// * `data` - The raw document bytes
    /// * `filter` - Optional filter consulted for every query parameter;
    ///   without one all parameters are kept
    ///
    /// # Returns
    /// The template, which always has a GET search URL
    ///
    /// # Errors
    /// Any `ParseError`. No partial template is returned.
    ///
    /// # Examples
    /// ```
    /// use osdd_parser::{SubstringFilter, TemplateParser};
    ///
    /// let xml = br#"<SearchPlugin xmlns="http://www.mozilla.org/2006/browser/search/">
    ///   <ShortName>Webster</ShortName>
    ///   <Url type="text/html" method="GET" template="http://www.webster.com/cgi-bin/dictionary">
    ///     <Param name="va" value="{searchTerms}"/>
    ///     <Param name="sourceid" value="Mozilla-search"/>
    ///   </Url>
    /// </SearchPlugin>"#;
    ///
    /// let filter = SubstringFilter::new("", "Mozilla");
    /// let template = TemplateParser::new().parse(xml, Some(&filter)).unwrap();
    /// assert_eq!(
    ///     template.search_url.url(),
    ///     "http://www.webster.com/cgi-bin/dictionary?va={searchTerms}"
    /// );
    /// ```
    pub fn parse(
        &self,
        data: &[u8],
        filter: Option<&dyn ParameterFilter>,
    ) -> Result<SearchTemplate, ParseError> {
        if let Some(limit) = self.options.max_document_size {
            if data.len() > limit {
                return Err(ParseError::DocumentTooLarge {
                    size: data.len(),
                    limit,
                });
            }
        }

        let text = decode_document(data);
        let doc = parse_document(&text)?;

        let root = doc.root_element();
        let root_name = get_tag_name(root);
        if !is_opensearch_root(root_name) {
            return Err(ParseError::UnexpectedRoot(root_name.to_string()));
        }

        let mut context = ParseContext::new().with_filter(filter);
        self.engine.process(root, &mut context);

        let template = context.into_template(&self.options)?;
        tracing::debug!(
            short_name = %template.short_name,
            search_url = template.search_url.url(),
            has_suggestions = template.suggestions_url.is_some(),
            "Parsed description document"
        );
        Ok(template)
    }

    /// Parse a description document, reporting only success or failure.
    ///
    /// Failures are logged at debug level.
    pub fn try_parse(
        &self,
        data: &[u8],
        filter: Option<&dyn ParameterFilter>,
    ) -> Option<SearchTemplate> {
        self.parse(data, filter)
            .map_err(|e| tracing::debug!(error = %e, "Rejected description document"))
            .ok()
    }
}

impl Default for TemplateParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a description document with default options.
///
/// See [`TemplateParser::parse`].
pub fn parse_template(
    data: &[u8],
    filter: Option<&dyn ParameterFilter>,
) -> Result<SearchTemplate, ParseError> {
    TemplateParser::new().parse(data, filter)
}
