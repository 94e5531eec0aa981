//! Registry configuration for OpenSearch description documents.

use super::core::ElementRegistry;
use super::handlers::{
    DescriptionHandler, ImageHandler, InputEncodingHandler, ShortNameHandler, UrlHandler,
};

/// Create a registry configured for OpenSearch description documents.
///
/// Covers OpenSearch 1.1 and the Firefox `SearchPlugin` dialect.
#[must_use]
pub fn create_osdd_registry() -> ElementRegistry {
    let mut registry = ElementRegistry::new();

    // Text fields
    registry.register("ShortName", ShortNameHandler);
    registry.register("Description", DescriptionHandler);
    registry.register("Image", ImageHandler);
    registry.register("InputEncoding", InputEncodingHandler);

    // Search and suggestion URLs
    registry.register("Url", UrlHandler);

    // Skip tags - elements that don't contribute to the template
    //
    // OpenSearch 1.1 metadata:
    //   - LongName, Developer, Contact, Tags, Attribution: descriptive text
    //   - SyndicationRight, AdultContent: usage policy
    //   - Language, OutputEncoding: result properties
    //   - Query: example queries
    //
    // Firefox extensions (moz: namespace):
    //   - SearchForm: the engine's home page
    //   - UpdateUrl, UpdateInterval, IconUpdateUrl: plugin self-update
    registry.skip([
        "LongName",
        "Developer",
        "Contact",
        "Tags",
        "Attribution",
        "SyndicationRight",
        "AdultContent",
        "Language",
        "OutputEncoding",
        "Query",
        "SearchForm",
        "UpdateUrl",
        "UpdateInterval",
        "IconUpdateUrl",
    ]);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_osdd_registry() {
        let registry = create_osdd_registry();

        assert!(registry.has_handler("ShortName"));
        assert!(registry.has_handler("Description"));
        assert!(registry.has_handler("Image"));
        assert!(registry.has_handler("InputEncoding"));
        assert!(registry.has_handler("Url"));

        assert!(registry.should_skip("SearchForm"));
        assert!(registry.should_skip("Query"));
        assert!(!registry.should_skip("Url"));
    }
}
