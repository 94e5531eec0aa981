//! Element registry for mapping tag names to handlers.

use std::collections::{HashMap, HashSet};

use roxmltree::Node;

use super::handler::ElementHandler;
use super::types::ParseContext;
use crate::xml::get_tag_name;

/// Registry mapping local element names to handlers.
///
/// The registry allows registering handlers for specific tag names,
/// as well as marking tags to be skipped entirely.
pub struct ElementRegistry {
    handlers: HashMap<String, Box<dyn ElementHandler>>,
    skip_tags: HashSet<String>,
}

impl ElementRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            skip_tags: HashSet::new(),
        }
    }

    /// Register a handler for a specific tag name.
    pub fn register(
        &mut self,
        tag_name: impl Into<String>,
        handler: impl ElementHandler + 'static,
    ) {
        self.handlers.insert(tag_name.into(), Box::new(handler));
    }

    /// Mark tags as skip (known, but carry nothing the template needs).
    pub fn skip(&mut self, tag_names: impl IntoIterator<Item = impl Into<String>>) {
        for tag in tag_names {
            self.skip_tags.insert(tag.into());
        }
    }

    /// Get the appropriate handler for an element.
    ///
    /// Returns `None` if the element should be skipped, has no handler, or
    /// its handler declines it.
    pub fn get_handler(
        &self,
        node: Node<'_, '_>,
        context: &ParseContext<'_>,
    ) -> Option<&dyn ElementHandler> {
        let tag_name = get_tag_name(node);

        if self.skip_tags.contains(tag_name) {
            return None;
        }

        self.handlers
            .get(tag_name)
            .filter(|h| h.can_handle(node, context))
            .map(|h| h.as_ref())
    }

    /// Check if a tag should be skipped.
    #[must_use]
    pub fn should_skip(&self, tag_name: &str) -> bool {
        self.skip_tags.contains(tag_name)
    }

    /// Check if a handler is registered for a tag.
    #[must_use]
    pub fn has_handler(&self, tag_name: &str) -> bool {
        self.handlers.contains_key(tag_name)
    }
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    struct DummyHandler;

    impl ElementHandler for DummyHandler {
        fn can_handle(&self, _node: Node<'_, '_>, context: &ParseContext<'_>) -> bool {
            context.short_name.is_none()
        }

        fn handle(&self, _node: Node<'_, '_>, context: &mut ParseContext<'_>) {
            context.short_name = Some("dummy".to_string());
        }
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = ElementRegistry::new();
        registry.register("test", DummyHandler);

        let xml = "<test/>";
        let doc = Document::parse(xml).unwrap();
        let node = doc.root_element();
        let context = ParseContext::new();

        assert!(registry.get_handler(node, &context).is_some());
    }

    #[test]
    fn test_registry_handler_declines() {
        let mut registry = ElementRegistry::new();
        registry.register("test", DummyHandler);

        let xml = "<test/>";
        let doc = Document::parse(xml).unwrap();
        let mut context = ParseContext::new();
        context.short_name = Some("already set".to_string());

        assert!(registry.get_handler(doc.root_element(), &context).is_none());
    }

    #[test]
    fn test_registry_skip() {
        let mut registry = ElementRegistry::new();
        registry.skip(["SearchForm", "Tags"]);

        assert!(registry.should_skip("SearchForm"));
        assert!(registry.should_skip("Tags"));
        assert!(!registry.should_skip("Url"));
    }

    #[test]
    fn test_registry_has_handler() {
        let mut registry = ElementRegistry::new();
        registry.register("test", DummyHandler);

        assert!(registry.has_handler("test"));
        assert!(!registry.has_handler("missing"));
    }
}
