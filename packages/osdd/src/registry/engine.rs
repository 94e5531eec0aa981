//! Parse engine that dispatches root children to their handlers.

use roxmltree::Node;

use super::core::ElementRegistry;
use super::types::ParseContext;
use crate::xml::{element_children, get_tag_name};

/// Engine that walks a description document using the registry.
///
/// Only direct children of the root element are dispatched; each handler
/// looks at its own subtree (a `<Url>` reads its `<Param>` children).
/// Elements without a handler are extensions this parser does not use and
/// are passed over.
pub struct ParseEngine {
    registry: ElementRegistry,
}

impl ParseEngine {
    /// Create a new engine with the given registry.
    #[must_use]
    pub fn new(registry: ElementRegistry) -> Self {
        Self { registry }
    }

    /// Dispatch every child element of `root`, in document order.
    pub fn process(&self, root: Node<'_, '_>, context: &mut ParseContext<'_>) {
        for child in element_children(root) {
            let tag_name = get_tag_name(child);

            if self.registry.should_skip(tag_name) {
                tracing::trace!(tag = tag_name, "Skipping element");
                continue;
            }

            match self.registry.get_handler(child, context) {
                Some(handler) => handler.handle(child, context),
                None if self.registry.has_handler(tag_name) => {
                    tracing::debug!(tag = tag_name, "Ignoring repeated element");
                }
                None => {
                    tracing::trace!(
                        tag = tag_name,
                        namespace = child.tag_name().namespace().unwrap_or_default(),
                        "No handler for element"
                    );
                }
            }
        }
    }
}
