//! Element handler trait definition.

use roxmltree::Node;

use super::types::ParseContext;

/// Trait for element handlers.
///
/// Handlers process one kind of child element of the document root and
/// record the result in the `ParseContext`. Problems with a single element
/// are never fatal: the handler logs them and leaves the context untouched.
pub trait ElementHandler: Send + Sync {
    /// Check if this handler should process the given element.
    ///
    /// Default implementation always returns true. Handlers for
    /// first-occurrence-wins fields return false once the field is set.
    fn can_handle(&self, _node: Node<'_, '_>, _context: &ParseContext<'_>) -> bool {
        true
    }

    /// Process the element.
    fn handle(&self, node: Node<'_, '_>, context: &mut ParseContext<'_>);
}
