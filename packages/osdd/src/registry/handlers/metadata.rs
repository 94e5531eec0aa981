//! Handlers for the descriptive elements of a search plugin.
//!
//! `<ShortName>`, `<Description>` and `<Image>` are first-wins: once the
//! field is set, later elements are declined. `<InputEncoding>` collects
//! every value.

use roxmltree::Node;
use url::Url;

use crate::config::validate_input_encoding;
use crate::registry::handler::ElementHandler;
use crate::registry::types::ParseContext;
use crate::xml::{get_attribute, get_text};

/// Handler for `<ShortName>` elements.
pub struct ShortNameHandler;

impl ElementHandler for ShortNameHandler {
    fn can_handle(&self, _node: Node<'_, '_>, context: &ParseContext<'_>) -> bool {
        context.short_name.is_none()
    }

    fn handle(&self, node: Node<'_, '_>, context: &mut ParseContext<'_>) {
        let text = get_text(node);
        if !text.is_empty() {
            context.short_name = Some(text);
        }
    }
}

/// Handler for `<Description>` elements.
pub struct DescriptionHandler;

impl ElementHandler for DescriptionHandler {
    fn can_handle(&self, _node: Node<'_, '_>, context: &ParseContext<'_>) -> bool {
        context.description.is_none()
    }

    fn handle(&self, node: Node<'_, '_>, context: &mut ParseContext<'_>) {
        let text = get_text(node);
        if !text.is_empty() {
            context.description = Some(text);
        }
    }
}

/// Handler for `<Image>` elements.
///
/// Only absolute http(s) URLs become the favicon. Inline `data:` images
/// are common in Firefox plugins but need decoding and storage, which is
/// left to the favicon machinery.
pub struct ImageHandler;

impl ElementHandler for ImageHandler {
    fn can_handle(&self, _node: Node<'_, '_>, context: &ParseContext<'_>) -> bool {
        context.favicon_url.is_none()
    }

    fn handle(&self, node: Node<'_, '_>, context: &mut ParseContext<'_>) {
        let text = get_text(node);
        if text.is_empty() {
            return;
        }

        tracing::trace!(
            width = get_attribute(node, "width").unwrap_or_default(),
            height = get_attribute(node, "height").unwrap_or_default(),
            mime_type = get_attribute(node, "type").unwrap_or_default(),
            "Image element"
        );

        match Url::parse(&text) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                context.favicon_url = Some(text);
            }
            Ok(url) => {
                tracing::debug!(scheme = url.scheme(), "Ignoring image with unsupported scheme");
            }
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring image with invalid URL");
            }
        }
    }
}

/// Handler for `<InputEncoding>` elements.
pub struct InputEncodingHandler;

impl ElementHandler for InputEncodingHandler {
    fn handle(&self, node: Node<'_, '_>, context: &mut ParseContext<'_>) {
        let encoding = get_text(node);
        if validate_input_encoding(&encoding) {
            context.input_encodings.push(encoding);
        } else {
            tracing::warn!(encoding = %encoding, "Ignoring invalid input encoding");
        }
    }
}
