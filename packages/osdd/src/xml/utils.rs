//! XML utility functions for navigating and extracting data from DOM trees.
//!
//! All tag matching is on the local name, so `<os:Url>`, `<Url>` and
//! `<Url xmlns="...">` are the same element.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;
use roxmltree::{Document, Node, ParsingOptions};

/// `encoding="..."` inside a leading XML declaration.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DECLARED_ENCODING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^<\?xml\s[^>]*?\bencoding\s*=\s*["']([A-Za-z0-9._:-]+)["']"#)
        .expect("valid regex")
});

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use osdd_parser::xml::get_tag_name;
///
/// let xml = r#"<os:OpenSearchDescription xmlns:os="http://a9.com/-/spec/opensearch/1.1/"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "OpenSearchDescription");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get all text inside a node, trimmed.
///
/// Concatenates every descendant text node, so text split by comments or
/// CDATA sections is returned whole.
///
/// # Returns
/// Trimmed text content, or empty string if no text
pub fn get_text(node: Node<'_, '_>) -> String {
    let text: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    text.trim().to_string()
}

/// Get a non-empty, trimmed attribute value.
///
/// Attributes that are present but blank are treated as missing.
pub fn get_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Check if a node has a specific tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Get all element children of a node.
///
/// # Returns
/// Iterator over element children (excludes text nodes, comments, etc.)
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Decode document bytes as text.
///
/// The encoding comes from a byte order mark (UTF-8, UTF-16LE/BE), then
/// from the `encoding` of the XML declaration, and defaults to UTF-8.
/// Labels are resolved the way browsers do (`ISO-8859-1` decodes as
/// windows-1252). Transcoded text loses its XML declaration.
///
/// Undecodable bytes become U+FFFD and are reported with a warning.
pub fn decode_document(data: &[u8]) -> Cow<'_, str> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(data) {
        let text = decode_with(encoding, &data[bom_len..]);
        return if encoding == UTF_8 {
            text
        } else {
            without_declaration(text)
        };
    }

    match declared_encoding(data) {
        Some(encoding) if encoding != UTF_8 => without_declaration(decode_with(encoding, data)),
        _ => decode_with(UTF_8, data),
    }
}

/// Look up the encoding named by the XML declaration, if any.
///
/// Only ASCII-compatible encodings can be declared in a document without
/// a BOM, so UTF-16 labels resolve to UTF-8.
///
/// # Examples
/// ```
/// use osdd_parser::xml::declared_encoding;
///
/// let data = br#"<?xml version="1.0" encoding="ISO-8859-1"?><SearchPlugin/>"#;
/// assert_eq!(declared_encoding(data).map(|e| e.name()), Some("windows-1252"));
/// assert!(declared_encoding(b"<SearchPlugin/>").is_none());
/// ```
pub fn declared_encoding(data: &[u8]) -> Option<&'static Encoding> {
    let label = DECLARED_ENCODING.captures(data)?.get(1)?.as_bytes();
    match Encoding::for_label(label) {
        Some(encoding) => Some(encoding.output_encoding()),
        None => {
            tracing::warn!(
                label = %String::from_utf8_lossy(label),
                "Unknown declared document encoding, assuming UTF-8"
            );
            None
        }
    }
}

fn decode_with<'a>(encoding: &'static Encoding, data: &'a [u8]) -> Cow<'a, str> {
    let (text, had_errors) = encoding.decode_without_bom_handling(data);
    if had_errors {
        tracing::warn!(
            encoding = encoding.name(),
            "Description document has bytes invalid in its encoding, replaced"
        );
    }
    text
}

fn without_declaration(text: Cow<'_, str>) -> Cow<'_, str> {
    if !text.starts_with("<?xml") {
        return text;
    }
    match text.find("?>") {
        Some(end) => Cow::Owned(text[end + 2..].to_string()),
        None => text,
    }
}

/// Parse a document, allowing a DOCTYPE.
///
/// Some published plugins carry a DOCTYPE declaration; roxmltree rejects
/// those unless DTDs are allowed.
pub fn parse_document(text: &str) -> Result<Document<'_>, roxmltree::Error> {
    Document::parse_with_options(
        text,
        ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        },
    )
}
