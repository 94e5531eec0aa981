//! Handler for `<Url>` elements.
//!
//! A `<Url>` gives either the search URL (`type="text/html"`) or the
//! suggestions URL (`type="application/x-suggestions+json"`). Only GET is
//! supported: a POST search URL cannot be issued from the address bar, so
//! such elements are dropped. Query parameters come from the `template`
//! attribute and from `<Param>` children (`<Parameter>` in the OpenSearch
//! Parameter extension); both pass through the parameter filter.

use roxmltree::Node;

use crate::config::is_supported_method;
use crate::query::build_url_template;
use crate::registry::handler::ElementHandler;
use crate::registry::types::{ParseContext, UrlKind};
use crate::types::UrlParameter;
use crate::xml::{element_children, get_attribute, get_tag_name, has_tag};

/// Child elements that contribute a query parameter.
const PARAM_TAGS: [&str; 2] = ["Param", "Parameter"];

/// Handler for `<Url>` elements.
pub struct UrlHandler;

impl ElementHandler for UrlHandler {
    fn handle(&self, node: Node<'_, '_>, context: &mut ParseContext<'_>) {
        let Some(mime_type) = get_attribute(node, "type") else {
            tracing::debug!("Ignoring <Url> without type");
            return;
        };
        let Some(kind) = UrlKind::from_type(mime_type) else {
            tracing::trace!(mime_type, "Ignoring <Url> of unused type");
            return;
        };

        let method = get_attribute(node, "method");
        if !is_supported_method(method) {
            tracing::debug!(
                kind = kind.as_str(),
                method = method.unwrap_or_default(),
                "Dropping <Url> with unsupported method"
            );
            if kind == UrlKind::Search {
                context.dropped_post_search = true;
            }
            return;
        }

        let Some(template) = get_attribute(node, "template").or_else(|| get_attribute(node, "href"))
        else {
            tracing::debug!(kind = kind.as_str(), "Ignoring <Url> without template");
            return;
        };

        if context.url(kind).is_some() {
            tracing::debug!(
                kind = kind.as_str(),
                template,
                "Ignoring additional <Url>, the first one is used"
            );
            return;
        }

        let url = build_url_template(template, collect_params(node), context.filter);
        context.set_url(kind, url);
    }
}

/// Read the `<Param>`/`<Parameter>` children of a `<Url>`, in order.
///
/// A parameter needs a name; a missing value is an empty value. Other
/// children, such as Firefox's `<MozParam>`, are skipped.
pub fn collect_params(node: Node<'_, '_>) -> Vec<UrlParameter> {
    let mut params = Vec::new();

    for child in element_children(node) {
        let tag_name = get_tag_name(child);
        if !PARAM_TAGS.iter().any(|tag| has_tag(child, tag)) {
            tracing::trace!(tag = tag_name, "Skipping <Url> child");
            continue;
        }

        let Some(name) = get_attribute(child, "name") else {
            tracing::debug!(tag = tag_name, "Skipping parameter without name");
            continue;
        };
        let value = child.attribute("value").map(str::trim).unwrap_or_default();
        params.push(UrlParameter::new(name, value));
    }

    params
}
