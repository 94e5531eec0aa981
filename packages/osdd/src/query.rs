//! Query string handling for template URLs.
//!
//! Template URLs are not valid URLs until their placeholders are replaced
//! (`{searchTerms}` is not allowed in a query), so the query is split and
//! rebuilt textually. Keys and values are carried as written, without
//! percent decoding.

use crate::filter::ParameterFilter;
use crate::types::{UrlParameter, UrlTemplate};

/// A template URL split into base, query and fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitUrl<'a> {
    /// Everything before the `?`.
    pub base: &'a str,
    /// The query string without the leading `?`, if any.
    pub query: Option<&'a str>,
    /// The fragment including the leading `#`, or empty.
    pub fragment: &'a str,
}

/// Split a template URL into base, query and fragment.
///
/// # Examples
/// ```
/// use osdd_parser::query::split_url;
///
/// let parts = split_url("http://x.test/s?q={searchTerms}#top");
/// assert_eq!(parts.base, "http://x.test/s");
/// assert_eq!(parts.query, Some("q={searchTerms}"));
/// assert_eq!(parts.fragment, "#top");
/// ```
pub fn split_url(url: &str) -> SplitUrl<'_> {
    let (rest, fragment) = match url.find('#') {
        Some(pos) => url.split_at(pos),
        None => (url, ""),
    };
    let (base, query) = match rest.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (rest, None),
    };
    SplitUrl {
        base,
        query,
        fragment,
    }
}

/// Parse `a=1&b=2` into parameters. Empty segments are skipped.
pub fn parse_query(query: &str) -> Vec<UrlParameter> {
    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((name, value)) => UrlParameter::new(name, value),
            None => UrlParameter::new(segment, ""),
        })
        .collect()
}

/// Build a `UrlTemplate` from a template string and its `<Param>` children.
///
/// The filter sees every parameter once: first those already in the
/// template's query string, then `extra`. When nothing is filtered out and
/// there are no extra parameters the template string is kept unchanged.
pub fn build_url_template(
    template: &str,
    extra: Vec<UrlParameter>,
    filter: Option<&dyn ParameterFilter>,
) -> UrlTemplate {
    let parts = split_url(template);
    let existing = parts.query.map(parse_query).unwrap_or_default();

    let Some(filter) = filter else {
        if extra.is_empty() {
            return UrlTemplate::from_parts(template, existing);
        }
        let mut parameters = existing;
        parameters.extend(extra);
        return UrlTemplate::from_parts(render(&parts, &parameters), parameters);
    };

    let existing_count = existing.len();
    let mut parameters: Vec<UrlParameter> = existing
        .into_iter()
        .filter(|p| keep(filter, p))
        .collect();
    let modified = parameters.len() != existing_count;

    if !modified && extra.is_empty() {
        return UrlTemplate::from_parts(template, parameters);
    }

    parameters.extend(extra.into_iter().filter(|p| keep(filter, p)));
    UrlTemplate::from_parts(render(&parts, &parameters), parameters)
}

fn keep(filter: &dyn ParameterFilter, parameter: &UrlParameter) -> bool {
    let kept = filter.keep_parameter(&parameter.name, &parameter.value);
    if !kept {
        tracing::debug!(
            name = %parameter.name,
            value = %parameter.value,
            "Parameter rejected by filter"
        );
    }
    kept
}

fn render(parts: &SplitUrl<'_>, parameters: &[UrlParameter]) -> String {
    let mut url = parts.base.to_string();
    if !parameters.is_empty() {
        url.push('?');
        let query: Vec<String> = parameters.iter().map(UrlParameter::to_query_pair).collect();
        url.push_str(&query.join("&"));
    }
    url.push_str(parts.fragment);
    url
}
