//! Template placeholders (`{searchTerms}`, `{count?}`, ...) and their expansion.
//!
//! A template URL contains `{name}` tokens that are substituted when a
//! query is issued. A trailing `?` (`{name?}`) marks an optional token
//! which may be replaced by an empty string when no value is known.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use url::form_urlencoded;

/// Placeholder token: `{name}` or `{name?}`, names may carry a `prefix:`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z][A-Za-z0-9_.-]*(?::[A-Za-z][A-Za-z0-9_.-]*)?)(\?)?\}")
        .expect("valid regex")
});

/// Value substituted for `{count}`.
pub const DEFAULT_COUNT: u32 = 10;

/// Value substituted for `{startIndex}` and `{startPage}`.
pub const DEFAULT_START: u32 = 1;

/// Value substituted for `{language}` when the caller gives none.
pub const ANY_LANGUAGE: &str = "*";

/// Encoding substituted for `{inputEncoding}` / `{outputEncoding}` by default.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// The kinds of placeholder an OpenSearch template may contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// `{searchTerms}`: the user's query.
    SearchTerms,
    /// `{count}`: results per page.
    Count,
    /// `{startIndex}`: index of the first result.
    StartIndex,
    /// `{startPage}`: page number of the first result.
    StartPage,
    /// `{language}`: desired result language.
    Language,
    /// `{inputEncoding}`: encoding of the query.
    InputEncoding,
    /// `{outputEncoding}`: encoding of the response.
    OutputEncoding,
    /// Anything else, e.g. vendor extensions like `{moz:locale}`.
    Other(String),
}

impl Placeholder {
    /// Classify a token name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "searchTerms" => Self::SearchTerms,
            "count" => Self::Count,
            "startIndex" => Self::StartIndex,
            "startPage" => Self::StartPage,
            "language" => Self::Language,
            "inputEncoding" => Self::InputEncoding,
            "outputEncoding" => Self::OutputEncoding,
            other => Self::Other(other.to_string()),
        }
    }

    /// The token name as written in a template.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::SearchTerms => "searchTerms",
            Self::Count => "count",
            Self::StartIndex => "startIndex",
            Self::StartPage => "startPage",
            Self::Language => "language",
            Self::InputEncoding => "inputEncoding",
            Self::OutputEncoding => "outputEncoding",
            Self::Other(name) => name.as_str(),
        }
    }
}

/// One placeholder occurrence in a template URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderToken {
    /// What the token stands for.
    pub placeholder: Placeholder,
    /// Whether the token was written as `{name?}`.
    pub optional: bool,
    /// Byte range of the whole token (braces included) in the URL.
    pub range: std::ops::Range<usize>,
}

/// Find all placeholder tokens in a template URL, in order.
///
/// # Examples
/// ```
/// use osdd_parser::placeholder::scan;
/// use osdd_parser::Placeholder;
///
/// let tokens = scan("http://example.com/?q={searchTerms}&n={count?}");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].placeholder, Placeholder::SearchTerms);
/// assert!(tokens[1].optional);
/// ```
pub fn scan(url: &str) -> Vec<PlaceholderToken> {
    TOKEN_PATTERN
        .captures_iter(url)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?.as_str();
            Some(PlaceholderToken {
                placeholder: Placeholder::from_name(name),
                optional: caps.get(2).is_some(),
                range: whole.range(),
            })
        })
        .collect()
}

/// Check whether a template URL contains a search-terms placeholder.
pub fn has_search_terms(url: &str) -> bool {
    scan(url)
        .iter()
        .any(|t| t.placeholder == Placeholder::SearchTerms)
}

/// Values used to expand a template URL into a query URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTermsArgs<'a> {
    /// The user's query, unescaped.
    pub terms: &'a str,
    /// Encoding for `{inputEncoding}`; `UTF-8` when absent.
    pub input_encoding: Option<&'a str>,
    /// Language for `{language}`; `*` when absent.
    pub language: Option<&'a str>,
}

impl<'a> SearchTermsArgs<'a> {
    /// Create arguments for a query.
    #[must_use]
    pub fn new(terms: &'a str) -> Self {
        Self {
            terms,
            input_encoding: None,
            language: None,
        }
    }

    /// Set the input encoding.
    #[must_use]
    pub fn with_input_encoding(mut self, encoding: &'a str) -> Self {
        self.input_encoding = Some(encoding);
        self
    }

    /// Set the language.
    #[must_use]
    pub fn with_language(mut self, language: &'a str) -> Self {
        self.language = Some(language);
        self
    }
}

/// Substitute every placeholder in `url`.
///
/// Search terms are form-urlencoded (spaces become `+`). Unknown optional
/// tokens are removed; unknown required tokens are left as written.
///
/// # Examples
/// ```
/// use osdd_parser::placeholder::expand;
/// use osdd_parser::SearchTermsArgs;
///
/// let url = expand("http://example.com/?q={searchTerms}", &SearchTermsArgs::new("rust lang"));
/// assert_eq!(url, "http://example.com/?q=rust+lang");
/// ```
pub fn expand(url: &str, args: &SearchTermsArgs<'_>) -> String {
    let mut out = String::with_capacity(url.len() + args.terms.len());
    let mut last = 0;

    for token in scan(url) {
        out.push_str(&url[last..token.range.start]);
        match &token.placeholder {
            Placeholder::SearchTerms => {
                out.extend(form_urlencoded::byte_serialize(args.terms.as_bytes()));
            }
            Placeholder::Count => out.push_str(&DEFAULT_COUNT.to_string()),
            Placeholder::StartIndex | Placeholder::StartPage => {
                out.push_str(&DEFAULT_START.to_string());
            }
            Placeholder::Language => out.push_str(args.language.unwrap_or(ANY_LANGUAGE)),
            Placeholder::InputEncoding => {
                out.push_str(args.input_encoding.unwrap_or(DEFAULT_ENCODING));
            }
            Placeholder::OutputEncoding => out.push_str(DEFAULT_ENCODING),
            Placeholder::Other(_) if token.optional => {}
            Placeholder::Other(_) => out.push_str(&url[token.range.clone()]),
        }
        last = token.range.end;
    }

    out.push_str(&url[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_recognized_tokens() {
        let tokens = scan(
            "http://x.test/s?q={searchTerms}&c={count}&i={startIndex?}&p={startPage}\
             &l={language}&ie={inputEncoding}&oe={outputEncoding?}",
        );
        let kinds: Vec<_> = tokens.iter().map(|t| t.placeholder.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                Placeholder::SearchTerms,
                Placeholder::Count,
                Placeholder::StartIndex,
                Placeholder::StartPage,
                Placeholder::Language,
                Placeholder::InputEncoding,
                Placeholder::OutputEncoding,
            ]
        );
        assert!(tokens[2].optional);
        assert!(!tokens[0].optional);
    }

    #[test]
    fn test_scan_prefixed_and_unknown() {
        let tokens = scan("http://x.test/?a={moz:locale}&b={custom?}");
        assert_eq!(
            tokens[0].placeholder,
            Placeholder::Other("moz:locale".to_string())
        );
        assert_eq!(tokens[1].placeholder, Placeholder::Other("custom".to_string()));
        assert!(tokens[1].optional);
    }

    #[test]
    fn test_scan_ignores_non_tokens() {
        assert!(scan("http://x.test/?a={}&b={ spaced }&c=%7BsearchTerms%7D").is_empty());
    }

    #[test]
    fn test_has_search_terms() {
        assert!(has_search_terms("http://x.test/{searchTerms}"));
        assert!(has_search_terms("http://x.test/?q={searchTerms?}"));
        assert!(!has_search_terms("http://x.test/?q={count}"));
        assert!(!has_search_terms("http://x.test/?q=searchTerms"));
        // Token names are case-sensitive
        assert!(!has_search_terms("http://x.test/?q={SearchTerms}"));
    }

    #[test]
    fn test_expand_all_placeholders() {
        let url = "http://x.test/?q={searchTerms}&n={count}&s={startIndex}&p={startPage}\
                   &l={language}&ie={inputEncoding}&oe={outputEncoding}";
        let args = SearchTermsArgs::new("a&b c")
            .with_input_encoding("Shift_JIS")
            .with_language("nl");
        assert_eq!(
            expand(url, &args),
            "http://x.test/?q=a%26b+c&n=10&s=1&p=1&l=nl&ie=Shift_JIS&oe=UTF-8"
        );
    }

    #[test]
    fn test_expand_defaults() {
        let url = "http://x.test/?l={language}&ie={inputEncoding}";
        assert_eq!(
            expand(url, &SearchTermsArgs::new("x")),
            "http://x.test/?l=*&ie=UTF-8"
        );
    }

    #[test]
    fn test_expand_unknown_tokens() {
        let url = "http://x.test/?a={custom?}&b={moz:date}&q={searchTerms}";
        assert_eq!(
            expand(url, &SearchTermsArgs::new("q")),
            "http://x.test/?a=&b={moz:date}&q=q"
        );
    }

    #[test]
    fn test_expand_without_tokens_is_identity() {
        let url = "http://x.test/static?x=1";
        assert_eq!(expand(url, &SearchTermsArgs::new("ignored")), url);
    }
}
