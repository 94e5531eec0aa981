//! Command-line interface for the parser.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use crate::config::ParserOptions;
use crate::error::{OsddError, Result};
use crate::filter::{ParameterFilter, SubstringFilter};
use crate::parser::TemplateParser;
use crate::placeholder::SearchTermsArgs;
use crate::types::SearchTemplate;

/// OSDD Parser - inspect OpenSearch description documents.
#[derive(Parser)]
#[command(name = "osdd-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a description document and print the search template.
    Parse {
        /// Path to the description document (XML)
        file: PathBuf,

        /// Drop query parameters whose name contains this text
        #[arg(long, default_value = "")]
        exclude_key: String,

        /// Drop query parameters whose value contains this text
        #[arg(long, default_value = "")]
        exclude_value: String,

        /// Reject documents without a <ShortName>
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the query URL for some search terms.
    Expand {
        /// Path to the description document (XML)
        file: PathBuf,

        /// The search terms
        terms: String,

        /// Expand the suggestions URL instead of the search URL
        #[arg(long)]
        suggestions: bool,
    },
}

/// Output format for the `parse` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// YAML document
    Yaml,
    /// Pretty-printed JSON
    Json,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            file,
            exclude_key,
            exclude_value,
            strict,
            format,
        } => parse_command(
            &file,
            &SubstringFilter::new(exclude_key, exclude_value),
            strict,
            format,
        ),
        Commands::Expand {
            file,
            terms,
            suggestions,
        } => expand_command(&file, &terms, suggestions),
    }
}

/// Read and parse a description document from disk.
pub fn load_template(
    path: &Path,
    filter: &SubstringFilter,
    strict: bool,
) -> Result<SearchTemplate> {
    let data = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), size = data.len(), "Read description document");

    let parser =
        TemplateParser::with_options(ParserOptions::default().with_require_short_name(strict));
    let filter = if filter.is_noop() {
        None
    } else {
        Some(filter as &dyn ParameterFilter)
    };
    Ok(parser.parse(&data, filter)?)
}

/// Render a template in the requested format.
pub fn render_template(template: &SearchTemplate, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(template)),
        OutputFormat::Yaml => Ok(serde_yaml_ng::to_string(template)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(template)?),
    }
}

/// Execute the parse command.
fn parse_command(
    file: &Path,
    filter: &SubstringFilter,
    strict: bool,
    format: OutputFormat,
) -> Result<()> {
    let template = load_template(file, filter, strict)?;
    println!("{}", render_template(&template, format)?);
    Ok(())
}

/// Execute the expand command.
fn expand_command(file: &Path, terms: &str, suggestions: bool) -> Result<()> {
    let template = load_template(file, &SubstringFilter::default(), false)?;
    let url = if suggestions {
        template
            .suggestions_url
            .as_ref()
            .ok_or_else(|| OsddError::NoSuggestions(file.display().to_string()))?
    } else {
        &template.search_url
    };

    if !url.supports_replacement() {
        return Err(OsddError::NoReplacement(url.url().to_string()));
    }

    let mut args = SearchTermsArgs::new(terms);
    if let Some(encoding) = template.preferred_input_encoding() {
        args = args.with_input_encoding(encoding);
    }
    println!("{}", url.expand(&args));
    Ok(())
}

fn render_text(template: &SearchTemplate) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{} {}",
        style("Search engine:").bold(),
        style(&template.short_name).green()
    ));
    if let Some(description) = &template.description {
        lines.push(format!("  Description: {description}"));
    }
    lines.push(format!("  Search URL: {}", style(template.search_url.url()).cyan()));
    let placeholders: Vec<String> = template
        .search_url
        .placeholders()
        .iter()
        .map(|token| {
            let marker = if token.optional { "?" } else { "" };
            format!("{}{marker}", token.placeholder.name())
        })
        .collect();
    if !placeholders.is_empty() {
        lines.push(format!("  Placeholders: {}", placeholders.join(", ")));
    }
    if !template.search_url.supports_replacement() {
        lines.push(format!(
            "  {}",
            style("Search URL has no {searchTerms} placeholder").yellow()
        ));
    }
    match &template.suggestions_url {
        Some(url) => lines.push(format!("  Suggestions URL: {}", style(url.url()).cyan())),
        None => lines.push("  Suggestions URL: none".to_string()),
    }
    match template.favicon_url_or_default() {
        Some(favicon) => lines.push(format!("  Favicon: {favicon}")),
        None => lines.push("  Favicon: none".to_string()),
    }
    if !template.input_encodings.is_empty() {
        lines.push(format!(
            "  Input encodings: {}",
            template.input_encodings.join(", ")
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UrlTemplate;

    fn template() -> SearchTemplate {
        SearchTemplate {
            short_name: "Dictionary.com".to_string(),
            description: None,
            favicon_url: Some("http://cache.lexico.com/g/d/favicon.ico".to_string()),
            search_url: UrlTemplate::new("http://dictionary.reference.com/browse/{searchTerms}?r=75"),
            suggestions_url: None,
            input_encodings: vec!["UTF-8".to_string()],
        }
    }

    #[test]
    fn test_cli_parse_parse() {
        let cli = Cli::parse_from(["osdd-parser", "parse", "dictionary.xml"]);

        let Commands::Parse {
            file,
            exclude_key,
            exclude_value,
            strict,
            format,
        } = cli.command
        else {
            panic!("expected parse command");
        };
        assert_eq!(file, PathBuf::from("dictionary.xml"));
        assert_eq!(exclude_key, "");
        assert_eq!(exclude_value, "");
        assert!(!strict);
        assert_eq!(format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_parse_with_filter_and_format() {
        let cli = Cli::parse_from([
            "osdd-parser",
            "parse",
            "firefox_ebay.xml",
            "--exclude-key",
            "ebay",
            "--exclude-value",
            "ebay",
            "--format",
            "yaml",
        ]);

        let Commands::Parse {
            exclude_key,
            exclude_value,
            format,
            ..
        } = cli.command
        else {
            panic!("expected parse command");
        };
        assert_eq!(exclude_key, "ebay");
        assert_eq!(exclude_value, "ebay");
        assert_eq!(format, OutputFormat::Yaml);
    }

    #[test]
    fn test_cli_parse_expand() {
        let cli = Cli::parse_from(["osdd-parser", "expand", "wikipedia.xml", "rust", "--suggestions"]);

        let Commands::Expand {
            terms, suggestions, ..
        } = cli.command
        else {
            panic!("expected expand command");
        };
        assert_eq!(terms, "rust");
        assert!(suggestions);
    }

    #[test]
    fn test_render_text() {
        console::set_colors_enabled(false);
        let text = render_text(&template());
        assert!(text.contains("Search engine: Dictionary.com"));
        assert!(text.contains("Search URL: http://dictionary.reference.com/browse/{searchTerms}?r=75"));
        assert!(text.contains("Placeholders: searchTerms"));
        assert!(text.contains("Suggestions URL: none"));
        assert!(text.contains("Favicon: http://cache.lexico.com/g/d/favicon.ico"));
        assert!(text.contains("Input encodings: UTF-8"));
    }

    #[test]
    fn test_render_yaml() {
        let yaml = render_template(&template(), OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("short_name: Dictionary.com"));
        assert!(yaml.contains("input_encodings:"));
        assert!(!yaml.contains("suggestions_url"));
    }

    #[test]
    fn test_render_json() {
        let json = render_template(&template(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["short_name"], "Dictionary.com");
        assert_eq!(
            value["search_url"]["url"],
            "http://dictionary.reference.com/browse/{searchTerms}?r=75"
        );
        assert_eq!(value["search_url"]["parameters"][0]["name"], "r");
    }
}
