//! Integration tests for the osdd-parser CLI.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("osdd")
        .join(name)
}

fn osdd_parser() -> Command {
    Command::new(assert_cmd::cargo_bin!("osdd-parser"))
}

#[test]
fn test_help() {
    osdd_parser()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("expand"));
}

#[test]
fn test_parse_text() {
    osdd_parser()
        .arg("parse")
        .arg(fixture("wikipedia.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Wikipedia (English)"))
        .stdout(predicate::str::contains(
            "http://en.wikipedia.org/w/api.php?action=opensearch&search={searchTerms}",
        ))
        .stdout(predicate::str::contains("UTF-8, Shift_JIS"));
}

#[test]
fn test_parse_json_with_filter() {
    let output = osdd_parser()
        .arg("parse")
        .arg(fixture("firefox_webster.xml"))
        .args(["--exclude-value", "Mozilla", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["short_name"], "Webster");
    assert_eq!(
        value["search_url"]["url"],
        "http://www.webster.com/cgi-bin/dictionary?va={searchTerms}"
    );
    assert_eq!(value["input_encodings"][0], "ISO-8859-1");
}

#[test]
fn test_parse_yaml() {
    osdd_parser()
        .arg("parse")
        .arg(fixture("dictionary.xml"))
        .args(["--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("short_name: Dictionary.com"));
}

#[test]
fn test_parse_post_fails() {
    osdd_parser()
        .arg("parse")
        .arg(fixture("post.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("POST"));
}

#[test]
fn test_parse_strict_requires_short_name() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nameless.xml");
    fs::write(
        &path,
        r#"<OpenSearchDescription><Url type="text/html" template="http://a.test/?q={searchTerms}"/></OpenSearchDescription>"#,
    )
    .unwrap();

    osdd_parser().arg("parse").arg(&path).assert().success();
    osdd_parser()
        .arg("parse")
        .arg(&path)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ShortName"));
}

#[test]
fn test_parse_missing_file() {
    let dir = TempDir::new().unwrap();
    osdd_parser()
        .arg("parse")
        .arg(dir.path().join("missing.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_expand() {
    osdd_parser()
        .arg("expand")
        .arg(fixture("msdn.xml"))
        .arg("rust traits")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "http://search.msdn.microsoft.com/search/default.aspx?Query=rust+traits&brand=msdn&locale=en-US",
        ));
}

#[test]
fn test_expand_suggestions() {
    osdd_parser()
        .arg("expand")
        .arg(fixture("firefox_yahoo.xml"))
        .arg("weather")
        .arg("--suggestions")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "http://ff.search.yahoo.com/gossip?output=fxjson&command=weather",
        ));
}

#[test]
fn test_expand_without_suggestions_url() {
    osdd_parser()
        .arg("expand")
        .arg(fixture("dictionary.xml"))
        .arg("word")
        .arg("--suggestions")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No suggestions URL"));
}

#[test]
fn test_expand_without_replacement() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fixed.xml");
    fs::write(
        &path,
        r#"<OpenSearchDescription><ShortName>Fixed</ShortName><Url type="text/html" template="http://fixed.test/search"/></OpenSearchDescription>"#,
    )
    .unwrap();

    osdd_parser()
        .arg("expand")
        .arg(&path)
        .arg("anything")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not support replacement"));
}
