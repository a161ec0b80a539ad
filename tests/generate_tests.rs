//! Library-level tests for the generation pipeline with stubbed collaborators

mod common;

use std::cell::Cell;
use std::collections::HashMap;
use std::path::Path;

use supported_browsers::error::{GeneratorError, Result};
use supported_browsers::error::oracle::failed;
use supported_browsers::{
    BrowserQuery, Formatter, GenerateOptions, IdentifierMap, ModuleFormatter, Oracle,
    ResolvedBrowser, StyleConfig, UnresolvedPolicy, generate, is_running_from_cli,
};

/// Oracle answering from a table keyed by the query's browser name
struct TableOracle {
    releases: HashMap<&'static str, Vec<&'static str>>,
}

impl TableOracle {
    fn reference() -> Self {
        let releases = HashMap::from([
            ("chrome", vec!["chrome 111", "chrome 109", "chrome 110"]),
            ("firefox", vec!["firefox 117", "firefox 115"]),
            ("edge", vec!["edge 109"]),
            ("safari", vec!["safari 16.5", "safari 13.1"]),
            ("ios_saf", vec!["ios_saf 16.5", "ios_saf 13.1"]),
            ("ChromeAndroid", vec!["and_chr 106"]),
            ("FirefoxAndroid", vec!["and_ff 115"]),
            ("samsung", vec!["samsung 17"]),
            ("opera", vec!["opera 17"]),
        ]);
        Self { releases }
    }
}

impl Oracle for TableOracle {
    fn resolve(&self, query: &str) -> Result<Vec<String>> {
        let name = query.split_whitespace().next().unwrap_or_default();
        Ok(self
            .releases
            .get(name)
            .map(|releases| releases.iter().map(ToString::to_string).collect())
            .unwrap_or_default())
    }
}

struct ThrowingOracle;

impl Oracle for ThrowingOracle {
    fn resolve(&self, query: &str) -> Result<Vec<String>> {
        Err(failed(query, "Invalid browserslist query"))
    }
}

/// Formatter counting its invocations and returning the raw text
#[derive(Default)]
struct CountingFormatter {
    calls: Cell<usize>,
}

impl Formatter for CountingFormatter {
    fn format(&self, source: &str, _style: &StyleConfig, path: &Path) -> Result<String> {
        assert!(path.ends_with("supportedBrowsers.mjs"));
        self.calls.set(self.calls.get() + 1);
        Ok(source.to_string())
    }
}

const REFERENCE_QUERIES: [&str; 9] = [
    "chrome >= 109",
    "firefox >= 115",
    "edge >= 109",
    "safari >= 13.1",
    "ios_saf >= 13.1",
    "ChromeAndroid >= 106",
    "FirefoxAndroid >= 115",
    "samsung >= 17",
    "opera >= 95",
];

fn options(project: &common::TestProject, texts: &[&str]) -> GenerateOptions {
    let queries = texts
        .iter()
        .map(|text| BrowserQuery::parse(text).expect("query should parse"))
        .collect();
    GenerateOptions::new(
        queries,
        project.path.join(".prettierrc"),
        project.path.join("supportedBrowsers.mjs"),
    )
}

fn entry(name: &str, version: &str) -> (Option<String>, String) {
    (Some(name.to_string()), version.to_string())
}

#[test]
fn test_reference_configuration_output() {
    let project = common::TestProject::new();
    project.write_file(".prettierrc", "{}");

    generate(
        &options(&project, &REFERENCE_QUERIES),
        &TableOracle::reference(),
        &ModuleFormatter,
    )
    .expect("generation should succeed");

    let module = project.read_file("supportedBrowsers.mjs");
    assert!(module.starts_with("// This file is auto-generated. Do not edit directly.\n"));
    assert_eq!(
        common::parse_generated(&module),
        vec![
            entry("Chrome", "109"),
            entry("Chrome Android", "106"),
            entry("Edge", "109"),
            entry("Firefox", "115"),
            entry("Firefox Android", "115"),
            entry("iOS Safari", "13.1"),
            entry("Opera", "95"),
            entry("Safari", "13.1"),
            entry("Samsung Browser", "17"),
        ]
    );
}

#[test]
fn test_output_sorted_for_any_query_order() {
    let project = common::TestProject::new();
    project.write_file(".prettierrc", "{}");
    let oracle = TableOracle::reference();

    let mut reversed = REFERENCE_QUERIES;
    reversed.reverse();

    let forward = generate(&options(&project, &REFERENCE_QUERIES), &oracle, &ModuleFormatter)
        .expect("generation should succeed");
    let backward = generate(&options(&project, &reversed), &oracle, &ModuleFormatter)
        .expect("generation should succeed");

    assert_eq!(forward, backward);
}

#[test]
fn test_minimum_version_comes_from_query() {
    let project = common::TestProject::new();
    project.write_file(".prettierrc", "{}");

    let rendered = generate(
        &options(&project, &["chrome >= 109", "opera >= 95"]),
        &TableOracle::reference(),
        &ModuleFormatter,
    )
    .expect("generation should succeed");

    assert_eq!(
        rendered.browsers,
        vec![
            ResolvedBrowser::new("Chrome", "109"),
            ResolvedBrowser::new("Opera", "95"),
        ]
    );
}

#[test]
fn test_no_match_keeps_entry_without_name() {
    let project = common::TestProject::new();
    project.write_file(".prettierrc", "{}");

    generate(
        &options(&project, &["invalid >= 1.0", "chrome >= 109"]),
        &TableOracle::reference(),
        &ModuleFormatter,
    )
    .expect("unresolved entries should not fail generation");

    assert_eq!(
        common::parse_generated(&project.read_file("supportedBrowsers.mjs")),
        vec![entry("Chrome", "109"), (None, "1.0".to_string())]
    );
}

#[test]
fn test_fail_policy_rejects_no_match() {
    let project = common::TestProject::new();
    project.write_file(".prettierrc", "{}");

    let err = generate(
        &options(&project, &["invalid >= 1.0"]).with_policy(UnresolvedPolicy::Fail),
        &TableOracle::reference(),
        &ModuleFormatter,
    )
    .expect_err("fail policy should reject unresolved queries");

    assert!(matches!(err, GeneratorError::UnresolvedBrowser { .. }));
    assert!(!project.file_exists("supportedBrowsers.mjs"));
}

#[test]
fn test_custom_identifier_map() {
    let project = common::TestProject::new();
    project.write_file(".prettierrc", "{}");
    let identifiers: IdentifierMap = [("chrome", "Google Chrome")].into_iter().collect();

    let rendered = generate(
        &options(&project, &["chrome >= 109", "edge >= 109"])
            .with_identifiers(identifiers)
            .with_policy(UnresolvedPolicy::Drop),
        &TableOracle::reference(),
        &ModuleFormatter,
    )
    .expect("generation should succeed");

    assert_eq!(
        rendered.browsers,
        vec![ResolvedBrowser::new("Google Chrome", "109")]
    );
}

#[test]
fn test_unreadable_style_file_rejects_without_output() {
    let project = common::TestProject::new();
    let formatter = CountingFormatter::default();

    let err = generate(
        &options(&project, &REFERENCE_QUERIES),
        &TableOracle::reference(),
        &formatter,
    )
    .expect_err("missing style file should fail");

    assert!(matches!(err, GeneratorError::ConfigReadFailed { .. }));
    assert_eq!(formatter.calls.get(), 0);
    assert!(!project.file_exists("supportedBrowsers.mjs"));
}

#[test]
fn test_oracle_error_rejects_without_output() {
    let project = common::TestProject::new();
    project.write_file(".prettierrc", "{}");

    let err = generate(
        &options(&project, &REFERENCE_QUERIES),
        &ThrowingOracle,
        &ModuleFormatter,
    )
    .expect_err("oracle failure should fail");

    assert!(err.to_string().contains("Invalid browserslist query"));
    assert!(!project.file_exists("supportedBrowsers.mjs"));
}

#[test]
fn test_write_error_is_propagated() {
    let project = common::TestProject::new();
    project.write_file(".prettierrc", "{}");
    project.write_file("blocker", "");

    let mut opts = options(&project, &["chrome >= 109"]);
    opts.output_path = project.path.join("blocker").join("supportedBrowsers.mjs");

    let err = generate(&opts, &TableOracle::reference(), &CountingFormatter::default())
        .expect_err("writing below a file should fail");

    assert!(matches!(err, GeneratorError::FileWriteFailed { .. }));
}

#[test]
fn test_formatter_runs_once_per_generation() {
    let project = common::TestProject::new();
    project.write_file(".prettierrc", "{}");
    let formatter = CountingFormatter::default();

    generate(
        &options(&project, &REFERENCE_QUERIES),
        &TableOracle::reference(),
        &formatter,
    )
    .expect("generation should succeed");

    assert_eq!(formatter.calls.get(), 1);
    assert!(project
        .read_file("supportedBrowsers.mjs")
        .contains("export default [\n  {\n    \"name\": \"Chrome\""));
}

#[test]
fn test_is_running_from_cli() {
    assert!(is_running_from_cli("file:///a/b.js", "/a/b.js"));
    assert!(!is_running_from_cli("file:///a/b.js", "/x/y.js"));
    assert!(!is_running_from_cli("file:///a/b.js", ""));
}
