//! Test fixtures and utilities for reducing test setup duplication.
//!
//! In-memory oracles and formatters stand in for the compatibility data and
//! the style step, so pipeline tests never depend on the bundled caniuse
//! snapshot.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{StaticOracle, queries};
//!
//! let oracle = StaticOracle::new().with("chrome >= 109", &["chrome 109"]);
//! let browsers = resolve_browsers(&queries(&["chrome >= 109"]), &map, &oracle, policy)?;
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use tempfile::TempDir;

use crate::browsers::BrowserQuery;
use crate::error::Result;
use crate::error::oracle::failed;
use crate::format::{Formatter, StyleConfig};
use crate::oracle::Oracle;

/// The nine queries tracked by the project
pub const REFERENCE_QUERIES: [&str; 9] = [
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

/// Oracle answering from a fixed table; unknown queries match nothing
#[derive(Debug, Default)]
pub struct StaticOracle {
    answers: HashMap<String, Vec<String>>,
    calls: RefCell<Vec<String>>,
}

impl StaticOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Oracle answering every reference query with one matching release
    pub fn reference() -> Self {
        Self::new()
            .with("chrome >= 109", &["chrome 109"])
            .with("firefox >= 115", &["firefox 115"])
            .with("edge >= 109", &["edge 109"])
            .with("safari >= 13.1", &["safari 13.1"])
            .with("ios_saf >= 13.1", &["ios_saf 13.1"])
            .with("ChromeAndroid >= 106", &["and_chr 106"])
            .with("FirefoxAndroid >= 115", &["and_ff 115"])
            .with("samsung >= 17", &["samsung 17"])
            .with("opera >= 95", &["opera 95"])
    }

    #[must_use]
    pub fn with(mut self, query: &str, releases: &[&str]) -> Self {
        self.answers.insert(
            query.to_string(),
            releases.iter().map(ToString::to_string).collect(),
        );
        self
    }

    /// Queries seen so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Oracle for StaticOracle {
    fn resolve(&self, query: &str) -> Result<Vec<String>> {
        self.calls.borrow_mut().push(query.to_string());
        Ok(self.answers.get(query).cloned().unwrap_or_default())
    }
}

/// Oracle rejecting every query with the same message
#[derive(Debug)]
pub struct FailingOracle {
    message: String,
}

impl FailingOracle {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Oracle for FailingOracle {
    fn resolve(&self, query: &str) -> Result<Vec<String>> {
        Err(failed(query, self.message.clone()))
    }
}

/// Formatter returning its input unchanged
#[derive(Debug, Default)]
pub struct PassthroughFormatter;

impl Formatter for PassthroughFormatter {
    fn format(&self, source: &str, _style: &StyleConfig, _path: &Path) -> Result<String> {
        Ok(source.to_string())
    }
}

/// Parse query literals, panicking on malformed test input
///
/// # Panics
///
/// Panics if any query is malformed.
pub fn queries(texts: &[&str]) -> Vec<BrowserQuery> {
    texts
        .iter()
        .map(|text| BrowserQuery::parse(text).expect("test query should parse"))
        .collect()
}

/// Create a temp directory holding a project with the given files
///
/// # Panics
///
/// Panics if the directory or any file cannot be created.
#[must_use]
pub fn create_project(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    for (name, contents) in files {
        std::fs::write(temp.path().join(name), contents).expect("Failed to write fixture file");
    }
    temp
}
