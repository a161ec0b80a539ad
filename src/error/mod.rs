//! Error types and handling for the generator
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Query list and style-rules file errors
//! - [`query`]: Query parsing and resolution errors
//! - [`oracle`]: Compatibility-data lookup errors
//! - [`fs`]: File system and output errors

pub mod config;
pub mod fs;
pub mod oracle;
pub mod query;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for generator operations
#[derive(Error, Diagnostic, Debug)]
pub enum GeneratorError {
    // Configuration errors
    #[error("Configuration file not found in {path}")]
    #[diagnostic(
        code(supported_browsers::config::not_found),
        help("Create a .browserslistrc, browserslist.json or a package.json with a \"browserslist\" key, or pass --queries")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file {path}: {reason}")]
    #[diagnostic(code(supported_browsers::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file {path}: {reason}")]
    #[diagnostic(code(supported_browsers::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // Query errors
    #[error("Invalid browser query '{query}': {reason}")]
    #[diagnostic(
        code(supported_browsers::query::invalid),
        help("Queries must look like '<browser> <comparator> <version>', e.g. 'chrome >= 109'")
    )]
    InvalidQuery { query: String, reason: String },

    #[error("Browser query '{query}' did not resolve to a known browser: {reason}")]
    #[diagnostic(
        code(supported_browsers::query::unresolved),
        help("Fix the query or add its browser code to the identifier map")
    )]
    UnresolvedBrowser { query: String, reason: String },

    // Oracle errors
    #[error("Failed to resolve query '{query}': {reason}")]
    #[diagnostic(code(supported_browsers::oracle::failed))]
    OracleFailed { query: String, reason: String },

    // Formatting errors
    #[error("Failed to format {path}: {reason}")]
    #[diagnostic(code(supported_browsers::format::failed))]
    FormatFailed { path: String, reason: String },

    #[error("Cannot format {path}: unsupported file type")]
    #[diagnostic(
        code(supported_browsers::format::unsupported_target),
        help("The output must be a JavaScript module (.js, .mjs, .cjs, .ts, .mts, .cts)")
    )]
    UnsupportedTarget { path: String },

    // File system errors
    #[error("Failed to write file {path}: {reason}")]
    #[diagnostic(code(supported_browsers::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Generated file is out of date: {path}")]
    #[diagnostic(
        code(supported_browsers::fs::outdated),
        help("Run 'supported-browsers generate' without --check to regenerate it")
    )]
    OutputOutdated { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(supported_browsers::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for GeneratorError {
    fn from(err: std::io::Error) -> Self {
        GeneratorError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for GeneratorError {
    fn from(err: serde_json::Error) -> Self {
        GeneratorError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, GeneratorError>;
