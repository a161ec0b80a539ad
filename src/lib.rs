//! Supported browsers generator
//!
//! Builds the `supportedBrowsers.mjs` data module from browserslist queries:
//! each query is resolved through compatibility data to find which browser it
//! names, paired with the version written in the query, sorted by display
//! name and written as a formatted JavaScript module.
//!
//! ```no_run
//! use supported_browsers::{
//!     BrowserslistOracle, GenerateOptions, ModuleFormatter, config, generate,
//! };
//!
//! # fn main() -> supported_browsers::error::Result<()> {
//! let queries = config::load_queries(".browserslistrc".as_ref())?;
//! let options = GenerateOptions::new(queries, ".prettierrc", "supportedBrowsers.mjs");
//! generate(&options, &BrowserslistOracle::new(), &ModuleFormatter)?;
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod browsers;
pub mod config;
pub mod entry;
pub mod error;
pub mod format;
pub mod generate;
pub mod oracle;
pub mod resolver;
pub mod writer;

#[cfg(test)]
mod test_fixtures;

pub use browsers::{BrowserQuery, IdentifierMap, ResolvedBrowser};
pub use entry::is_running_from_cli;
pub use format::{Formatter, ModuleFormatter, StyleConfig};
pub use generate::{GenerateOptions, Rendered, check, generate, render};
pub use oracle::{BrowserslistOracle, Oracle};
pub use resolver::UnresolvedPolicy;
