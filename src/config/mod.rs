//! Configuration file handling
//!
//! This module loads:
//! - the browser query list (`.browserslistrc`, `browserslist.json`, or the
//!   `browserslist` key of `package.json`)
//! - the style rules (`.prettierrc`) used to format the generated module

pub mod queries;
pub mod style;

pub use queries::{discover_queries, load_queries, parse_queries};
pub use style::load_style;

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::error::config::read_failed;

/// Default name of the style rules file, relative to the project directory
pub const STYLE_FILE: &str = ".prettierrc";

/// Default name of the generated module, relative to the project directory
pub const OUTPUT_FILE: &str = "supportedBrowsers.mjs";

/// Read a configuration file, mapping any failure to `ConfigReadFailed`
fn read_config_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| read_failed(path.display().to_string(), e.to_string()))
}
