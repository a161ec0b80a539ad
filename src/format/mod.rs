//! Code style step
//!
//! A [`Formatter`] turns the raw module text into its committed form using
//! the project's style rules ([`StyleConfig`], read from a `.prettierrc`
//! style JSON file).

mod module;
mod style;

pub use module::ModuleFormatter;
pub use style::{EndOfLine, QuoteProps, StyleConfig, TrailingComma};

use std::path::Path;

use crate::error::Result;

/// Applies style rules to generated source text
///
/// `path` is the file the text will be written to; implementations use it
/// to pick language rules and reject targets they cannot format.
pub trait Formatter {
    fn format(&self, source: &str, style: &StyleConfig, path: &Path) -> Result<String>;
}

impl<F: Formatter + ?Sized> Formatter for &F {
    fn format(&self, source: &str, style: &StyleConfig, path: &Path) -> Result<String> {
        (**self).format(source, style, path)
    }
}
