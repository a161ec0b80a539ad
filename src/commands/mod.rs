//! Command implementations for the CLI

pub mod browsers;
pub mod completions;
pub mod generate;
pub mod version;
