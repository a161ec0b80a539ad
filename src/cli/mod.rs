//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - generate: Generate command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod generate;

pub use completions::CompletionsArgs;
pub use generate::GenerateArgs;

/// Generate the list of minimum supported browser versions
#[derive(Parser, Debug)]
#[command(
    name = "supported-browsers",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Generate minimum supported browser versions from a browserslist configuration",
    long_about = "Resolves each browserslist query through the bundled compatibility data, \
                  maps browser codes to display names and writes a formatted \
                  supportedBrowsers.mjs module. Runs 'generate' when no command is given.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  supported-browsers                          \x1b[90m# Generate with defaults\x1b[0m\n   \
                  supported-browsers generate --check         \x1b[90m# Fail if the module is stale\x1b[0m\n   \
                  supported-browsers generate --dry-run       \x1b[90m# Print instead of writing\x1b[0m\n   \
                  supported-browsers browsers                 \x1b[90m# List known browser codes\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'd', global = true, env = "SUPPORTED_BROWSERS_DIR")]
    pub dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the supported browsers module
    Generate(GenerateArgs),

    /// List browser codes and their display names
    Browsers,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
