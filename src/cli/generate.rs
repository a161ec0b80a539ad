use clap::Parser;
use std::path::PathBuf;

use supported_browsers::UnresolvedPolicy;

/// Arguments for the generate command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate from the project's .browserslistrc:\n    supported-browsers generate\n\n\
                  Use another query file and output:\n    supported-browsers generate --queries config/browsers.json --output src/supportedBrowsers.mjs\n\n\
                  Fail on queries without a known browser:\n    supported-browsers generate --on-unresolved fail\n\n\
                  Verify the committed module in CI:\n    supported-browsers generate --check")]
pub struct GenerateArgs {
    /// Query file (.browserslistrc, JSON array, or package.json). Discovered in the project directory if omitted
    #[arg(long, short = 'q', value_name = "PATH")]
    pub queries: Option<PathBuf>,

    /// Style rules file [default: <dir>/.prettierrc]
    #[arg(long, short = 's', value_name = "PATH")]
    pub style: Option<PathBuf>,

    /// Generated module [default: <dir>/supportedBrowsers.mjs]
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// What to do with queries that match no known browser: keep-undefined, drop, fail
    #[arg(long, value_name = "POLICY", default_value = "keep-undefined")]
    pub on_unresolved: UnresolvedPolicy,

    /// Print the generated module instead of writing it
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Fail if the generated module is missing or out of date
    #[arg(long)]
    pub check: bool,
}
