//! supported-browsers - minimum browser versions generator
//!
//! Command line entry point: parses arguments, sets up logging and
//! dispatches to the command implementations.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands, GenerateArgs};

/// Log to stderr so stdout carries only command output
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "supported_browsers=debug"
    } else {
        "supported_browsers=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        None => commands::generate::run(cli.dir, GenerateArgs::default()),
        Some(Commands::Generate(args)) => commands::generate::run(cli.dir, args),
        Some(Commands::Browsers) => commands::browsers::run(),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
