//! Generate command implementation

use std::path::{Path, PathBuf};

use console::Style;
use supported_browsers::config::{OUTPUT_FILE, STYLE_FILE, discover_queries, load_queries};
use supported_browsers::error::Result;
use supported_browsers::{
    BrowserslistOracle, GenerateOptions, ModuleFormatter, check, generate, render,
};

use crate::cli::GenerateArgs;

/// Paths a run reads from and writes to
#[derive(Debug, PartialEq, Eq)]
struct ProjectPaths {
    queries: PathBuf,
    style: PathBuf,
    output: PathBuf,
}

/// Fill in default paths relative to the project directory
fn project_paths(dir: &Path, args: &GenerateArgs) -> Result<ProjectPaths> {
    let queries = match &args.queries {
        Some(path) => path.clone(),
        None => discover_queries(dir)?,
    };
    Ok(ProjectPaths {
        queries,
        style: args.style.clone().unwrap_or_else(|| dir.join(STYLE_FILE)),
        output: args.output.clone().unwrap_or_else(|| dir.join(OUTPUT_FILE)),
    })
}

/// Run generate command
pub fn run(dir: Option<PathBuf>, args: GenerateArgs) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let paths = project_paths(&dir, &args)?;

    let queries = load_queries(&paths.queries)?;
    let options =
        GenerateOptions::new(queries, paths.style, paths.output).with_policy(args.on_unresolved);
    let oracle = BrowserslistOracle::new();
    let formatter = ModuleFormatter::new();

    if args.dry_run {
        let rendered = render(&options, &oracle, &formatter)?;
        print!("{}", rendered.contents);
        return Ok(());
    }

    let output = options.output_path.display();
    if args.check {
        check(&options, &oracle, &formatter)?;
        println!(
            "{} {} is up to date",
            Style::new().green().bold().apply_to("✓"),
            output
        );
        return Ok(());
    }

    let rendered = generate(&options, &oracle, &formatter)?;
    let unnamed = rendered.browsers.iter().filter(|b| b.name.is_none()).count();
    println!(
        "{} Generated {} ({} browsers)",
        Style::new().green().bold().apply_to("✓"),
        output,
        rendered.browsers.len()
    );
    if unnamed > 0 {
        println!(
            "  {} {} entries have no display name",
            Style::new().yellow().bold().apply_to("warning:"),
            unnamed
        );
    }

    Ok(())
}
