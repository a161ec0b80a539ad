//! Generation pipeline
//!
//! queries -> oracle lookups -> sort -> module text -> style -> file
//!
//! Nothing touches the output until every earlier step has succeeded, so a
//! failed run leaves the previous artifact in place.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::assembler::{render_module, sort_browsers};
use crate::browsers::{BrowserQuery, IdentifierMap, ResolvedBrowser};
use crate::config::load_style;
use crate::error::Result;
use crate::error::fs::outdated;
use crate::format::Formatter;
use crate::oracle::Oracle;
use crate::resolver::{UnresolvedPolicy, resolve_browsers};
use crate::writer::write_output;

/// Everything one generation run needs
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub queries: Vec<BrowserQuery>,
    pub identifiers: IdentifierMap,
    pub policy: UnresolvedPolicy,
    /// Style rules file (`.prettierrc`)
    pub style_path: PathBuf,
    /// Generated module; also the formatter's path hint
    pub output_path: PathBuf,
}

impl GenerateOptions {
    /// Options with the reference identifier map and the default policy
    pub fn new(
        queries: Vec<BrowserQuery>,
        style_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            queries,
            identifiers: IdentifierMap::reference(),
            policy: UnresolvedPolicy::default(),
            style_path: style_path.into(),
            output_path: output_path.into(),
        }
    }

    #[must_use]
    pub fn with_identifiers(mut self, identifiers: IdentifierMap) -> Self {
        self.identifiers = identifiers;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: UnresolvedPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// A formatted module that has not been written yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub browsers: Vec<ResolvedBrowser>,
    pub contents: String,
}

/// Produce the formatted module without writing it
pub fn render(
    options: &GenerateOptions,
    oracle: &dyn Oracle,
    formatter: &dyn Formatter,
) -> Result<Rendered> {
    let mut browsers = resolve_browsers(
        &options.queries,
        &options.identifiers,
        oracle,
        options.policy,
    )?;
    sort_browsers(&mut browsers);

    let raw = render_module(&browsers)?;
    let style = load_style(&options.style_path)?;
    let contents = formatter.format(&raw, &style, &options.output_path)?;

    Ok(Rendered { browsers, contents })
}

/// Render the module and write it to the output path
pub fn generate(
    options: &GenerateOptions,
    oracle: &dyn Oracle,
    formatter: &dyn Formatter,
) -> Result<Rendered> {
    let rendered = render(options, oracle, formatter)?;
    write_output(&options.output_path, &rendered.contents)?;

    info!(
        path = %options.output_path.display(),
        browsers = rendered.browsers.len(),
        "generated supported browsers"
    );
    Ok(rendered)
}

/// Fail with `OutputOutdated` unless the output already matches a fresh render
///
/// A missing output counts as outdated; any other read failure is an I/O error.
pub fn check(
    options: &GenerateOptions,
    oracle: &dyn Oracle,
    formatter: &dyn Formatter,
) -> Result<Rendered> {
    let rendered = render(options, oracle, formatter)?;

    let current = match fs::read_to_string(&options.output_path) {
        Ok(text) => Some(text),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };
    if current.as_deref() != Some(rendered.contents.as_str()) {
        debug!(
            path = %options.output_path.display(),
            exists = current.is_some(),
            "output differs from fresh render"
        );
        return Err(outdated(options.output_path.display().to_string()));
    }

    Ok(rendered)
}
