//! Browser query list loading
//!
//! Queries are validated when loaded, so a typo fails the run before any
//! lookup happens.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use super::read_config_file;
use crate::browsers::BrowserQuery;
use crate::error::config::{not_found, parse_failed};
use crate::error::{GeneratorError, Result};

/// Candidate query files, in lookup order
pub const QUERY_FILES: [&str; 3] = [".browserslistrc", "browserslist.json", "package.json"];

/// Find the query file of a project directory
///
/// `package.json` only counts when it has a `browserslist` key.
pub fn discover_queries(dir: &Path) -> Result<PathBuf> {
    for name in QUERY_FILES {
        let path = dir.join(name);
        if !path.is_file() {
            continue;
        }
        if name == "package.json" && !has_browserslist_key(&path)? {
            continue;
        }
        debug!(path = %path.display(), "using query file");
        return Ok(path);
    }

    Err(not_found(dir.display().to_string()))
}

fn has_browserslist_key(path: &Path) -> Result<bool> {
    let content = read_config_file(path)?;
    let value: Value = serde_json::from_str(&content)
        .map_err(|e| parse_failed(path.display().to_string(), e.to_string()))?;
    Ok(value.get("browserslist").is_some())
}

/// Load and validate the queries in `path`
pub fn load_queries(path: &Path) -> Result<Vec<BrowserQuery>> {
    let content = read_config_file(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let queries = parse_queries(&content, is_json)
        .map_err(|e| with_path(e, &path.display().to_string()))?;
    debug!(path = %path.display(), count = queries.len(), "loaded browser queries");
    Ok(queries)
}

/// Attach the file path to errors raised while parsing its contents
fn with_path(err: GeneratorError, path: &str) -> GeneratorError {
    match err {
        GeneratorError::ConfigParseFailed { reason, .. } => parse_failed(path, reason),
        GeneratorError::InvalidQuery { query, reason } => {
            parse_failed(path, format!("invalid query '{query}': {reason}"))
        }
        other => other,
    }
}

/// Parse query file contents
///
/// JSON input is a string array or an object with a `browserslist` array;
/// anything else is browserslistrc text with one query per line.
pub fn parse_queries(content: &str, is_json: bool) -> Result<Vec<BrowserQuery>> {
    if is_json {
        parse_json(content)
    } else {
        parse_browserslistrc(content)
    }
}

fn parse_browserslistrc(content: &str) -> Result<Vec<BrowserQuery>> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.split_once('#').map_or(line, |(before, _)| before).trim();
            (!line.is_empty()).then_some((index + 1, line))
        })
        .map(|(number, line)| {
            BrowserQuery::parse(line).map_err(|e| match e {
                GeneratorError::InvalidQuery { query, reason } => GeneratorError::InvalidQuery {
                    query,
                    reason: format!("line {number}: {reason}"),
                },
                other => other,
            })
        })
        .collect()
}

fn parse_json(content: &str) -> Result<Vec<BrowserQuery>> {
    let value: Value = serde_json::from_str(content)?;
    let list = match &value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("browserslist") {
            Some(Value::Array(items)) => items,
            Some(_) => return Err(parse_failed("unknown", "'browserslist' must be an array")),
            None => return Err(parse_failed("unknown", "missing 'browserslist' key")),
        },
        _ => {
            return Err(parse_failed(
                "unknown",
                "expected an array of queries or an object with a 'browserslist' key",
            ));
        }
    };

    list.iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(text) => BrowserQuery::parse(text),
            other => Err(parse_failed(
                "unknown",
                format!("entry {index} is not a string: {other}"),
            )),
        })
        .collect()
}
