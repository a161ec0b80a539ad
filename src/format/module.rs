//! Built-in formatter for generated data modules
//!
//! Understands exactly the shape the assembler emits: leading `//` comments
//! and blank lines, then `export default <JSON>;`. The JSON value is printed
//! back as a JavaScript literal following the style rules.

use std::fmt::Write;
use std::path::Path;

use serde_json::{Map, Value};

use super::{Formatter, QuoteProps, StyleConfig};
use crate::error::Result;
use crate::error::fs::{format_failed, unsupported_target};

const EXPORT_DEFAULT: &str = "export default ";

const SCRIPT_EXTENSIONS: [&str; 6] = ["js", "mjs", "cjs", "ts", "mts", "cts"];

/// Formats `export default` data modules without an external toolchain
#[derive(Debug, Default, Clone, Copy)]
pub struct ModuleFormatter;

impl ModuleFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for ModuleFormatter {
    fn format(&self, source: &str, style: &StyleConfig, path: &Path) -> Result<String> {
        let is_script = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext));
        if !is_script {
            return Err(unsupported_target(path.display().to_string()));
        }

        let (header, value) =
            split_module(source).map_err(|reason| format_failed(path.display().to_string(), reason))?;

        let printer = Printer::new(style);
        let mut lines = header;
        let statement = format!(
            "{EXPORT_DEFAULT}{}{}",
            printer.print(&value, 0, EXPORT_DEFAULT.len()),
            if style.semi { ";" } else { "" }
        );
        lines.extend(statement.split('\n').map(ToString::to_string));

        let eol = style.end_of_line.as_str();
        Ok(lines.join(eol) + eol)
    }
}

/// Split a module into its header lines and exported value
///
/// Runs of blank lines in the header collapse to one; leading blank lines
/// are dropped.
fn split_module(source: &str) -> std::result::Result<(Vec<String>, Value), String> {
    let mut header: Vec<String> = Vec::new();
    let mut rest = source;

    loop {
        if rest.trim().is_empty() {
            return Err("missing 'export default' statement".to_string());
        }

        let (line, remainder) = rest.split_once('\n').unwrap_or((rest, ""));
        let trimmed = line.trim();

        if trimmed.starts_with(EXPORT_DEFAULT.trim_end()) {
            break;
        }
        if trimmed.is_empty() {
            if header.last().is_some_and(|last| !last.is_empty()) {
                header.push(String::new());
            }
        } else if trimmed.starts_with("//") {
            header.push(trimmed.to_string());
        } else {
            return Err(format!("unexpected statement before export: '{trimmed}'"));
        }

        rest = remainder;
    }

    let body = rest
        .trim()
        .strip_prefix(EXPORT_DEFAULT.trim_end())
        .unwrap_or_default()
        .trim();
    let body = body.strip_suffix(';').unwrap_or(body).trim_end();
    let value = serde_json::from_str(body).map_err(|e| format!("invalid exported value: {e}"))?;

    Ok((header, value))
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn is_primitive(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

struct Printer<'a> {
    style: &'a StyleConfig,
    indent_unit: String,
}

impl<'a> Printer<'a> {
    fn new(style: &'a StyleConfig) -> Self {
        Self {
            style,
            indent_unit: style.indent_unit(),
        }
    }

    fn indent(&self, depth: usize) -> String {
        self.indent_unit.repeat(depth)
    }

    /// Display width of the indentation at `depth`
    fn indent_width(&self, depth: usize) -> usize {
        if self.style.use_tabs {
            depth * self.style.tab_width
        } else {
            depth * self.indent_unit.len()
        }
    }

    /// Print a value that starts at `column` on a line indented `depth` levels
    fn print(&self, value: &Value, depth: usize, column: usize) -> String {
        match value {
            Value::String(s) => self.quote(s),
            Value::Array(items) => self.print_array(items, depth, column),
            Value::Object(map) => self.print_object(map, depth),
            other => other.to_string(),
        }
    }

    fn print_array(&self, items: &[Value], depth: usize, column: usize) -> String {
        if items.is_empty() {
            return "[]".to_string();
        }

        if items.iter().all(is_primitive) {
            let inline = format!(
                "[{}]",
                items
                    .iter()
                    .map(|item| self.print(item, depth, 0))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            // Room for the statement's closing semicolon or the element's comma
            if column + inline.len() < self.style.print_width {
                return inline;
            }
        }

        let inner = self.indent(depth + 1);
        let inner_width = self.indent_width(depth + 1);
        let elements: Vec<String> = items
            .iter()
            .map(|item| format!("{inner}{}", self.print(item, depth + 1, inner_width)))
            .collect();
        self.close_block('[', elements, ']', depth)
    }

    fn print_object(&self, map: &Map<String, Value>, depth: usize) -> String {
        if map.is_empty() {
            return "{}".to_string();
        }

        let quote_keys = match self.style.quote_props {
            QuoteProps::AsNeeded => false,
            QuoteProps::Consistent => map.keys().any(|key| !is_identifier(key)),
            QuoteProps::Preserve => true,
        };

        let inner = self.indent(depth + 1);
        let inner_width = self.indent_width(depth + 1);
        let properties: Vec<String> = map
            .iter()
            .map(|(key, value)| {
                let key = if quote_keys || !is_identifier(key) {
                    self.quote(key)
                } else {
                    key.clone()
                };
                let column = inner_width + key.len() + 2;
                format!("{inner}{key}: {}", self.print(value, depth + 1, column))
            })
            .collect();
        self.close_block('{', properties, '}', depth)
    }

    fn close_block(&self, open: char, entries: Vec<String>, close: char, depth: usize) -> String {
        let trailing = if self.style.trailing_comma.in_literals() {
            ","
        } else {
            ""
        };
        let last = entries.len().saturating_sub(1);
        let body: Vec<String> = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                if i == last {
                    format!("{entry}{trailing}")
                } else {
                    format!("{entry},")
                }
            })
            .collect();
        format!("{open}\n{}\n{}{close}", body.join("\n"), self.indent(depth))
    }

    /// Quote a string, preferring the configured quote unless the other one
    /// needs fewer escapes
    fn quote(&self, s: &str) -> String {
        let (preferred, alternate) = if self.style.single_quote {
            ('\'', '"')
        } else {
            ('"', '\'')
        };
        let quote = if s.matches(preferred).count() > s.matches(alternate).count() {
            alternate
        } else {
            preferred
        };

        let mut out = String::with_capacity(s.len() + 2);
        out.push(quote);
        for c in s.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c == quote => {
                    out.push('\\');
                    out.push(c);
                }
                c if c.is_control() => {
                    let _ = write!(out, "\\u{:04x}", u32::from(c));
                }
                c => out.push(c),
            }
        }
        out.push(quote);
        out
    }
}
