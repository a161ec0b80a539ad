//! Browser query parsing
//!
//! A query is `<code> <comparator> <version>`, e.g. `chrome >= 109`. The
//! comparator is kept for display only: the configured version is used as
//! the minimum directly.

use std::fmt;

use crate::error::Result;
use crate::error::query::invalid;

/// Version comparator of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    GreaterOrEqual,
    LessOrEqual,
    Greater,
    Less,
    Equal,
}

impl Comparator {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">=" => Some(Self::GreaterOrEqual),
            "<=" => Some(Self::LessOrEqual),
            ">" => Some(Self::Greater),
            "<" => Some(Self::Less),
            "=" => Some(Self::Equal),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::Equal => "=",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated browser query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserQuery {
    raw: String,
    code: String,
    comparator: Comparator,
    threshold: String,
}

fn is_comparator_char(c: char) -> bool {
    matches!(c, '>' | '<' | '=')
}

impl BrowserQuery {
    /// Parse a query, rejecting anything that is not `<code> <op> <version>`
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();

        let Some(op_start) = raw.find(is_comparator_char) else {
            return Err(invalid(raw, "missing comparator (>=, <=, >, <, =)"));
        };
        let op_len = raw[op_start..]
            .find(|c: char| !is_comparator_char(c))
            .unwrap_or(raw.len() - op_start);
        let symbol = &raw[op_start..op_start + op_len];

        let Some(comparator) = Comparator::from_symbol(symbol) else {
            return Err(invalid(raw, format!("unknown comparator '{symbol}'")));
        };

        let code = raw[..op_start].trim();
        if code.is_empty() {
            return Err(invalid(raw, "missing browser name"));
        }
        if code.contains(char::is_whitespace) {
            return Err(invalid(raw, format!("browser name '{code}' contains spaces")));
        }

        let threshold = raw[op_start + op_len..].trim();
        if threshold.is_empty() {
            return Err(invalid(raw, "missing version"));
        }
        if threshold.contains(char::is_whitespace) || threshold.contains(is_comparator_char) {
            return Err(invalid(raw, format!("malformed version '{threshold}'")));
        }

        Ok(Self {
            raw: raw.to_string(),
            code: code.to_string(),
            comparator,
            threshold: threshold.to_string(),
        })
    }

    /// The query text as configured (trimmed); this is what the oracle sees
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Browser name as written in the query (may be an alias)
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    /// Version text after the comparator
    pub fn threshold(&self) -> &str {
        &self.threshold
    }
}

impl fmt::Display for BrowserQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for BrowserQuery {
    type Err = crate::error::GeneratorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}
