//! Mapping from compatibility-data browser codes to display names

use std::collections::BTreeMap;

/// Codes tracked by default, with the labels shown to users
const REFERENCE: [(&str, &str); 9] = [
    ("and_chr", "Chrome Android"),
    ("and_ff", "Firefox Android"),
    ("chrome", "Chrome"),
    ("edge", "Edge"),
    ("firefox", "Firefox"),
    ("ios_saf", "iOS Safari"),
    ("opera", "Opera"),
    ("safari", "Safari"),
    ("samsung", "Samsung Browser"),
];

/// Lookup table from short browser codes (`and_chr`, `ios_saf`) to labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierMap {
    entries: BTreeMap<String, String>,
}

impl IdentifierMap {
    /// The nine-entry table used for the project's supported browsers
    pub fn reference() -> Self {
        REFERENCE.into_iter().collect()
    }

    /// Empty table; every lookup misses
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace a mapping
    #[must_use]
    pub fn with_entry(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.entries.insert(code.into(), name.into());
        self
    }

    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Entries ordered by code
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for IdentifierMap {
    fn default() -> Self {
        Self::reference()
    }
}

impl<C: Into<String>, N: Into<String>> FromIterator<(C, N)> for IdentifierMap {
    fn from_iter<I: IntoIterator<Item = (C, N)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(code, name)| (code.into(), name.into()))
                .collect(),
        }
    }
}
