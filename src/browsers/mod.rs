//! Browser domain types
//!
//! - [`identifiers`]: compatibility-data codes to display names
//! - [`query`]: parsed `<code> <comparator> <version>` queries
//! - [`ResolvedBrowser`]: one entry of the generated module

pub mod identifiers;
pub mod query;

pub use identifiers::IdentifierMap;
pub use query::{BrowserQuery, Comparator};

use serde::{Deserialize, Serialize};

/// A browser with its minimum supported version, as written to the artifact
///
/// `name` is `None` when the query could not be mapped to a display name.
/// Such entries serialize without a `name` property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBrowser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub minimum_version: String,
}

impl ResolvedBrowser {
    pub fn new(name: impl Into<String>, minimum_version: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            minimum_version: minimum_version.into(),
        }
    }

    /// Entry for a query that did not map to a display name
    pub fn unnamed(minimum_version: impl Into<String>) -> Self {
        Self {
            name: None,
            minimum_version: minimum_version.into(),
        }
    }
}
