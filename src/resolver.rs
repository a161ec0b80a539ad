//! Version resolution
//!
//! Turns configured queries into [`ResolvedBrowser`] entries. The oracle is
//! consulted to learn which browser a query names, but the minimum version
//! recorded is always the threshold written in the query, never the version
//! the oracle returned.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::browsers::{BrowserQuery, IdentifierMap, ResolvedBrowser};
use crate::error::Result;
use crate::error::query::unresolved;
use crate::oracle::{Oracle, leading_code};

/// What to do with a query that does not map to a display name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnresolvedPolicy {
    /// Emit the entry without a name
    #[default]
    KeepUndefined,
    /// Leave the entry out of the output
    Drop,
    /// Abort generation
    Fail,
}

impl UnresolvedPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::KeepUndefined => "keep-undefined",
            Self::Drop => "drop",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for UnresolvedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnresolvedPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "keep-undefined" => Ok(Self::KeepUndefined),
            "drop" => Ok(Self::Drop),
            "fail" => Ok(Self::Fail),
            other => Err(format!(
                "unknown policy '{other}' (expected keep-undefined, drop or fail)"
            )),
        }
    }
}

/// Why a query has no display name
enum Miss<'a> {
    NoRelease,
    UnknownCode(&'a str),
}

impl fmt::Display for Miss<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Miss::NoRelease => f.write_str("no matching release"),
            Miss::UnknownCode(code) => write!(f, "browser code '{code}' has no display name"),
        }
    }
}

/// Resolve one query to an entry, or report why it has no name
fn resolve_one<'r>(
    query: &BrowserQuery,
    releases: &'r [String],
    identifiers: &IdentifierMap,
) -> std::result::Result<ResolvedBrowser, Miss<'r>> {
    let code = releases
        .first()
        .and_then(|release| leading_code(release))
        .ok_or(Miss::NoRelease)?;
    let name = identifiers
        .display_name(code)
        .ok_or(Miss::UnknownCode(code))?;
    Ok(ResolvedBrowser::new(name, query.threshold()))
}

/// Resolve every query in configuration order
///
/// Oracle errors abort immediately. Queries without a display name are
/// handled according to `policy`.
pub fn resolve_browsers(
    queries: &[BrowserQuery],
    identifiers: &IdentifierMap,
    oracle: &dyn Oracle,
    policy: UnresolvedPolicy,
) -> Result<Vec<ResolvedBrowser>> {
    let mut browsers = Vec::with_capacity(queries.len());

    for query in queries {
        let releases = oracle.resolve(query.as_str())?;

        match resolve_one(query, &releases, identifiers) {
            Ok(browser) => {
                debug!(
                    query = query.as_str(),
                    name = browser.name.as_deref().unwrap_or_default(),
                    minimum_version = %browser.minimum_version,
                    "resolved browser"
                );
                browsers.push(browser);
            }
            Err(miss) => match policy {
                UnresolvedPolicy::Fail => return Err(unresolved(query.as_str(), miss.to_string())),
                UnresolvedPolicy::Drop => {
                    warn!(query = query.as_str(), reason = %miss, "dropping unresolved browser");
                }
                UnresolvedPolicy::KeepUndefined => {
                    warn!(
                        query = query.as_str(),
                        reason = %miss,
                        "keeping unresolved browser without a name"
                    );
                    browsers.push(ResolvedBrowser::unnamed(query.threshold()));
                }
            },
        }
    }

    Ok(browsers)
}
