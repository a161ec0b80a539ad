//! Compatibility-data lookups
//!
//! The generator never evaluates version ranges itself. It asks an [`Oracle`]
//! which releases match a query and only looks at the browser code of the
//! first match.

use crate::error::Result;

mod caniuse;

pub use caniuse::BrowserslistOracle;

/// Resolves a query to the matching releases
///
/// Each release is `"<code> <version>"`, e.g. `"chrome 109"`. An empty list
/// means nothing matched; errors are reserved for queries the data source
/// rejects outright.
pub trait Oracle {
    fn resolve(&self, query: &str) -> Result<Vec<String>>;
}

impl<O: Oracle + ?Sized> Oracle for &O {
    fn resolve(&self, query: &str) -> Result<Vec<String>> {
        (**self).resolve(query)
    }
}

/// Browser code of a release string (`"ios_saf 13.1"` -> `"ios_saf"`)
pub fn leading_code(release: &str) -> Option<&str> {
    release.split_whitespace().next()
}
