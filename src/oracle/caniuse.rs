//! Oracle backed by the `browserslist-rs` crate and its bundled caniuse data

use browserslist::{Opts, resolve};

use super::Oracle;
use crate::error::Result;
use crate::error::oracle::failed;

/// Resolves queries against the caniuse data compiled into `browserslist-rs`
#[derive(Debug, Default)]
pub struct BrowserslistOracle {
    opts: Opts,
}

impl BrowserslistOracle {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Oracle for BrowserslistOracle {
    fn resolve(&self, query: &str) -> Result<Vec<String>> {
        let distribs = resolve(&[query], &self.opts).map_err(|e| failed(query, e.to_string()))?;
        Ok(distribs
            .iter()
            .map(|d| format!("{} {}", d.name(), d.version()))
            .collect())
    }
}
