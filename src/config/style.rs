//! Style rules loading

use std::path::Path;

use tracing::debug;

use super::read_config_file;
use crate::error::Result;
use crate::error::config::parse_failed;
use crate::format::StyleConfig;

/// Load style rules from `path`
///
/// There is no fallback: a missing or unreadable file fails the run.
pub fn load_style(path: &Path) -> Result<StyleConfig> {
    let content = read_config_file(path)?;
    let style = StyleConfig::from_json(&content)
        .map_err(|e| parse_failed(path.display().to_string(), e.to_string()))?;
    debug!(path = %path.display(), ?style, "loaded style rules");
    Ok(style)
}
