//! Output persistence
//!
//! The artifact is written to a temporary file next to the target and then
//! renamed over it, so the previous version stays intact until the new one
//! is complete. The replacement keeps the target's permissions; a new file
//! gets the usual umask-derived mode rather than the owner-only temp mode.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::Builder;
use tracing::debug;

use crate::error::Result;
use crate::error::fs::write_failed;

/// Replace `path` with `contents`, creating parent directories as needed
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let shown = path.display().to_string();
    let fail = |e: &dyn std::fmt::Display| write_failed(shown.clone(), e.to_string());

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| fail(&e))?;

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut file = builder.tempfile_in(dir).map_err(|e| fail(&e))?;
    file.write_all(contents.as_bytes()).map_err(|e| fail(&e))?;
    file.as_file().sync_all().map_err(|e| fail(&e))?;

    if let Ok(existing) = fs::metadata(path) {
        file.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| fail(&e))?;
    }
    file.persist(path).map_err(|e| fail(&e.error))?;

    debug!(path = %shown, bytes = contents.len(), "wrote output");
    Ok(())
}
