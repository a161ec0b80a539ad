//! Direct-invocation detection
//!
//! Generation only runs on its own when the program was launched as itself,
//! not when its path is reached some other way (a wrapper, a symlink with a
//! different target, an embedding host).

use std::path::Path;

/// `file://` URL of a path
pub fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

/// Whether `module_url` is the `file://` URL of the launched program `argv1`
pub fn is_running_from_cli(module_url: &str, argv1: &str) -> bool {
    !argv1.is_empty()
        && module_url
            .strip_prefix("file://")
            .is_some_and(|path| path == argv1)
}
