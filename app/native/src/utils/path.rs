//! Path expansion for user-supplied folders.

use std::path::{Path, PathBuf};

/// Expands a leading `~` and trims surrounding whitespace.
///
/// Returns an empty path for blank input.
#[must_use]
pub fn expand(path: &str) -> PathBuf {
    let path = path.trim();
    if path.is_empty() {
        return PathBuf::new();
    }
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Makes `path` absolute so it can be remembered across runs.
///
/// Relative paths are resolved against the current directory. Symlinks are
/// not resolved; if the current directory is unavailable the path is
/// returned unchanged.
#[must_use]
pub fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
