//! Path utilities.

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a tilde are returned unchanged.
///
/// # Example
///
/// ```
/// use gradus_core::util::paths::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/etc/gradus"), PathBuf::from("/etc/gradus"));
/// ```
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Check whether `path` has one of the given extensions (case-insensitive).
///
/// Extensions are given without the leading dot.
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}
