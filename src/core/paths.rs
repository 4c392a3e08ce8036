//! Path normalization utilities
//!
//! Ensures all paths are normalized to use '/' as separator and are relative to root.
//! Exclusion matching additionally lower-cases paths so patterns behave the same
//! on case-insensitive filesystems.

use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(|p| normalize_path(p))
}

/// Normalize a path string for pattern matching: forward slashes, lower case
pub fn normalize_for_match(path: &str) -> String {
    path.replace('\\', "/").to_lowercase()
}

/// Lower-cased extension of a file name, or `None` when there is none
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}
