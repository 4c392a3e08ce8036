//! Walk module - Filesystem traversal
//!
//! Provides:
//! - filter: glob-ish exclusion matching over root-relative paths
//! - scanner: bounded pre-order directory scan producing a FileStructure
//! - tree: box-drawing directory tree rendering
//!
//! The scanner and tree renderer share one listing order (directories first,
//! then case-insensitive alphabetical) so the emitted file list and the
//! rendered tree describe the same traversal.

pub mod filter;
pub mod scanner;
pub mod tree;

use std::io;
use std::path::{Path, PathBuf};

/// Maximum depth any traversal descends below the scan root. Bounds
/// pathological nesting and symlink cycles.
pub const MAX_SCAN_DEPTH: usize = 10;

/// One directory entry in traversal order
pub(crate) struct ListedEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// List a directory sorted directories-first, then alphabetically
/// (case-insensitive). Entries whose type cannot be determined are dropped.
pub(crate) fn sorted_entries(dir: &Path) -> io::Result<Vec<ListedEntry>> {
    let mut entries: Vec<ListedEntry> = std::fs::read_dir(dir)?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let file_type = entry.file_type().ok()?;
            Some(ListedEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                path: entry.path(),
                is_dir: file_type.is_dir(),
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    Ok(entries)
}
