//! Directory scanning
//!
//! Depth-first pre-order walk producing the aggregate `FileStructure`.
//! The scanner decides inclusion and collects counts; it never reads file
//! contents. Unreadable directories and unstat-able files are warn-logged,
//! recorded as skips, and otherwise omitted from the counts — the walk
//! always continues.

use log::warn;
use std::path::Path;

use crate::core::config::FlattenerConfig;
use crate::core::model::{FileStructure, SkipRecord};
use crate::core::paths::{extension_of, make_relative};
use crate::walk::filter::should_exclude;
use crate::walk::{sorted_entries, MAX_SCAN_DEPTH};

/// Key used in the extension histogram for files without an extension
pub const NO_EXTENSION: &str = "no-extension";

/// Scan a directory tree, applying the config's exclusion patterns.
///
/// Directories deeper than [`MAX_SCAN_DEPTH`] are listed but not descended.
pub fn scan(root: &Path, config: &FlattenerConfig) -> FileStructure {
    let mut structure = FileStructure::default();
    scan_dir(root, root, 0, config, &mut structure);
    structure
}

fn scan_dir(
    root: &Path,
    dir: &Path,
    depth: usize,
    config: &FlattenerConfig,
    structure: &mut FileStructure,
) {
    if depth >= MAX_SCAN_DEPTH {
        return;
    }

    let entries = match sorted_entries(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("skipping unreadable directory {}: {}", dir.display(), err);
            structure
                .skipped
                .push(SkipRecord::new(dir, err.to_string()));
            return;
        }
    };

    for entry in entries {
        let relative = match make_relative(&entry.path, root) {
            Some(rel) => rel,
            None => continue,
        };

        if should_exclude(&relative, &config.exclude_patterns) {
            if !entry.is_dir {
                structure.excluded_files.push(entry.path);
            }
            continue;
        }

        if entry.is_dir {
            structure.total_directories += 1;
            scan_dir(root, &entry.path, depth + 1, config, structure);
        } else {
            match std::fs::metadata(&entry.path) {
                Ok(metadata) => {
                    let key = extension_of(&entry.path)
                        .unwrap_or_else(|| NO_EXTENSION.to_string());
                    *structure.file_types.entry(key).or_insert(0) += 1;
                    structure.total_size += metadata.len();
                    structure.included_files.push(entry.path);
                    structure.total_files += 1;
                }
                Err(err) => {
                    warn!("skipping unreadable file {}: {}", entry.path.display(), err);
                    structure
                        .skipped
                        .push(SkipRecord::new(entry.path, err.to_string()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn config_with_excludes(patterns: &[&str]) -> FlattenerConfig {
        FlattenerConfig {
            exclude_patterns: patterns.iter().map(|s| s.to_string()).collect(),
            ..FlattenerConfig::default()
        }
    }

    #[test]
    fn test_total_files_matches_included_list() {
        let temp = tempfile::tempdir().unwrap();
        write_file(&temp.path().join("a.rs"), "fn a() {}");
        write_file(&temp.path().join("sub/b.rs"), "fn b() {}");
        write_file(&temp.path().join("sub/deep/c.txt"), "c");

        let structure = scan(temp.path(), &FlattenerConfig::default());

        assert_eq!(structure.total_files, structure.included_files.len());
        assert_eq!(structure.total_files, 3);
        assert_eq!(structure.total_directories, 2);
    }

    #[test]
    fn test_exclusion_skips_subtree_keeps_siblings() {
        let temp = tempfile::tempdir().unwrap();
        write_file(&temp.path().join("node_modules/pkg/index.js"), "x");
        write_file(&temp.path().join("src/index.ts"), "y");

        let structure = scan(temp.path(), &config_with_excludes(&["node_modules/**"]));

        let included: Vec<String> = structure
            .included_files
            .iter()
            .map(|p| make_relative(p, temp.path()).unwrap())
            .collect();

        assert_eq!(included, vec!["src/index.ts"]);
        assert_eq!(structure.file_types.get("ts"), Some(&1));
        assert!(structure.file_types.get("js").is_none());
    }

    #[test]
    fn test_excluded_files_are_recorded() {
        let temp = tempfile::tempdir().unwrap();
        write_file(&temp.path().join("README.md"), "hi");
        write_file(&temp.path().join("main.rs"), "fn main() {}");

        let structure = scan(temp.path(), &config_with_excludes(&["*.md"]));

        assert_eq!(structure.total_files, 1);
        assert_eq!(structure.excluded_files.len(), 1);
        assert!(structure.excluded_files[0].ends_with("README.md"));
    }

    #[test]
    fn test_file_types_histogram() {
        let temp = tempfile::tempdir().unwrap();
        write_file(&temp.path().join("a.TS"), "a");
        write_file(&temp.path().join("b.ts"), "b");
        write_file(&temp.path().join("Makefile"), "all:");

        let structure = scan(temp.path(), &FlattenerConfig::default());

        assert_eq!(structure.file_types.get("ts"), Some(&2));
        assert_eq!(structure.file_types.get(NO_EXTENSION), Some(&1));
    }

    #[test]
    fn test_depth_bound_stops_descent() {
        let temp = tempfile::tempdir().unwrap();

        // chain 20 directories deep with a marker file at every level
        let mut dir = PathBuf::from(temp.path());
        for level in 1..=20 {
            dir = dir.join(format!("d{}", level));
            write_file(&dir.join("marker.txt"), "m");
        }

        let structure = scan(temp.path(), &FlattenerConfig::default());

        for path in &structure.included_files {
            let rel = make_relative(path, temp.path()).unwrap();
            let depth = rel.matches('/').count(); // directory components above the file
            assert!(depth <= MAX_SCAN_DEPTH, "file too deep: {}", rel);
        }
        // markers live at depths 2..=21; only those within the bound survive
        assert_eq!(structure.included_files.len(), 9);
    }

    #[test]
    fn test_sums_file_sizes() {
        let temp = tempfile::tempdir().unwrap();
        write_file(&temp.path().join("a.txt"), "12345");
        write_file(&temp.path().join("b.txt"), "123");

        let structure = scan(temp.path(), &FlattenerConfig::default());
        assert_eq!(structure.total_size, 8);
    }
}
