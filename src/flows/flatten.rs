//! Flatten flow - turn a directory tree into one serializable result
//!
//! Orchestrates the scanner, the content transformer and the tree renderer:
//! scan once, read each included file through the transform pipeline, then
//! assemble an immutable `FlattenResult` for the serializer.

use chrono::{DateTime, Utc};
use log::warn;
use std::fs;
use std::path::Path;

use crate::core::config::FlattenerConfig;
use crate::core::error::{FlattenError, Result};
use crate::core::language::{is_code_extension, language_name};
use crate::core::model::{FlattenResult, ProcessedFile, RunMetadata, SkipRecord};
use crate::core::paths::{extension_of, make_relative};
use crate::flows::transform::transform;
use crate::walk::{scanner, tree, MAX_SCAN_DEPTH};

/// Flatten `root` according to `config`.
///
/// The only fatal condition is the root directory missing or unreadable;
/// every per-entry failure degrades into a skip record.
pub fn flatten(root: &Path, config: &FlattenerConfig) -> Result<FlattenResult> {
    flatten_with_progress(root, config, |_| {})
}

/// Like [`flatten`], invoking `on_progress` after each file is processed.
///
/// The callback runs synchronously between file reads; a slow callback
/// stalls the whole walk.
pub fn flatten_with_progress<F>(
    root: &Path,
    config: &FlattenerConfig,
    mut on_progress: F,
) -> Result<FlattenResult>
where
    F: FnMut(&Path),
{
    if !root.is_dir() {
        return Err(FlattenError::RootNotFound(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(|source| FlattenError::RootNotReadable {
        path: root.to_path_buf(),
        source,
    })?;

    let structure = scanner::scan(root, config);
    let mut skipped = structure.skipped.clone();

    let mut files = Vec::with_capacity(structure.included_files.len());
    let mut total_size = 0u64;
    for path in &structure.included_files {
        match process_file(root, path, config) {
            Ok(file) => {
                total_size += file.size;
                on_progress(path);
                files.push(file);
            }
            Err(err) => {
                warn!("skipping unprocessable file {}: {}", path.display(), err);
                skipped.push(SkipRecord::new(path.clone(), err.to_string()));
            }
        }
    }

    let directory_tree = tree::render(root, MAX_SCAN_DEPTH, false);

    Ok(FlattenResult {
        metadata: RunMetadata {
            processed_at: Utc::now(),
            total_files: files.len(),
            total_size,
            config: config.clone(),
        },
        files,
        directory_tree,
        skipped,
    })
}

/// Run the flatten command end to end: flatten, serialize, write.
pub fn run_flatten(
    root: &Path,
    config: &FlattenerConfig,
    output: Option<&Path>,
    tree_depth: usize,
    verbose: bool,
) -> anyhow::Result<()> {
    use anyhow::Context;

    let mut result = if verbose {
        flatten_with_progress(root, config, |path| {
            eprintln!("processed {}", path.display());
        })?
    } else {
        flatten(root, config)?
    };

    if tree_depth != MAX_SCAN_DEPTH {
        result.directory_tree = tree::render(root, tree_depth, false);
    }

    let rendered = crate::core::render::Serializer::new(config.output_format).serialize(&result);

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            if verbose {
                eprintln!("wrote {} bytes to {}", rendered.len(), path.display());
            }
        }
        None => println!("{}", rendered),
    }

    if verbose && !result.skipped.is_empty() {
        eprintln!("skipped {} unreadable entries", result.skipped.len());
    }
    Ok(())
}

fn process_file(
    root: &Path,
    path: &Path,
    config: &FlattenerConfig,
) -> std::io::Result<ProcessedFile> {
    let metadata = fs::metadata(path)?;
    let extension = extension_of(path);

    // tree-only runs and non-code files skip the read entirely
    let content = if config.tree_only || !is_code_extension(extension.as_deref()) {
        String::new()
    } else {
        let raw = fs::read_to_string(path)?;
        transform(&raw, extension.as_deref(), config)
    };

    let last_modified: DateTime<Utc> = metadata
        .modified()
        .map(DateTime::from)
        .unwrap_or_else(|_| Utc::now());

    Ok(ProcessedFile {
        path: path.to_path_buf(),
        relative_path: make_relative(path, root)
            .unwrap_or_else(|| path.to_string_lossy().to_string()),
        line_count: content.split('\n').count(),
        size: metadata.len(),
        language: language_name(extension.as_deref()),
        last_modified,
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let err = flatten(
            Path::new("/definitely/not/here"),
            &FlattenerConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, FlattenError::RootNotFound(_)));
    }

    #[test]
    fn test_scenario_single_included_file() {
        let temp = tempfile::tempdir().unwrap();
        write_file(&temp.path().join("src/index.ts"), "export const n = 1;\n");
        write_file(&temp.path().join("README.md"), "# readme\n");
        write_file(&temp.path().join("node_modules/x.js"), "module.exports = {};\n");

        let mut config = FlattenerConfig::with_default_excludes();
        config.exclude_patterns.push("*.md".to_string());
        config.exclude_patterns.push("node_modules/**".to_string());

        let result = flatten(temp.path(), &config).unwrap();

        assert_eq!(result.metadata.total_files, 1);
        assert_eq!(result.files.len(), 1);
        assert_eq!(result.files[0].relative_path, "src/index.ts");
        assert_eq!(result.files[0].language, "TypeScript");
    }

    #[test]
    fn test_tree_only_leaves_content_empty() {
        let temp = tempfile::tempdir().unwrap();
        write_file(&temp.path().join("a.rs"), "fn main() {}\nfn helper() {}\n");
        write_file(&temp.path().join("b.py"), "print('hi')\n");

        let config = FlattenerConfig {
            tree_only: true,
            ..FlattenerConfig::default()
        };
        let result = flatten(temp.path(), &config).unwrap();

        assert_eq!(result.files.len(), 2);
        for file in &result.files {
            assert!(file.content.is_empty());
            assert_eq!(file.line_count, 1);
        }
    }

    #[test]
    fn test_non_code_file_included_without_content() {
        let temp = tempfile::tempdir().unwrap();
        write_file(&temp.path().join("logo.png"), "not really a png");

        let result = flatten(temp.path(), &FlattenerConfig::default()).unwrap();

        assert_eq!(result.files.len(), 1);
        assert!(result.files[0].content.is_empty());
        assert_eq!(result.files[0].line_count, 1);
        assert_eq!(result.files[0].language, "PNG");
    }

    #[test]
    fn test_unreadable_file_becomes_skip_record() {
        let temp = tempfile::tempdir().unwrap();
        write_file(&temp.path().join("ok.rs"), "fn main() {}\n");
        // invalid UTF-8 under a code extension forces a read failure
        fs::write(temp.path().join("bad.rs"), [0xff, 0xfe, 0x00, 0x01]).unwrap();

        let result = flatten(temp.path(), &FlattenerConfig::default()).unwrap();

        assert_eq!(result.files.len(), 1);
        assert_eq!(result.files[0].relative_path, "ok.rs");
        assert_eq!(result.skipped.len(), 1);
        assert!(result.skipped[0].path.ends_with("bad.rs"));
    }

    #[test]
    fn test_total_size_counts_processed_files_only() {
        let temp = tempfile::tempdir().unwrap();
        write_file(&temp.path().join("a.txt"), "12345");
        fs::write(temp.path().join("bad.rs"), [0xff, 0xfe]).unwrap();

        let result = flatten(temp.path(), &FlattenerConfig::default()).unwrap();
        assert_eq!(result.metadata.total_size, 5);
    }

    #[test]
    fn test_progress_callback_sees_each_file() {
        let temp = tempfile::tempdir().unwrap();
        write_file(&temp.path().join("a.rs"), "1");
        write_file(&temp.path().join("b.rs"), "2");

        let mut seen: Vec<PathBuf> = Vec::new();
        flatten_with_progress(temp.path(), &FlattenerConfig::default(), |path| {
            seen.push(path.to_path_buf())
        })
        .unwrap();

        assert_eq!(seen.len(), 2);
        assert!(seen[0].ends_with("a.rs"));
        assert!(seen[1].ends_with("b.rs"));
    }

    #[test]
    fn test_result_embeds_directory_tree() {
        let temp = tempfile::tempdir().unwrap();
        write_file(&temp.path().join("src/main.rs"), "fn main() {}\n");

        let result = flatten(temp.path(), &FlattenerConfig::default()).unwrap();
        assert!(result.directory_tree.contains("└── src/"));
        assert!(result.directory_tree.contains("main.rs"));
    }
}
