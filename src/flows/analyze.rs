//! Analysis flow - aggregate codebase metrics
//!
//! An independent full-tree walk (it never reuses a flatten scan) that
//! computes language mix, size statistics, the largest file, and total
//! lines of code. Always runs with the fixed default exclusion set.

use colored::Colorize;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::core::config::DEFAULT_EXCLUDES;
use crate::core::error::{FlattenError, Result};
use crate::core::language::{is_code_extension, language_name};
use crate::core::model::{CodebaseAnalysis, LanguageShare, LargestFile};
use crate::core::paths::{extension_of, make_relative};
use crate::walk::filter::should_exclude;
use crate::walk::scanner::NO_EXTENSION;
use crate::walk::MAX_SCAN_DEPTH;

/// Files at or above this size are excluded from line counting
const MAX_LOC_FILE_SIZE: u64 = 1024 * 1024;

/// Analyze the codebase rooted at `root`.
///
/// Per-entry walk and read errors are swallowed; only a missing or
/// unreadable root is fatal.
pub fn analyze(root: &Path) -> Result<CodebaseAnalysis> {
    if !root.is_dir() {
        return Err(FlattenError::RootNotFound(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(|source| FlattenError::RootNotReadable {
        path: root.to_path_buf(),
        source,
    })?;

    let excludes: Vec<String> = DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect();
    let mut analysis = CodebaseAnalysis::default();

    let walker = WalkDir::new(root)
        .max_depth(MAX_SCAN_DEPTH)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || make_relative(entry.path(), root)
                    .map(|rel| !should_exclude(&rel, &excludes))
                    .unwrap_or(false)
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        if entry.depth() == 0 {
            continue;
        }

        if entry.file_type().is_dir() {
            analysis.directories += 1;
            continue;
        }

        let size = match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(_) => continue,
        };

        let extension = extension_of(entry.path());
        let type_key = extension
            .clone()
            .unwrap_or_else(|| NO_EXTENSION.to_string());
        let language = language_name(extension.as_deref());

        analysis.files.total += 1;
        analysis.total_size += size;
        *analysis.file_types.entry(type_key).or_insert(0) += 1;
        *analysis.files.by_language.entry(language).or_insert(0) += 1;

        // strictly-greater comparison keeps the first file seen on ties
        if size > analysis.largest_file.size || analysis.files.total == 1 {
            analysis.largest_file = LargestFile {
                name: make_relative(entry.path(), root)
                    .unwrap_or_else(|| entry.path().to_string_lossy().to_string()),
                size,
            };
        }

        if is_code_extension(extension.as_deref()) && size < MAX_LOC_FILE_SIZE {
            if let Ok(content) = fs::read_to_string(entry.path()) {
                analysis.lines_of_code += content.lines().count();
            }
        }
    }

    if analysis.files.total > 0 {
        analysis.average_file_size = analysis.total_size / analysis.files.total as u64;
    }
    analysis.languages = language_shares(&analysis);

    Ok(analysis)
}

/// Per-language shares with independently rounded percentages.
///
/// Rounding each entry on its own means the column may not sum to exactly
/// 100; that is expected.
fn language_shares(analysis: &CodebaseAnalysis) -> Vec<LanguageShare> {
    let total = analysis.files.total;
    let mut shares: Vec<LanguageShare> = analysis
        .files
        .by_language
        .iter()
        .map(|(name, &count)| LanguageShare {
            name: name.clone(),
            files: count,
            percentage: if total == 0 {
                0
            } else {
                (count as f64 / total as f64 * 100.0).round() as u64
            },
        })
        .collect();

    shares.sort_by(|a, b| b.files.cmp(&a.files).then_with(|| a.name.cmp(&b.name)));
    shares
}

/// Run the analyze command, printing JSON or a human report
pub fn run_analyze(root: &Path, as_json: bool) -> anyhow::Result<()> {
    let analysis = analyze(root)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_report(&analysis);
    }
    Ok(())
}

fn print_report(analysis: &CodebaseAnalysis) {
    println!("{}", "Codebase Analysis".bold());
    println!("{}", "─".repeat(40));
    println!("Files:          {}", analysis.files.total);
    println!("Directories:    {}", analysis.directories);
    println!("Total size:     {} bytes", analysis.total_size);
    println!("Average size:   {} bytes", analysis.average_file_size);
    if !analysis.largest_file.name.is_empty() {
        println!(
            "Largest file:   {} ({} bytes)",
            analysis.largest_file.name, analysis.largest_file.size
        );
    }
    println!("Lines of code:  {}", analysis.lines_of_code);

    if !analysis.languages.is_empty() {
        println!();
        println!("{}", "Languages".bold());
        println!("{}", "─".repeat(40));
        for share in &analysis.languages {
            println!(
                "  {:<14} {:>4} {}  {:>3}%",
                share.name,
                share.files,
                if share.files == 1 { "file " } else { "files" },
                share.percentage
            );
        }
    }
}
