//! Result model for flatten and analyze runs
//!
//! Every entity here is built fresh per invocation and never mutated after
//! construction: the walk accumulates append-only, then hands the finished
//! value to the serializer. Field names serialize in camelCase so the JSON
//! output format is a direct structural dump of these types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::core::config::FlattenerConfig;

/// A path the walk gave up on, and why.
///
/// Skips are deliberate best-effort policy, not defects: an unreadable
/// directory or file reduces the counts and shows up here, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipRecord {
    pub path: PathBuf,
    pub reason: String,
}

impl SkipRecord {
    pub fn new(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Aggregate shape of a scanned directory tree
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStructure {
    /// Number of included files; always equals `included_files.len()`
    pub total_files: usize,

    /// Number of included (non-excluded, traversed) directories
    pub total_directories: usize,

    /// Sum of included file sizes in bytes
    pub total_size: u64,

    /// Histogram of lower-cased extensions ("no-extension" when absent)
    pub file_types: BTreeMap<String, usize>,

    /// Absolute paths of included files, in traversal order
    pub included_files: Vec<PathBuf>,

    /// Absolute paths rejected by an exclusion pattern
    pub excluded_files: Vec<PathBuf>,

    /// Entries the walk could not read and therefore omitted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkipRecord>,
}

/// One file after the read/transform phase
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedFile {
    /// Absolute path on disk
    pub path: PathBuf,

    /// Path relative to the scan root, '/' separated
    pub relative_path: String,

    /// Transformed content; empty for tree-only runs and non-code files
    pub content: String,

    /// Size in bytes as reported by the filesystem
    pub size: u64,

    /// Display language name derived from the extension
    pub language: String,

    /// Line count of `content`; 1 even when the content is empty
    pub line_count: usize,

    /// Filesystem modification time
    pub last_modified: DateTime<Utc>,
}

/// Run-level metadata echoed into every serialized output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunMetadata {
    pub processed_at: DateTime<Utc>,
    pub total_files: usize,
    /// Sum of processed file sizes; may fall short of the scanner's total
    /// when individual files failed to read
    pub total_size: u64,
    pub config: FlattenerConfig,
}

/// The complete product of one flatten run; sole input to the serializer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenResult {
    pub metadata: RunMetadata,

    /// Processed files in traversal order (not guaranteed sorted)
    pub files: Vec<ProcessedFile>,

    /// Pre-rendered directory tree
    pub directory_tree: String,

    /// Scan skips plus per-file read failures, in encounter order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkipRecord>,
}

/// File counts section of a codebase analysis
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileCounts {
    pub total: usize,
    pub by_language: BTreeMap<String, usize>,
}

/// Largest file seen during analysis (first seen wins ties)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LargestFile {
    /// Root-relative path of the file
    pub name: String,
    pub size: u64,
}

/// Per-language share of the analyzed files
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageShare {
    pub name: String,
    pub files: usize,
    /// Rounded independently per language; the column may not sum to 100
    pub percentage: u64,
}

/// Aggregate metrics from an independent full-tree walk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodebaseAnalysis {
    pub files: FileCounts,
    pub directories: usize,
    pub total_size: u64,
    pub average_file_size: u64,
    pub largest_file: LargestFile,
    pub file_types: BTreeMap<String, usize>,
    pub languages: Vec<LanguageShare>,
    pub lines_of_code: usize,
}
