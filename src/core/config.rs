//! Flatten run configuration
//!
//! A `FlattenerConfig` is built once per invocation and passed by shared
//! reference through every component; nothing mutates it after construction.

use serde::{Deserialize, Serialize};

/// Output format for serialized flatten results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Xml,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xml" => Ok(OutputFormat::Xml),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl OutputFormat {
    /// Canonical lower-case name, matching the serialized representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Xml => "xml",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

/// Immutable configuration for one flatten run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenerConfig {
    /// Keep comments in file content (stripped when false)
    pub include_comments: bool,

    /// Collapse whitespace in file content
    pub minify_output: bool,

    /// Skip file contents entirely; only structure is emitted
    pub tree_only: bool,

    /// Serialization format for the result
    pub output_format: OutputFormat,

    /// Advisory include patterns. Echoed in metadata but never restrict
    /// the walk: every discovered file is a candidate unless excluded.
    pub include_patterns: Vec<String>,

    /// Exclusion patterns applied to root-relative paths
    pub exclude_patterns: Vec<String>,
}

impl Default for FlattenerConfig {
    fn default() -> Self {
        Self {
            include_comments: true,
            minify_output: false,
            tree_only: false,
            output_format: OutputFormat::default(),
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
        }
    }
}

/// Directories no flatten or analysis run ever wants embedded
pub const DEFAULT_EXCLUDES: &[&str] = &["node_modules", ".git", "dist", "build"];

impl FlattenerConfig {
    /// Config with the default exclusion set applied
    #[allow(dead_code)]
    pub fn with_default_excludes() -> Self {
        Self {
            exclude_patterns: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }
}
