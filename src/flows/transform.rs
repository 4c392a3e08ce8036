//! Content transformation
//!
//! Two optional passes over file content, in fixed order: comment stripping,
//! then whitespace minification.
//!
//! Comment stripping is a lexical, regex-based approximation — a per-extension
//! table of substitutions, not a parser. It will happily strip a `//` or `#`
//! that occurs inside a string literal. That imprecision is an accepted
//! trade-off kept for predictability; do not "fix" it with real parsing
//! without treating the change as behavioral.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::core::config::FlattenerConfig;

static C_BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static C_LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)//.*$").unwrap());
static HASH_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)#.*$").unwrap());
static MARKUP_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Comment-strip rules per extension, applied in order
static COMMENT_RULES: Lazy<HashMap<&'static str, Vec<&'static Regex>>> = Lazy::new(|| {
    let c_family: Vec<&'static Regex> = vec![&C_BLOCK_COMMENT, &C_LINE_COMMENT];
    let hash_family: Vec<&'static Regex> = vec![&HASH_COMMENT];
    let markup_family: Vec<&'static Regex> = vec![&MARKUP_COMMENT];

    let mut map: HashMap<&'static str, Vec<&'static Regex>> = HashMap::new();
    for ext in [
        "js", "jsx", "mjs", "ts", "tsx", "java", "c", "h", "cpp", "hpp", "cc", "cs", "go", "rs",
        "php", "swift", "kt", "scala",
    ] {
        map.insert(ext, c_family.clone());
    }
    for ext in ["py", "rb", "sh", "bash", "yml", "yaml", "toml"] {
        map.insert(ext, hash_family.clone());
    }
    for ext in ["html", "htm", "xml", "vue", "svelte", "md"] {
        map.insert(ext, markup_family.clone());
    }
    // block comments only; '//' is meaningful in CSS values
    map.insert("css", vec![&C_BLOCK_COMMENT]);
    map.insert("scss", c_family.clone());
    map.insert("less", c_family);
    map
});

/// Apply the configured transforms to file content.
///
/// Comment stripping runs first (when `include_comments` is false and the
/// extension has rules), then minification (when `minify_output` is true).
pub fn transform(content: &str, extension: Option<&str>, config: &FlattenerConfig) -> String {
    let mut result = content.to_string();

    if !config.include_comments {
        if let Some(rules) = extension.and_then(|ext| COMMENT_RULES.get(ext)) {
            for rule in rules {
                result = rule.replace_all(&result, "").into_owned();
            }
        }
    }

    if config.minify_output {
        result = minify(&result);
    }

    result
}

/// Strip leading/trailing whitespace per line and collapse runs of three
/// or more newlines down to exactly two.
fn minify(content: &str) -> String {
    let trimmed = content
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    BLANK_RUNS.replace_all(&trimmed, "\n\n").into_owned()
}
