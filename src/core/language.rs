//! Language classification by file extension
//!
//! Maps extensions to display-oriented language names and defines the set of
//! extensions whose content is worth embedding in flattened output. This is a
//! presentation-level classification, not a compiler-grade one.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Extensions eligible for content reading, transformation and LOC counting
static CODE_EXTENSIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("js", "JavaScript");
    map.insert("jsx", "JavaScript");
    map.insert("mjs", "JavaScript");
    map.insert("ts", "TypeScript");
    map.insert("tsx", "TypeScript");
    map.insert("py", "Python");
    map.insert("rb", "Ruby");
    map.insert("java", "Java");
    map.insert("c", "C");
    map.insert("h", "C");
    map.insert("cpp", "C++");
    map.insert("hpp", "C++");
    map.insert("cc", "C++");
    map.insert("cs", "C#");
    map.insert("go", "Go");
    map.insert("rs", "Rust");
    map.insert("php", "PHP");
    map.insert("swift", "Swift");
    map.insert("kt", "Kotlin");
    map.insert("scala", "Scala");
    map.insert("sh", "Shell");
    map.insert("bash", "Shell");
    map.insert("html", "HTML");
    map.insert("htm", "HTML");
    map.insert("css", "CSS");
    map.insert("scss", "SCSS");
    map.insert("sass", "Sass");
    map.insert("less", "Less");
    map.insert("vue", "Vue");
    map.insert("svelte", "Svelte");
    map.insert("sql", "SQL");
    map.insert("json", "JSON");
    map.insert("yml", "YAML");
    map.insert("yaml", "YAML");
    map.insert("toml", "TOML");
    map.insert("xml", "XML");
    map.insert("md", "Markdown");
    map.insert("txt", "Text");
    map
});

/// Whether a (lower-cased) extension belongs to the recognized code-file set
pub fn is_code_extension(extension: Option<&str>) -> bool {
    extension
        .map(|ext| CODE_EXTENSIONS.contains_key(ext))
        .unwrap_or(false)
}

/// Display language name for a (lower-cased) extension.
///
/// Unrecognized extensions fall back to the upper-cased extension itself,
/// and files without an extension report "Unknown".
pub fn language_name(extension: Option<&str>) -> String {
    match extension {
        Some(ext) => CODE_EXTENSIONS
            .get(ext)
            .map(|name| name.to_string())
            .unwrap_or_else(|| ext.to_uppercase()),
        None => "Unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_code_extension() {
        assert!(is_code_extension(Some("ts")));
        assert!(is_code_extension(Some("py")));
        assert!(!is_code_extension(Some("png")));
        assert!(!is_code_extension(None));
    }

    #[test]
    fn test_language_name_known() {
        assert_eq!(language_name(Some("ts")), "TypeScript");
        assert_eq!(language_name(Some("rs")), "Rust");
    }

    #[test]
    fn test_language_name_fallbacks() {
        assert_eq!(language_name(Some("xyz")), "XYZ");
        assert_eq!(language_name(None), "Unknown");
    }
}
