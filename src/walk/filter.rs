//! Exclusion pattern matching
//!
//! Patterns are glob-ish, not a full glob dialect. A pattern containing `*`
//! is translated to an anchored regex (`**` crosses separators, `*` does
//! not). A pattern with no wildcard excludes any path that *contains* it as
//! a substring: `node_modules` excludes `foo/node_modules/bar`, and `build`
//! also excludes `my-build-tool/`. That permissiveness is intentional and
//! relied upon by the default exclusion set.
//!
//! Matching is case-insensitive and always runs against the path relative
//! to the scan root, normalized to forward slashes.

use crate::core::paths::normalize_for_match;
use regex::Regex;

/// Whether `relative_path` is excluded by any of the patterns.
///
/// Pure and deterministic; evaluation short-circuits on the first matching
/// pattern. A pattern that fails to translate matches nothing — malformed
/// input never raises.
pub fn should_exclude(relative_path: &str, exclude_patterns: &[String]) -> bool {
    let path = normalize_for_match(relative_path);

    exclude_patterns
        .iter()
        .any(|pattern| matches_pattern(&path, &normalize_for_match(pattern)))
}

fn matches_pattern(path: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }

    if pattern.contains('*') {
        match glob_to_regex(pattern) {
            Some(re) => re.is_match(path),
            None => false,
        }
    } else {
        path.contains(pattern)
    }
}

/// Translate a glob-ish pattern into an anchored regex.
///
/// Everything is regex-escaped first, then `**` becomes `.*` and any
/// remaining `*` becomes `[^/]*`; the whole path must match.
fn glob_to_regex(pattern: &str) -> Option<Regex> {
    let escaped = regex::escape(pattern);
    let translated = escaped.replace(r"\*\*", ".*").replace(r"\*", "[^/]*");
    Regex::new(&format!("^{}$", translated)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_patterns_never_excludes() {
        assert!(!should_exclude("src/main.rs", &[]));
    }

    #[test]
    fn test_double_star_crosses_separators() {
        let pats = patterns(&["node_modules/**"]);
        assert!(should_exclude("node_modules/pkg/index.js", &pats));
        assert!(should_exclude("node_modules/x.js", &pats));
        assert!(!should_exclude("src/index.ts", &pats));
    }

    #[test]
    fn test_single_star_stays_within_segment() {
        let pats = patterns(&["*.md"]);
        assert!(should_exclude("README.md", &pats));
        assert!(!should_exclude("docs/guide.md", &pats));
        assert!(!should_exclude("readme.txt", &pats));
    }

    #[test]
    fn test_bare_pattern_matches_substring() {
        let pats = patterns(&["node_modules"]);
        assert!(should_exclude("node_modules", &pats));
        assert!(should_exclude("foo/node_modules/bar.js", &pats));
        // the documented permissive quirk
        assert!(should_exclude("my-build-tool/x", &patterns(&["build"])));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let pats = patterns(&["Node_Modules"]);
        assert!(should_exclude("NODE_MODULES/pkg.js", &pats));
        assert!(should_exclude("node_modules/pkg.js", &pats));
    }

    #[test]
    fn test_backslash_separators_are_normalized() {
        let pats = patterns(&["node_modules/**"]);
        assert!(should_exclude("node_modules\\pkg\\index.js", &pats));
    }

    #[test]
    fn test_first_match_short_circuits() {
        let pats = patterns(&["node_modules", "src"]);
        assert!(should_exclude("src/lib.rs", &pats));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        // dots in patterns must not act as regex wildcards
        let pats = patterns(&["*.md"]);
        assert!(!should_exclude("READMEXmd", &pats));

        let pats = patterns(&["a+b/**"]);
        assert!(should_exclude("a+b/file.txt", &pats));
        assert!(!should_exclude("ab/file.txt", &pats));
    }

    #[test]
    fn test_malformed_pattern_never_panics() {
        // nothing a caller passes should be able to raise
        let pats = patterns(&["[invalid", "(((", "**"]);
        let _ = should_exclude("src/main.rs", &pats);
    }

    #[test]
    fn test_double_star_alone_matches_everything() {
        let pats = patterns(&["**"]);
        assert!(should_exclude("anything/at/all.rs", &pats));
    }
}
