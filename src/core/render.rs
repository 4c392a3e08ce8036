//! Output serialization for flatten results
//!
//! Three independent renderers (XML, JSON, Markdown) over the same
//! `FlattenResult`; the chosen format decides which one runs. Output depends
//! only on the result value, so serializing the same result twice produces
//! byte-identical text.

use crate::core::config::OutputFormat;
use crate::core::model::{FlattenResult, ProcessedFile};

/// Serializer for flatten results
pub struct Serializer {
    format: OutputFormat,
}

impl Serializer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Serialize a flatten result to the configured format
    pub fn serialize(&self, result: &FlattenResult) -> String {
        match self.format {
            OutputFormat::Xml => render_xml(result),
            OutputFormat::Json => render_json(result),
            OutputFormat::Markdown => render_markdown(result),
        }
    }
}

/// Escape text for placement outside CDATA sections
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn push_element(out: &mut String, indent: &str, tag: &str, value: &str) {
    out.push_str(&format!(
        "{}<{}>{}</{}>\n",
        indent,
        tag,
        escape_xml(value),
        tag
    ));
}

// A literal "]]>" inside the wrapped value breaks well-formedness; the
// sequence is not split or escaped here. Known limitation.
fn push_cdata(out: &mut String, indent: &str, tag: &str, value: &str) {
    out.push_str(&format!("{}<{}><![CDATA[{}]]></{}>\n", indent, tag, value, tag));
}

fn render_xml(result: &FlattenResult) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<codebase>\n");

    out.push_str("  <metadata>\n");
    push_element(
        &mut out,
        "    ",
        "processedAt",
        &result.metadata.processed_at.to_rfc3339(),
    );
    push_element(
        &mut out,
        "    ",
        "totalFiles",
        &result.metadata.total_files.to_string(),
    );
    push_element(
        &mut out,
        "    ",
        "totalSize",
        &result.metadata.total_size.to_string(),
    );

    let config = &result.metadata.config;
    out.push_str("    <config>\n");
    push_element(
        &mut out,
        "      ",
        "includeComments",
        &config.include_comments.to_string(),
    );
    push_element(
        &mut out,
        "      ",
        "minifyOutput",
        &config.minify_output.to_string(),
    );
    push_element(&mut out, "      ", "treeOnly", &config.tree_only.to_string());
    push_element(&mut out, "      ", "outputFormat", config.output_format.as_str());
    out.push_str("      <includePatterns>\n");
    for pattern in &config.include_patterns {
        push_element(&mut out, "        ", "pattern", pattern);
    }
    out.push_str("      </includePatterns>\n");
    out.push_str("      <excludePatterns>\n");
    for pattern in &config.exclude_patterns {
        push_element(&mut out, "        ", "pattern", pattern);
    }
    out.push_str("      </excludePatterns>\n");
    out.push_str("    </config>\n");
    out.push_str("  </metadata>\n");

    push_cdata(&mut out, "  ", "directoryTree", &result.directory_tree);

    out.push_str("  <files>\n");
    for file in &result.files {
        out.push_str("    <file>\n");
        push_element(&mut out, "      ", "path", &file.path.to_string_lossy());
        push_element(&mut out, "      ", "relativePath", &file.relative_path);
        push_element(&mut out, "      ", "language", &file.language);
        push_element(&mut out, "      ", "size", &file.size.to_string());
        push_element(&mut out, "      ", "lines", &file.line_count.to_string());
        push_element(
            &mut out,
            "      ",
            "lastModified",
            &file.last_modified.to_rfc3339(),
        );
        if !file.content.is_empty() {
            push_cdata(&mut out, "      ", "content", &file.content);
        }
        out.push_str("    </file>\n");
    }
    out.push_str("  </files>\n");

    out.push_str("</codebase>\n");
    out
}

fn render_json(result: &FlattenResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
}

fn render_markdown(result: &FlattenResult) -> String {
    let mut out = String::new();
    out.push_str("# Codebase Flattened Output\n\n");

    out.push_str("## Metadata\n\n");
    out.push_str(&format!(
        "- Processed at: {}\n",
        result.metadata.processed_at.to_rfc3339()
    ));
    out.push_str(&format!("- Total files: {}\n", result.metadata.total_files));
    out.push_str(&format!(
        "- Total size: {} bytes\n",
        result.metadata.total_size
    ));
    out.push_str(&format!(
        "- Format: {}\n",
        result.metadata.config.output_format.as_str()
    ));
    out.push('\n');

    out.push_str("## Directory Structure\n\n");
    out.push_str("```\n");
    out.push_str(&result.directory_tree);
    if !result.directory_tree.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("```\n\n");

    out.push_str("## Files\n");
    for file in &result.files {
        render_file_md(&mut out, file);
    }

    out
}

fn render_file_md(out: &mut String, file: &ProcessedFile) {
    out.push('\n');
    out.push_str(&format!("### {}\n\n", file.relative_path));
    out.push_str(&format!("- Language: {}\n", file.language));
    out.push_str(&format!("- Size: {} bytes\n", file.size));
    out.push_str(&format!("- Lines: {}\n", file.line_count));

    if !file.content.is_empty() {
        out.push('\n');
        out.push_str(&format!("```{}\n", file.language.to_lowercase()));
        out.push_str(&file.content);
        if !file.content.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("```\n");
    }
}
