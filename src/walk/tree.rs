//! Directory tree rendering
//!
//! Renders an ASCII box-drawing tree of a directory, independent of any
//! scan result. Used standalone for tree-only output and embedded in every
//! flatten result.

use std::path::Path;

use crate::walk::sorted_entries;

/// Render a directory tree rooted at `root`.
///
/// Each level lists directories first, then files, both alphabetically
/// (case-insensitive). Directories at `max_depth` are shown but not
/// descended. Unreadable directories are skipped silently.
pub fn render(root: &Path, max_depth: usize, include_icons: bool) -> String {
    let root_name = root
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string());

    let mut lines = vec![format!("{}/", root_name)];
    render_level(root, "", 1, max_depth, include_icons, &mut lines);
    lines.join("\n")
}

fn render_level(
    dir: &Path,
    prefix: &str,
    depth: usize,
    max_depth: usize,
    include_icons: bool,
    lines: &mut Vec<String>,
) {
    if depth > max_depth {
        return;
    }

    let entries = match sorted_entries(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    let count = entries.len();
    for (idx, entry) in entries.into_iter().enumerate() {
        let is_last = idx == count - 1;
        let connector = if is_last { "└── " } else { "├── " };
        let icon = match (include_icons, entry.is_dir) {
            (false, _) => "",
            (true, true) => "📁 ",
            (true, false) => "📄 ",
        };

        if entry.is_dir {
            lines.push(format!("{}{}{}{}/", prefix, connector, icon, entry.name));
            let continuation = if is_last { "    " } else { "│   " };
            render_level(
                &entry.path,
                &format!("{}{}", prefix, continuation),
                depth + 1,
                max_depth,
                include_icons,
                lines,
            );
        } else {
            lines.push(format!("{}{}{}{}", prefix, connector, icon, entry.name));
        }
    }
}

/// Run the tree command: render to stdout
pub fn run_tree(root: &Path, max_depth: usize, include_icons: bool) -> anyhow::Result<()> {
    if !root.is_dir() {
        return Err(crate::core::error::FlattenError::RootNotFound(root.to_path_buf()).into());
    }
    println!("{}", render(root, max_depth, include_icons));
    Ok(())
}
