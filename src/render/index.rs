//! `index.md` assembly.

use crate::model::IndexEntry;
use std::path::Path;

/// Render the index listing every generated document.
pub fn render_index(title: &str, entries: &[IndexEntry], summaries: bool) -> String {
    let mut out = format!("# {}\n\n## Files\n\n", title);

    if entries.is_empty() {
        out.push_str("_No documents generated._\n");
        return out;
    }

    for entry in entries {
        out.push_str(&format!(
            "- [{}](./{})",
            to_slash(&entry.source),
            link_target(&entry.output)
        ));
        if summaries {
            if let Some(ref summary) = entry.summary {
                out.push_str(" — ");
                out.push_str(summary);
            }
        }
        out.push('\n');
    }
    out
}

/// Path with `/` separators regardless of platform.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn link_target(path: &Path) -> String {
    to_slash(path).replace(' ', "%20")
}
