//! Flat-category text block collection.
//!
//! Flat categories (`models/`, `training/`, `evaluation/`, `ideas/`) keep loose
//! markdown files directly in the category folder. Each file becomes one
//! labeled reference in the index; its contents are not read.
//!
//! ```text
//! evaluation/
//! ├── README.md             # category index, skipped
//! ├── baseline-results.md   → Baseline Results (evaluation/baseline-results.md)
//! └── lr_sweep.md           → Lr Sweep (evaluation/lr_sweep.md)
//! ```

use crate::naming::display_label;
use serde::Serialize;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// One loose markdown file in a flat category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    pub label: String,
    /// Path relative to the project root, `/`-separated.
    pub relative_path: String,
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

fn is_category_readme(name: &str) -> bool {
    name.eq_ignore_ascii_case("readme.md")
}

/// Render a path relative to `root` with forward slashes on every platform.
fn relative_display(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// List the markdown files of a flat category folder, sorted by filename.
///
/// `root` is the project root that relative paths are computed against.
/// A missing folder yields no blocks.
pub fn collect_text_blocks(base: &Path, root: &Path) -> Vec<TextBlock> {
    if !base.is_dir() {
        return Vec::new();
    }
    WalkDir::new(base)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|e| {
            e.file_type().is_file()
                && is_markdown(e.path())
                && !is_category_readme(&e.file_name().to_string_lossy())
        })
        .map(|e| {
            let stem = e
                .path()
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            TextBlock {
                label: display_label(&stem),
                relative_path: relative_display(e.path(), root),
            }
        })
        .collect()
}
