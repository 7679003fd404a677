//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Each item leads with
//! its positional index, status and title; the folder or file it came from is
//! shown as an indented `Source:` line.
//!
//! ```text
//! Project
//!     Protein Folding Notes
//!     Homepage: https://example.org
//!
//! code/
//!     001 [ ] alpha-module
//!         Source: code/alpha-module/
//!     002 [x] Beta Pipeline
//!         Source: code/beta-pipeline/
//!         Tags: nlp, cv
//!
//! papers/
//!     (empty)
//!
//! training/
//!     001 Lr Sweep
//!         Source: training/lr_sweep.md
//! ```
//!
//! # Architecture
//!
//! `format_*` functions return `Vec<String>` for testability and are pure;
//! `print_*` wrappers write to stdout.

use crate::scan::Inventory;
use crate::write::WrittenFiles;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format the scanned inventory, one block per category.
pub fn format_scan_output(inventory: &Inventory) -> Vec<String> {
    let mut lines = vec!["Project".to_string()];
    lines.push(format!("{}{}", indent(1), inventory.meta.name));
    if let Some(homepage) = &inventory.meta.homepage {
        lines.push(format!("{}Homepage: {}", indent(1), homepage));
    }

    for (dir, entries) in inventory.structured() {
        lines.push(String::new());
        lines.push(format!("{dir}/"));
        if entries.is_empty() {
            lines.push(format!("{}(empty)", indent(1)));
        }
        for (i, entry) in entries.iter().enumerate() {
            lines.push(format!(
                "{}{} {} {}",
                indent(1),
                format_index(i + 1),
                entry.status.marker(),
                entry.title
            ));
            lines.push(format!("{}Source: {}/{}/", indent(2), dir, entry.slug));
            if !entry.tags.is_empty() {
                lines.push(format!("{}Tags: {}", indent(2), entry.tags.join(", ")));
            }
        }
    }

    for (dir, blocks) in inventory.flat() {
        lines.push(String::new());
        lines.push(format!("{dir}/"));
        if blocks.is_empty() {
            lines.push(format!("{}(empty)", indent(1)));
        }
        for (i, block) in blocks.iter().enumerate() {
            lines.push(format!("{}{} {}", indent(1), format_index(i + 1), block.label));
            lines.push(format!("{}Source: {}", indent(2), block.relative_path));
        }
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(inventory: &Inventory) {
    for line in format_scan_output(inventory) {
        println!("{}", line);
    }
}

/// Format the list of written files, relative to the project root when possible.
pub fn format_build_output(written: &WrittenFiles, root: &Path) -> Vec<String> {
    [&written.readme, &written.docs_index]
        .into_iter()
        .map(|path| {
            let shown = path.strip_prefix(root).unwrap_or(path.as_path());
            format!("Wrote {}", shown.display())
        })
        .collect()
}

/// Print build output to stdout.
pub fn print_build_output(written: &WrittenFiles, root: &Path) {
    for line in format_build_output(written, root) {
        println!("{}", line);
    }
}
