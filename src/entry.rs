//! Structured-category entry parsing.
//!
//! A structured category (`code/`, `datasets/`, `papers/`) holds one folder
//! per item. Each folder may carry up to three small metadata files:
//!
//! ```text
//! code/
//! └── beta-pipeline/
//!     ├── summary.md     # title line, snippet paragraph, optional checkbox
//!     ├── tags.md        # one tag per line
//!     └── status.md      # checkbox that overrides the summary's
//! ```
//!
//! ## Resolution
//!
//! - **Title**: first non-blank, non-checkbox line of `summary.md`, heading
//!   markers stripped → folder name.
//! - **Snippet**: the following lines up to the first blank line, joined with
//!   spaces → empty.
//! - **Status**: first checkbox in `status.md` → first checkbox in
//!   `summary.md` → unknown.
//! - **Tags**: non-blank lines of `tags.md`, in file order → none.
//!
//! Every file is optional and parsing never fails. Files that exist but
//! cannot be read are logged and treated as missing.

use crate::checkbox::{self, Status, parse_checkbox};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

pub const SUMMARY_FILE: &str = "summary.md";
pub const TAGS_FILE: &str = "tags.md";
pub const STATUS_FILE: &str = "status.md";

/// Parsed representation of one structured-category folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub title: String,
    /// Folder name.
    pub slug: String,
    pub snippet: String,
    pub tags: Vec<String>,
    pub status: Status,
}

/// Title, snippet, and status read from a `summary.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub title: String,
    pub snippet: String,
    pub status: Status,
}

/// Read a text file that may not exist.
///
/// Returns `None` if the file is missing or unreadable. Invalid UTF-8 is
/// replaced rather than rejected.
pub(crate) fn read_optional(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "cannot read metadata file, skipping");
            None
        }
    }
}

/// Split text into lines on `\n`, `\r\n`, or a lone `\r`.
pub(crate) fn text_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// Extract title, snippet, and status from summary text.
///
/// `fallback` becomes the title when no usable title line is found.
pub fn parse_summary_text(content: &str, fallback: &str) -> Summary {
    let status = checkbox::extract_status(text_lines(content));

    let mut title = fallback.to_string();
    let mut saw_title = false;
    let mut snippet_lines: Vec<&str> = Vec::new();

    for line in text_lines(content) {
        let mut text = line.trim();
        if text.is_empty() {
            if saw_title && !snippet_lines.is_empty() {
                break;
            }
            continue;
        }
        if parse_checkbox(text).is_some() {
            continue;
        }
        if text.starts_with('#') {
            text = text.trim_start_matches('#').trim();
        }
        if !saw_title {
            if !text.is_empty() {
                title = text.to_string();
            }
            saw_title = true;
            continue;
        }
        snippet_lines.push(text);
    }

    Summary {
        title,
        snippet: snippet_lines.join(" ").trim().to_string(),
        status,
    }
}

/// Parse a `summary.md`. A missing file yields the fallback title, an empty
/// snippet, and unknown status.
pub fn parse_summary(path: &Path, fallback: &str) -> Summary {
    match read_optional(path) {
        Some(content) => parse_summary_text(&content, fallback),
        None => Summary {
            title: fallback.to_string(),
            snippet: String::new(),
            status: Status::Unknown,
        },
    }
}

/// Parse tag text: one tag per non-blank line, trimmed, order preserved.
pub fn parse_tags_text(content: &str) -> Vec<String> {
    text_lines(content)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Parse a `tags.md`. A missing file yields no tags.
pub fn parse_tags(path: &Path) -> Vec<String> {
    read_optional(path)
        .map(|content| parse_tags_text(&content))
        .unwrap_or_default()
}

/// Resolve an entry's status from its folder's `status.md`.
///
/// The dedicated file wins only when it holds a checkbox; otherwise
/// `fallback` (the summary-derived status) is kept.
pub fn load_status(folder: &Path, fallback: Status) -> Status {
    read_optional(&folder.join(STATUS_FILE))
        .map(|content| checkbox::extract_status(text_lines(&content)))
        .unwrap_or(Status::Unknown)
        .or(fallback)
}

/// Build the [`Entry`] for one folder.
pub fn parse_entry(folder: &Path) -> Entry {
    let slug = folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let summary = parse_summary(&folder.join(SUMMARY_FILE), &slug);
    let tags = parse_tags(&folder.join(TAGS_FILE));
    let status = load_status(folder, summary.status);

    debug!(slug = %slug, status = ?status, tags = tags.len(), "parsed entry");

    Entry {
        title: summary.title,
        slug,
        snippet: summary.snippet,
        tags,
        status,
    }
}

/// Parse every visible subfolder of a category root, sorted by name.
///
/// A missing root yields no entries.
pub fn collect_entries(base: &Path) -> Vec<Entry> {
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
        .filter(|e| e.file_type().is_dir() && !e.file_name().to_string_lossy().starts_with('.'))
        .map(|e| parse_entry(e.path()))
        .collect()
}
