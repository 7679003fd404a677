//! Checkbox line classification and completion status.
//!
//! Status markers are plain markdown task-list lines. A line is a checkbox
//! when, after trimming, it consists of an optional single leading marker
//! (`#`, `>`, `*` or `-`), optional whitespace, a box (`[ ]`, `[x]` or `[X]`),
//! and any trailing text:
//!
//! ```text
//! - [x] done        → checked, "done"
//! [ ] todo          → unchecked, "todo"
//! > [X] Done        → checked, "Done"
//! [y] nope          → not a checkbox
//! ```

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static CHECKBOX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[#>*-]?\s*\[([ xX])\]\s*(.*)$").expect("checkbox regex"));

/// A line recognized as a checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox<'a> {
    pub checked: bool,
    /// Text after the box, with leading whitespace removed.
    pub remainder: &'a str,
}

/// Classify one line. Returns `None` when the line is not a checkbox.
pub fn parse_checkbox(line: &str) -> Option<Checkbox<'_>> {
    let caps = CHECKBOX_RE.captures(line.trim())?;
    let mark = caps.get(1)?.as_str();
    let remainder = caps.get(2).map_or("", |m| m.as_str());
    Some(Checkbox {
        checked: mark.eq_ignore_ascii_case("x"),
        remainder,
    })
}

/// Completion status of an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Checked,
    Unchecked,
    #[default]
    Unknown,
}

impl Status {
    /// Markdown box rendered for this status. Unknown renders as unchecked.
    pub fn marker(self) -> &'static str {
        match self {
            Status::Checked => "[x]",
            Status::Unchecked | Status::Unknown => "[ ]",
        }
    }

    pub fn is_known(self) -> bool {
        self != Status::Unknown
    }

    /// `self` if determinate, otherwise `fallback`.
    pub fn or(self, fallback: Status) -> Status {
        if self.is_known() { self } else { fallback }
    }
}

/// Status from the first checkbox line in `lines`, or `Unknown` if none.
pub fn extract_status<'a, I>(lines: I) -> Status
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .find_map(parse_checkbox)
        .map_or(Status::Unknown, |cb| {
            if cb.checked {
                Status::Checked
            } else {
                Status::Unchecked
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_checked_line() {
        let cb = parse_checkbox("- [x] done").unwrap();
        assert!(cb.checked);
        assert_eq!(cb.remainder, "done");
    }

    #[test]
    fn bare_unchecked_line() {
        let cb = parse_checkbox("[ ] todo").unwrap();
        assert!(!cb.checked);
        assert_eq!(cb.remainder, "todo");
    }

    #[test]
    fn quote_uppercase_x() {
        let cb = parse_checkbox("> [X] Done").unwrap();
        assert!(cb.checked);
        assert_eq!(cb.remainder, "Done");
    }

    #[test]
    fn heading_and_star_markers() {
        assert!(parse_checkbox("# [x] shipped").is_some());
        assert!(parse_checkbox("* [ ] pending").is_some());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let cb = parse_checkbox("   -   [x]   spaced out  ").unwrap();
        assert_eq!(cb.remainder, "spaced out");
    }

    #[test]
    fn empty_remainder() {
        let cb = parse_checkbox("[x]").unwrap();
        assert_eq!(cb.remainder, "");
    }

    #[test]
    fn other_box_contents_rejected() {
        assert_eq!(parse_checkbox("[y] nope"), None);
        assert_eq!(parse_checkbox("[] empty"), None);
    }

    #[test]
    fn double_marker_rejected() {
        assert_eq!(parse_checkbox("-- [x] two dashes"), None);
        assert_eq!(parse_checkbox("## [x] subheading"), None);
    }

    #[test]
    fn plain_text_rejected() {
        assert_eq!(parse_checkbox("Just a sentence [x] inside"), None);
        assert_eq!(parse_checkbox(""), None);
    }

    #[test]
    fn extract_status_first_match_wins() {
        let lines = ["# Title", "[ ] first", "[x] second"];
        assert_eq!(extract_status(lines), Status::Unchecked);
    }

    #[test]
    fn extract_status_unknown_without_checkbox() {
        assert_eq!(extract_status(["# Title", "text"]), Status::Unknown);
        assert_eq!(extract_status(std::iter::empty()), Status::Unknown);
    }

    #[test]
    fn status_markers() {
        assert_eq!(Status::Checked.marker(), "[x]");
        assert_eq!(Status::Unchecked.marker(), "[ ]");
        assert_eq!(Status::Unknown.marker(), "[ ]");
    }

    #[test]
    fn status_or_prefers_known() {
        assert_eq!(Status::Checked.or(Status::Unchecked), Status::Checked);
        assert_eq!(Status::Unknown.or(Status::Unchecked), Status::Unchecked);
        assert_eq!(Status::Unknown.or(Status::Unknown), Status::Unknown);
    }
}
