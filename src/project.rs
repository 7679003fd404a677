//! Project record loading.
//!
//! The project record (`project.json` by default) names the project and gives
//! the header of the rendered document its description and optional homepage.
//! Every field is optional and the record itself may be missing or broken:
//! loading never fails, it falls back to built-in defaults field by field.
//!
//! ```json
//! {
//!   "name": "Protein Folding Notes",
//!   "description": "Experiments and reading notes.",
//!   "homepage": "https://example.org"
//! }
//! ```
//!
//! Keys other than `name`, `description`, and `homepage` are ignored, as are
//! `null` values and values that are not strings.

use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

pub const DEFAULT_NAME: &str = "Research Project Template";
pub const DEFAULT_DESCRIPTION: &str = "A lightweight scaffold for organizing research code, datasets, experiments, and literature notes.";

/// Project-level metadata shown in the document header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectMeta {
    pub name: String,
    pub description: String,
    /// Project homepage. `None` when unset or empty.
    pub homepage: Option<String>,
}

impl Default for ProjectMeta {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            homepage: None,
        }
    }
}

impl ProjectMeta {
    /// Overlay the string fields of a parsed record onto these values.
    fn overlay(mut self, record: &serde_json::Map<String, Value>) -> Self {
        if let Some(name) = string_field(record, "name") {
            self.name = name;
        }
        if let Some(description) = string_field(record, "description") {
            self.description = description;
        }
        if let Some(homepage) = string_field(record, "homepage") {
            self.homepage = Some(homepage).filter(|h| !h.is_empty());
        }
        self
    }
}

fn string_field(record: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => {
            warn!(key, value = %other, "ignoring non-string project field");
            None
        }
    }
}

/// Parse project record text, overlaying recognized fields onto the defaults.
///
/// Malformed JSON, or JSON that is not an object, yields the defaults.
pub fn parse_project_meta(content: &str) -> ProjectMeta {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(record)) => ProjectMeta::default().overlay(&record),
        Ok(_) => {
            warn!("project record is not a JSON object, using defaults");
            ProjectMeta::default()
        }
        Err(err) => {
            warn!(error = %err, "project record is not valid JSON, using defaults");
            ProjectMeta::default()
        }
    }
}

/// Load the project record at `path`.
///
/// A missing or unreadable file yields the defaults.
pub fn load_project_meta(path: &Path) -> ProjectMeta {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), "loaded project record");
            parse_project_meta(&content)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => ProjectMeta::default(),
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "cannot read project record, using defaults"
            );
            ProjectMeta::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let meta = load_project_meta(&tmp.path().join("project.json"));
        assert_eq!(meta, ProjectMeta::default());
    }

    #[test]
    fn homepage_only_keeps_default_name_and_description() {
        let meta = parse_project_meta(r#"{"homepage": "https://x"}"#);
        assert_eq!(meta.name, DEFAULT_NAME);
        assert_eq!(meta.description, DEFAULT_DESCRIPTION);
        assert_eq!(meta.homepage.as_deref(), Some("https://x"));
    }

    #[test]
    fn all_fields_overlay() {
        let meta = parse_project_meta(
            r#"{"name": "Folding", "description": "Notes.", "homepage": "https://f.org"}"#,
        );
        assert_eq!(meta.name, "Folding");
        assert_eq!(meta.description, "Notes.");
        assert_eq!(meta.homepage.as_deref(), Some("https://f.org"));
    }

    #[test]
    fn null_values_are_ignored() {
        let meta = parse_project_meta(r#"{"name": null, "description": "Kept"}"#);
        assert_eq!(meta.name, DEFAULT_NAME);
        assert_eq!(meta.description, "Kept");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let meta = parse_project_meta(r#"{"name": "X", "license": "MIT"}"#);
        assert_eq!(meta.name, "X");
        assert_eq!(meta.homepage, None);
    }

    #[test]
    fn non_string_values_are_ignored() {
        let meta = parse_project_meta(r#"{"name": 42, "homepage": ["a"]}"#);
        assert_eq!(meta, ProjectMeta::default());
    }

    #[test]
    fn empty_homepage_means_none() {
        let meta = parse_project_meta(r#"{"homepage": ""}"#);
        assert_eq!(meta.homepage, None);
    }

    #[test]
    fn malformed_json_yields_defaults() {
        assert_eq!(parse_project_meta("{not json"), ProjectMeta::default());
    }

    #[test]
    fn non_object_json_yields_defaults() {
        assert_eq!(parse_project_meta(r#"["name"]"#), ProjectMeta::default());
        assert_eq!(parse_project_meta("null"), ProjectMeta::default());
    }

    #[test]
    fn load_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("project.json");
        fs::write(&path, r#"{"name": "On Disk"}"#).unwrap();
        assert_eq!(load_project_meta(&path).name, "On Disk");
    }
}
