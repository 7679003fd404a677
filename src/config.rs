//! Generator configuration.
//!
//! Handles loading and validating the optional `readme-gen.toml` at
//! the project root. This file controls where the tool reads the project record
//! from and where it writes its output; it does not describe the project itself
//! (that lives in `project.json`, see [`crate::project`]).
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! project_file = "project.json"  # Project record, relative to the root
//!
//! [output]
//! readme = "README.md"           # Root-level rendered document
//! docs_dir = "docs"              # Directory for the docs copy
//! docs_index = "index.md"        # Filename of the docs copy inside docs_dir
//! layout = "default"             # Front-matter layout of the docs copy
//! ```
//!
//! ## Partial Configuration
//!
//! The file is sparse: any key left out keeps its stock default, including
//! single keys inside `[output]`. Unknown keys are rejected to catch typos early.
//! Unlike `project.json`, a broken `readme-gen.toml` stops the run.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Filename of the generator config, looked up in the project root.
pub const CONFIG_FILE: &str = "readme-gen.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator configuration loaded from `readme-gen.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Path of the project record, relative to the project root.
    pub project_file: String,
    /// Output locations.
    pub output: OutputConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_file: "project.json".to_string(),
            output: OutputConfig::default(),
        }
    }
}

/// Where the rendered document is written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Root-level document path.
    pub readme: String,
    /// Directory holding the docs copy.
    pub docs_dir: String,
    /// Filename of the docs copy.
    pub docs_index: String,
    /// Layout name written into the docs copy's front matter.
    pub layout: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            readme: "README.md".to_string(),
            docs_dir: "docs".to_string(),
            docs_index: "index.md".to_string(),
            layout: "default".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Validate that every configured path is usable relative to the root.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let paths = [
            ("project_file", &self.project_file),
            ("output.readme", &self.output.readme),
            ("output.docs_dir", &self.output.docs_dir),
            ("output.docs_index", &self.output.docs_index),
        ];
        for (key, value) in paths {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
            if Path::new(value).is_absolute() {
                return Err(ConfigError::Validation(format!(
                    "{key} must be relative to the project root, got {value}"
                )));
            }
        }
        if self.output.layout.trim().is_empty() {
            return Err(ConfigError::Validation("output.layout must not be empty".into()));
        }
        Ok(())
    }
}

/// Parse config text and validate it. Missing keys take their defaults.
pub fn parse_config(content: &str) -> Result<GeneratorConfig, ConfigError> {
    let config: GeneratorConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load the generator config for a project root, falling back to stock defaults.
pub fn load_config(root: &Path) -> Result<GeneratorConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(GeneratorConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    tracing::debug!(path = %config_path.display(), "loaded generator config");
    parse_config(&content)
}

/// Returns a fully-commented stock `readme-gen.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# readme-gen Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
#
# Project name, description, and homepage are NOT set here: they live in
# the project record (project.json by default).

# Project record with name/description/homepage, relative to the project root.
project_file = "project.json"

# ---------------------------------------------------------------------------
# Output locations
# ---------------------------------------------------------------------------
[output]
# Root-level rendered document.
readme = "README.md"

# Directory for the docs copy (created if missing).
docs_dir = "docs"

# Filename of the docs copy inside docs_dir.
docs_index = "index.md"

# Layout name written into the docs copy's front matter.
layout = "default"
"##
}
