//! Full rebuild: scan → render → write.
//!
//! Every run regenerates the whole document from the current state of the
//! tree. Rendering completes in memory before the first byte is written, so a
//! failed run never leaves a half-rendered document behind.

use crate::config::{self, ConfigError, GeneratorConfig};
use crate::render::{self, Document};
use crate::scan::{self, Inventory};
use crate::write::{self, WriteError, WrittenFiles};
use chrono::{DateTime, Utc};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}

/// Result of a successful build.
#[derive(Debug)]
pub struct BuildReport {
    pub inventory: Inventory,
    pub written: WrittenFiles,
}

/// Scan and render without writing anything.
pub fn preview(root: &Path, config: &GeneratorConfig, now: DateTime<Utc>) -> (Inventory, Document) {
    let inventory = scan::scan(root, config);
    let document = render::render(&inventory, now);
    (inventory, document)
}

/// Rebuild the outputs of the project at `root`, stamped with `now`.
pub fn build(root: &Path, now: DateTime<Utc>) -> Result<BuildReport, BuildError> {
    let config = config::load_config(root)?;
    let (inventory, document) = preview(root, &config, now);
    let written = write::write_outputs(root, &config.output, &document.into_string())?;
    Ok(BuildReport { inventory, written })
}
