//! # readme-gen
//!
//! A metadata-first README generator for research project trees. The
//! filesystem is the data source: folders under `code/`, `datasets/` and
//! `papers/` become entries, loose markdown files under `training/`,
//! `models/`, `evaluation/` and `ideas/` become references, and the whole
//! tree is summarized into a single `README.md` plus a docs copy.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Scan      project tree  →  Inventory   (filesystem → structured data)
//! 2. Render    Inventory     →  Document    (pure, timestamp passed in)
//! 3. Write     Document      →  README.md + docs/index.md
//! ```
//!
//! Scanning never fails: missing or malformed metadata degrades to defaults.
//! Rendering is a pure function, so tests pin the timestamp and compare text.
//! Only writing can fail, and it happens after the document is complete.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: walks the category folders and builds the [`scan::Inventory`] |
//! | [`project`] | Lenient `project.json` loading with per-field defaults |
//! | [`entry`] | Structured-category folders: title, snippet, tags, status |
//! | [`checkbox`] | Task-list line classification and the [`checkbox::Status`] enum |
//! | [`blocks`] | Flat-category markdown files as labeled references |
//! | [`naming`] | Display labels from filename stems |
//! | [`render`] | Stage 2: the document templates and section order |
//! | [`write`] | Stage 3: persists the README and the docs copy |
//! | [`generate`] | Runs the three stages as one rebuild |
//! | [`config`] | `readme-gen.toml` loading, merging, and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Determinism
//!
//! Directory listings are sorted by file name before processing, so the same
//! tree renders the same document on every platform. The only varying line is
//! the `_Last updated_` timestamp.

pub mod blocks;
pub mod checkbox;
pub mod config;
pub mod entry;
pub mod generate;
pub mod naming;
pub mod output;
pub mod project;
pub mod render;
pub mod scan;
pub mod write;

#[cfg(test)]
pub(crate) mod test_helpers;
