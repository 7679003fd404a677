//! Project tree scanning.
//!
//! Stage 1 of the build. Reads every metadata source under the project root
//! into an [`Inventory`] that the renderer consumes. Scanning is read-only and
//! infallible: missing folders and files become empty lists and defaults.
//!
//! ## Directory Layout
//!
//! ```text
//! project/
//! ├── project.json          # name, description, homepage (optional)
//! ├── readme-gen.toml       # generator config (optional)
//! ├── code/                 # structured: one folder per module
//! │   └── alpha-module/
//! │       ├── summary.md
//! │       ├── tags.md
//! │       └── status.md
//! ├── datasets/             # structured
//! ├── papers/               # structured
//! ├── training/             # flat: loose *.md files
//! ├── models/               # flat
//! ├── evaluation/           # flat
//! └── ideas/                # flat
//! ```

use crate::blocks::{TextBlock, collect_text_blocks};
use crate::config::GeneratorConfig;
use crate::entry::{Entry, collect_entries};
use crate::project::{ProjectMeta, load_project_meta};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

pub const CODE_DIR: &str = "code";
pub const DATASETS_DIR: &str = "datasets";
pub const PAPERS_DIR: &str = "papers";
pub const TRAINING_DIR: &str = "training";
pub const MODELS_DIR: &str = "models";
pub const EVALUATION_DIR: &str = "evaluation";
pub const IDEAS_DIR: &str = "ideas";

/// Everything read from the project tree in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inventory {
    pub meta: ProjectMeta,
    pub code: Vec<Entry>,
    pub datasets: Vec<Entry>,
    pub papers: Vec<Entry>,
    pub training: Vec<TextBlock>,
    pub models: Vec<TextBlock>,
    pub evaluation: Vec<TextBlock>,
    pub ideas: Vec<TextBlock>,
}

impl Inventory {
    /// Structured categories in render order, paired with their directory.
    pub fn structured(&self) -> [(&'static str, &[Entry]); 3] {
        [
            (CODE_DIR, self.code.as_slice()),
            (DATASETS_DIR, self.datasets.as_slice()),
            (PAPERS_DIR, self.papers.as_slice()),
        ]
    }

    /// Flat categories in render order, paired with their directory.
    pub fn flat(&self) -> [(&'static str, &[TextBlock]); 4] {
        [
            (TRAINING_DIR, self.training.as_slice()),
            (MODELS_DIR, self.models.as_slice()),
            (EVALUATION_DIR, self.evaluation.as_slice()),
            (IDEAS_DIR, self.ideas.as_slice()),
        ]
    }
}

/// Scan the project rooted at `root`.
pub fn scan(root: &Path, config: &GeneratorConfig) -> Inventory {
    let meta = load_project_meta(&root.join(&config.project_file));
    let structured = |dir: &str| collect_entries(&root.join(dir));
    let flat = |dir: &str| collect_text_blocks(&root.join(dir), root);

    let inventory = Inventory {
        meta,
        code: structured(CODE_DIR),
        datasets: structured(DATASETS_DIR),
        papers: structured(PAPERS_DIR),
        training: flat(TRAINING_DIR),
        models: flat(MODELS_DIR),
        evaluation: flat(EVALUATION_DIR),
        ideas: flat(IDEAS_DIR),
    };

    debug!(
        code = inventory.code.len(),
        datasets = inventory.datasets.len(),
        papers = inventory.papers.len(),
        training = inventory.training.len(),
        models = inventory.models.len(),
        evaluation = inventory.evaluation.len(),
        ideas = inventory.ideas.len(),
        "scanned project tree"
    );
    inventory
}
