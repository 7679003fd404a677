//! Document rendering.
//!
//! Stage 2 of the build. Turns an [`Inventory`] into the aggregated markdown
//! document. Rendering is a pure function of the inventory and the timestamp
//! passed in: two renders of the same inventory at the same minute are
//! byte-identical.
//!
//! ## Section Order
//!
//! ```text
//! # <name>                       header: description, timestamp, homepage
//! ## What this template includes static
//! ## Structure                   static legend
//! ## Code modules                entries of code/
//! ## Datasets                    entries of datasets/
//! ## Papers                      entries of papers/
//! ## Models & Training           blocks of training/ then models/
//! ## Evaluation                  blocks of evaluation/
//! ## Ideas & TODOs               blocks of ideas/
//! ## Using this template         static footer
//! ```
//!
//! ## Entry Lines
//!
//! ```text
//! - [x] **Beta Pipeline** (`code/beta-pipeline`) — tags: nlp, cv
//!   - Tokenizes and trains.
//! ```
//!
//! A category with nothing in it renders a single hint line instead.

use crate::blocks::TextBlock;
use crate::entry::Entry;
use crate::project::ProjectMeta;
use crate::scan::{CODE_DIR, DATASETS_DIR, Inventory, PAPERS_DIR};
use chrono::{DateTime, Utc};
use std::fmt;

/// Timestamp format embedded in the header. Minute precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Heading and empty-category hint of one rendered category section.
struct CategorySection {
    heading: &'static str,
    hint: &'static str,
}

const CODE_SECTION: CategorySection = CategorySection {
    heading: "## Code modules",
    hint: "Add a folder like `code/your-module` with `summary.md` + `tags.md`.",
};

const DATASETS_SECTION: CategorySection = CategorySection {
    heading: "## Datasets",
    hint: "Track datasets with manifest files instead of raw data.",
};

const PAPERS_SECTION: CategorySection = CategorySection {
    heading: "## Papers",
    hint: "Summarize the papers you have read to keep the literature visible.",
};

const MODELS_SECTION: CategorySection = CategorySection {
    heading: "## Models & Training",
    hint: "Document experiment configs and link to checkpoints or releases.",
};

const EVALUATION_SECTION: CategorySection = CategorySection {
    heading: "## Evaluation",
    hint: "Add benchmark summaries, result tables, or notebooks here.",
};

const IDEAS_SECTION: CategorySection = CategorySection {
    heading: "## Ideas & TODOs",
    hint: "Capture design docs, hypotheses, and next steps in `ideas/`.",
};

const INCLUDES: &[&str] = &[
    "## What this template includes",
    "- Opinionated folder layout for code, datasets, papers, models, and experiments.",
    "- Metadata-first README generator (`readme-gen`).",
    "- Optional GitHub Actions to auto-refresh README and Pages.",
    "- Space for notes, TODOs, and evaluation summaries without cluttering the root README.",
    "",
];

const STRUCTURE: &[&str] = &[
    "## Structure",
    "- `code/`: experiments, pipelines, and libraries",
    "- `datasets/`: dataset manifests, download scripts, and notes",
    "- `papers/`: literature summaries and (optional) PDFs",
    "- `training/`: reproducible training pipelines and configs",
    "- `models/`: lightweight model cards and release links",
    "- `evaluation/`: benchmarks, metrics, and analysis notebooks",
    "- `ideas/`: backlog items, design docs, and hypotheses",
    "- `scripts/`: automation such as the README generator",
    "",
];

const USAGE: &[&str] = &[
    "## Using this template",
    "1) Edit `project.json` with your project name/description.",
    "2) Add code/dataset/paper folders with `summary.md`, `tags.md`, and optional `status.md` checkboxes.",
    "3) Run `readme-gen` to regenerate `README.md` and `docs/index.md`.",
    "4) Commit your changes; GitHub Actions will refresh the docs on push.",
    "",
    "The generator keeps the README short while surfacing progress across modules, datasets, and readings.",
    "",
];

/// The rendered document: an ordered list of sections joined by newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    sections: Vec<String>,
}

impl Document {
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn into_string(self) -> String {
        self.sections.join("\n")
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sections.join("\n"))
    }
}

fn section<S: AsRef<str>>(lines: &[S]) -> String {
    lines.iter().map(|l| l.as_ref()).collect::<Vec<&str>>().join("\n")
}

fn render_header(meta: &ProjectMeta, now: DateTime<Utc>) -> String {
    let mut lines = vec![
        format!("# {}", meta.name),
        String::new(),
        meta.description.clone(),
        format!("_Last updated: {}_", now.format(TIMESTAMP_FORMAT)),
        String::new(),
    ];
    if let Some(homepage) = &meta.homepage {
        lines.push(format!("Project homepage: {homepage}"));
        lines.push(String::new());
    }
    section(&lines)
}

/// Format one entry: the summary line plus an indented snippet line if any.
pub fn format_entry(entry: &Entry, category: &str) -> Vec<String> {
    let tags = if entry.tags.is_empty() {
        "no tags".to_string()
    } else {
        entry.tags.join(", ")
    };
    let mut lines = vec![format!(
        "- {} **{}** (`{}/{}`) \u{2014} tags: {}",
        entry.status.marker(),
        entry.title,
        category,
        entry.slug,
        tags
    )];
    if !entry.snippet.is_empty() {
        lines.push(format!("  - {}", entry.snippet));
    }
    lines
}

pub fn format_block(block: &TextBlock) -> String {
    format!("- {} ({})", block.label, block.relative_path)
}

fn render_entries(meta: &CategorySection, category: &str, entries: &[Entry]) -> String {
    let mut lines = vec![meta.heading.to_string()];
    if entries.is_empty() {
        lines.push(format!("- {}", meta.hint));
    } else {
        lines.extend(entries.iter().flat_map(|e| format_entry(e, category)));
    }
    lines.push(String::new());
    section(&lines)
}

fn render_blocks<'a, I>(meta: &CategorySection, blocks: I) -> String
where
    I: IntoIterator<Item = &'a TextBlock>,
{
    let mut lines = vec![meta.heading.to_string()];
    lines.extend(blocks.into_iter().map(format_block));
    if lines.len() == 1 {
        lines.push(format!("- {}", meta.hint));
    }
    lines.push(String::new());
    section(&lines)
}

/// Render the full document for `inventory`, stamped with `now`.
pub fn render(inventory: &Inventory, now: DateTime<Utc>) -> Document {
    let sections = vec![
        render_header(&inventory.meta, now),
        section(INCLUDES),
        section(STRUCTURE),
        render_entries(&CODE_SECTION, CODE_DIR, &inventory.code),
        render_entries(&DATASETS_SECTION, DATASETS_DIR, &inventory.datasets),
        render_entries(&PAPERS_SECTION, PAPERS_DIR, &inventory.papers),
        render_blocks(
            &MODELS_SECTION,
            inventory.training.iter().chain(&inventory.models),
        ),
        render_blocks(&EVALUATION_SECTION, &inventory.evaluation),
        render_blocks(&IDEAS_SECTION, &inventory.ideas),
        section(USAGE),
    ];
    Document { sections }
}
