//! Output persistence.
//!
//! Stage 3 of the build. Writes the rendered document twice:
//!
//! ```text
//! project/
//! ├── README.md          # the document as rendered
//! └── docs/
//!     └── index.md       # front matter + the same document
//! ```
//!
//! Both files are overwritten unconditionally. The docs directory, and any
//! configured subdirectory of the README, are created if missing; the project
//! root itself never is. Any failure here is fatal for the run.

use crate::config::OutputConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("project root {} is not a directory", .path.display())]
    MissingRoot { path: PathBuf },
    #[error("cannot create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Paths written by [`write_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub readme: PathBuf,
    pub docs_index: PathBuf,
}

/// Front matter prepended to the docs copy.
pub fn front_matter(layout: &str) -> String {
    format!("---\nlayout: {layout}\n---\n\n")
}

fn write_file(path: &Path, content: &str) -> Result<(), WriteError> {
    fs::write(path, content).map_err(|source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = content.len(), "wrote output");
    Ok(())
}

/// Write `content` to the root document and the docs copy.
pub fn write_outputs(
    root: &Path,
    output: &OutputConfig,
    content: &str,
) -> Result<WrittenFiles, WriteError> {
    if !root.is_dir() {
        return Err(WriteError::MissingRoot {
            path: root.to_path_buf(),
        });
    }

    let readme = root.join(&output.readme);
    if let Some(parent) = readme.parent().filter(|p| *p != root) {
        fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    write_file(&readme, content)?;

    let docs_dir = root.join(&output.docs_dir);
    fs::create_dir_all(&docs_dir).map_err(|source| WriteError::CreateDir {
        path: docs_dir.clone(),
        source,
    })?;
    let docs_index = docs_dir.join(&output.docs_index);
    let docs_content = format!("{}{}", front_matter(&output.layout), content);
    write_file(&docs_index, &docs_content)?;

    Ok(WrittenFiles { readme, docs_index })
}
