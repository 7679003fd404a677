//! Shared test utilities for the readme-gen test suite.
//!
//! Provides fixture setup, lookup helpers, and bulk extractors that work with
//! scan-phase data structures (`Inventory`, `Entry`, `TextBlock`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let inventory = scan(tmp.path(), &GeneratorConfig::default());
//!
//! let beta = find_entry(&inventory.code, "beta-pipeline");
//! assert_eq!(beta.tags, vec!["nlp", "cv"]);
//! assert_eq!(entry_slugs(&inventory.code), vec!["alpha-module", "beta-pipeline"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::blocks::TextBlock;
use crate::entry::Entry;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/project/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/project");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Lookups (panic with the available names on a miss)
// =========================================================================

/// Find an entry by slug. Panics if not found.
pub fn find_entry<'a>(entries: &'a [Entry], slug: &str) -> &'a Entry {
    entries.iter().find(|e| e.slug == slug).unwrap_or_else(|| {
        let slugs = entry_slugs(entries);
        panic!("entry '{slug}' not found. Available: {slugs:?}")
    })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All entry slugs in scan order.
pub fn entry_slugs(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.slug.as_str()).collect()
}

/// All block labels in scan order.
pub fn block_labels(blocks: &[TextBlock]) -> Vec<&str> {
    blocks.iter().map(|b| b.label.as_str()).collect()
}
