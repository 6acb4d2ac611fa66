//! Shared test utilities for the simple-blog test suite.
//!
//! Provides a fixture setup and lookup helpers over [`BuildReport`] that
//! panic with the available values on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let report = build(&options, &RenderRegistry::standard(), &config).unwrap();
//!
//! let note = find_page(&report, "02-20-note");
//! assert_eq!(note.dir, "posts");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{BuildReport, GeneratedPage};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/` to a temp directory and return it.
///
/// The source tree lands at `<tmp>/blog`. Tests get an isolated copy they can
/// mutate without affecting other tests or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
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
// Report lookups: panic with a clear message on miss
// =========================================================================

/// Find a generated page by title. Panics if not found.
pub fn find_page<'a>(report: &'a BuildReport, title: &str) -> &'a GeneratedPage {
    report
        .pages
        .iter()
        .find(|p| p.title == title)
        .unwrap_or_else(|| {
            let titles = page_titles(report);
            panic!("page '{title}' not found. Available: {titles:?}")
        })
}

/// All page titles in processing order.
pub fn page_titles(report: &BuildReport) -> Vec<&str> {
    report.pages.iter().map(|p| p.title.as_str()).collect()
}
