//! Markdown source discovery.
//!
//! Walks the source root recursively and collects every `.md` file except
//! files named exactly `README.md`, which document the source tree itself and
//! are never published:
//!
//! ```text
//! blog/
//! ├── README.md                  # skipped
//! ├── config.toml                # not markdown, skipped
//! ├── hello-world.md             # → docs/world.html
//! └── posts/
//!     ├── README.md              # skipped (at any depth)
//!     └── 2024-02-20-note.md     # → docs/posts/02-20-note.html
//! ```
//!
//! Entries are yielded in file-name order within each directory, so runs are
//! reproducible. Symlinks are followed; a broken link, an unreadable
//! directory, or a missing root aborts the walk instead of being skipped.

use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;
use walkdir::WalkDir;

/// Extension a source file must have, compared exactly.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Base name that is never published, compared exactly (case-sensitive).
pub const EXCLUDED_FILE_NAME: &str = "README.md";

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("Could not walk {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("Could not read modification time of {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A markdown file found during the walk.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// Whether a path names a publishable markdown file.
pub fn is_markdown_source(path: &Path) -> bool {
    let is_markdown = path
        .extension()
        .map(|e| e == MARKDOWN_EXTENSION)
        .unwrap_or(false);
    let excluded = path
        .file_name()
        .map(|n| n == EXCLUDED_FILE_NAME)
        .unwrap_or(false);
    is_markdown && !excluded
}

/// Collect all markdown sources under `root`.
pub fn discover(root: &Path) -> Result<Vec<SourceFile>, DiscoverError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|source| DiscoverError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() || !is_markdown_source(entry.path()) {
            continue;
        }

        let modified = entry
            .metadata()
            .map_err(|source| DiscoverError::Walk {
                root: root.to_path_buf(),
                source,
            })?
            .modified()
            .map_err(|source| DiscoverError::Metadata {
                path: entry.path().to_path_buf(),
                source,
            })?;

        files.push(SourceFile {
            path: entry.into_path(),
            modified,
        });
    }

    tracing::debug!(root = %root.display(), count = files.len(), "discovered markdown sources");
    Ok(files)
}
