//! Destination paths in the output tree.
//!
//! The output tree mirrors the source tree: a page from `blog/posts/` lands in
//! `docs/posts/`, named after its derived title.

use crate::types::PageMetadata;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// `<output_root>/<page dir>/<title>.html`, without touching the filesystem.
pub fn destination_for(output_root: &Path, title: &str, page: &PageMetadata) -> PathBuf {
    let mut path = output_root.to_path_buf();
    for segment in page.dir.split('/').filter(|s| !s.is_empty() && *s != ".") {
        path.push(segment);
    }
    path.push(format!("{title}.html"));
    path
}

/// Like [`destination_for`], but also creates every missing parent directory.
///
/// Calling it again for the same page returns the same path and succeeds.
pub fn destination_path(output_root: &Path, title: &str, page: &PageMetadata) -> io::Result<PathBuf> {
    let path = destination_for(output_root, title, page);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(path)
}
