//! Output titles derived from source file names.
//!
//! Posts are usually named with a leading date or sequence component
//! (`2024-02-20-note.md`, `hello-world.md`). Everything up to the first hyphen
//! is treated as that prefix and dropped; the rest is slugified into the
//! output file name:
//!
//! - `2024-01-01-my-post` → `01-01-my-post`
//! - `hello-world` → `world`
//! - `simplepage` → `simplepage`
//!
//! Names whose suffix has nothing slug-worthy (`draft-`, `2024-!!`) fall back
//! to the slug of the whole name.

use crate::slug::slugify;

/// Derive the URL title for an extension-stripped file name.
///
/// Returns an empty string only when the whole name has nothing slug-worthy;
/// callers treat that as an error.
pub fn derive_title(file_name: &str) -> String {
    if let Some((_, rest)) = file_name.split_once('-') {
        let title = slugify(rest);
        if !title.is_empty() {
            return title;
        }
    }
    slugify(file_name)
}

/// Human-readable form of a derived title: dashes become spaces.
pub fn display_title(title: &str) -> String {
    title.replace('-', " ")
}
