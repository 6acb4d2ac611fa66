//! Per-directory render dispatch.
//!
//! Every source directory that holds markdown is routed to a render handler
//! through a [`RenderRegistry`]. A handler decides where the page goes and
//! what it looks like:
//!
//! | Key | Handler | Layout |
//! |-----|---------|--------|
//! | `./` | [`render_page`] | page + footer |
//! | `posts/` | [`render_post`] | dated post + footer |
//!
//! Keys are directory paths relative to the source root with a trailing `/`;
//! the root itself is `./`. Lookups normalize the directory the same way, so
//! a registry key without its trailing slash can never match. A directory
//! with no entry aborts the build.

use crate::config::SiteConfig;
use crate::naming::derive_title;
use crate::paths::{destination_for, destination_path};
use crate::templates::{page_layout, post_layout};
use crate::types::PageMetadata;
use maud::Markup;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Registry key of the source root.
pub const ROOT_KEY: &str = "./";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No handler for dir: {0}")]
    UnmappedDirectory(String),
    #[error("Cannot derive an output name from file name: {0}")]
    EmptyTitle(String),
    #[error("Cannot create output directory for {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fixed inputs every handler receives besides the page itself.
#[derive(Debug, Clone, Copy)]
pub struct HandlerParams<'a> {
    pub output_root: &'a Path,
    pub config: &'a SiteConfig,
}

/// What a handler hands back to the driver.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// Derived URL title.
    pub title: String,
    /// File to create; its parent directories already exist.
    pub destination: PathBuf,
    pub component: Markup,
}

pub type RenderHandler = fn(&PageMetadata, &HandlerParams<'_>) -> Result<RenderOutput, RenderError>;

/// Normalize a relative source directory into its registry key.
///
/// - `""` / `"."` → `"./"`
/// - `"posts"` / `"posts/"` → `"posts/"`
pub fn dir_key(dir: &str) -> String {
    let trimmed = dir.trim_end_matches('/');
    if trimmed.is_empty() || trimmed == "." {
        ROOT_KEY.to_string()
    } else {
        format!("{trimmed}/")
    }
}

/// Directory-to-handler routing table, fixed once built.
#[derive(Debug, Clone)]
pub struct RenderRegistry {
    handlers: HashMap<String, RenderHandler>,
}

impl RenderRegistry {
    /// Build a registry from `(directory, handler)` pairs.
    ///
    /// Directories are normalized with [`dir_key`]; later pairs replace
    /// earlier ones for the same key.
    pub fn from_routes<'a>(routes: impl IntoIterator<Item = (&'a str, RenderHandler)>) -> Self {
        let handlers = routes
            .into_iter()
            .map(|(dir, handler)| (dir_key(dir), handler))
            .collect();
        Self { handlers }
    }

    /// The blog layout: top-level pages and a `posts/` directory.
    pub fn standard() -> Self {
        Self::from_routes([
            (ROOT_KEY, render_page as RenderHandler),
            ("posts/", render_post as RenderHandler),
        ])
    }

    /// Handler for a source directory relative to the source root.
    pub fn lookup(&self, dir: &str) -> Result<RenderHandler, RenderError> {
        self.handlers
            .get(&dir_key(dir))
            .copied()
            .ok_or_else(|| RenderError::UnmappedDirectory(display_dir(dir)))
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for RenderRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn display_dir(dir: &str) -> String {
    if dir.is_empty() { ".".to_string() } else { dir.to_string() }
}

// ============================================================================
// Handlers
// ============================================================================

/// Title and destination shared by every handler.
fn route(page: &PageMetadata, params: &HandlerParams<'_>) -> Result<(String, PathBuf), RenderError> {
    let title = derive_title(&page.file_name);
    if title.is_empty() {
        return Err(RenderError::EmptyTitle(page.file_name.clone()));
    }
    let destination = destination_path(params.output_root, &title, page).map_err(|source| {
        RenderError::CreateDir {
            path: destination_for(params.output_root, &title, page),
            source,
        }
    })?;
    Ok((title, destination))
}

/// Handler for top-level pages.
pub fn render_page(
    page: &PageMetadata,
    params: &HandlerParams<'_>,
) -> Result<RenderOutput, RenderError> {
    let (title, destination) = route(page, params)?;
    let component = page_layout(params.config, page, &title);
    Ok(RenderOutput {
        title,
        destination,
        component,
    })
}

/// Handler for `posts/`.
pub fn render_post(
    page: &PageMetadata,
    params: &HandlerParams<'_>,
) -> Result<RenderOutput, RenderError> {
    let (title, destination) = route(page, params)?;
    let component = post_layout(params.config, page, &title);
    Ok(RenderOutput {
        title,
        destination,
        component,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;
    use tempfile::TempDir;

    fn page(file_name: &str, dir: &str) -> PageMetadata {
        PageMetadata::new(SystemTime::UNIX_EPOCH, file_name, dir, "<p>x</p>".into())
    }

    #[test]
    fn dir_key_normalizes() {
        assert_eq!(dir_key(""), "./");
        assert_eq!(dir_key("."), "./");
        assert_eq!(dir_key("./"), "./");
        assert_eq!(dir_key("posts"), "posts/");
        assert_eq!(dir_key("posts/"), "posts/");
        assert_eq!(dir_key("posts/2024"), "posts/2024/");
    }

    #[test]
    fn standard_registry_keys() {
        assert_eq!(RenderRegistry::standard().keys(), vec!["./", "posts/"]);
    }

    #[test]
    fn lookup_root_and_posts() {
        let registry = RenderRegistry::standard();
        assert!(registry.lookup("").is_ok());
        assert!(registry.lookup(".").is_ok());
        assert!(registry.lookup("posts").is_ok());
    }

    #[test]
    fn lookup_miss_names_directory() {
        let registry = RenderRegistry::standard();
        let err = registry.lookup("drafts").unwrap_err();
        assert!(matches!(&err, RenderError::UnmappedDirectory(d) if d == "drafts"));
        assert_eq!(err.to_string(), "No handler for dir: drafts");
    }

    #[test]
    fn nested_posts_dir_is_not_posts() {
        let registry = RenderRegistry::standard();
        assert!(registry.lookup("posts/2024").is_err());
    }

    #[test]
    fn empty_registry_misses_root() {
        let registry = RenderRegistry::from_routes(Vec::<(&str, RenderHandler)>::new());
        let err = registry.lookup("").unwrap_err();
        assert!(matches!(&err, RenderError::UnmappedDirectory(d) if d == "."));
    }

    #[test]
    fn later_route_replaces_earlier() {
        let registry = RenderRegistry::from_routes([
            ("notes", render_page as RenderHandler),
            ("notes/", render_post as RenderHandler),
        ]);
        assert_eq!(registry.keys(), vec!["notes/"]);

        let tmp = TempDir::new().unwrap();
        let config = SiteConfig::default();
        let params = HandlerParams {
            output_root: tmp.path(),
            config: &config,
        };
        let handler = registry.lookup("notes").unwrap();
        let out = handler(&page("2024-02-20-note", "notes"), &params).unwrap();
        assert!(out.component.into_string().contains(r#"<header class="post-header">"#));
    }

    #[test]
    fn render_page_routes_to_output_root() {
        let tmp = TempDir::new().unwrap();
        let config = SiteConfig::default();
        let params = HandlerParams {
            output_root: tmp.path(),
            config: &config,
        };
        let out = render_page(&page("hello-world", ""), &params).unwrap();
        assert_eq!(out.title, "world");
        assert_eq!(out.destination, tmp.path().join("world.html"));
        assert!(out.component.into_string().contains("<p>x</p>"));
    }

    #[test]
    fn render_post_creates_posts_dir() {
        let tmp = TempDir::new().unwrap();
        let config = SiteConfig::default();
        let params = HandlerParams {
            output_root: tmp.path(),
            config: &config,
        };
        let out = render_post(&page("2024-02-20-note", "posts"), &params).unwrap();
        assert_eq!(out.destination, tmp.path().join("posts").join("02-20-note.html"));
        assert!(tmp.path().join("posts").is_dir());
        assert!(out.component.into_string().contains(r#"<header class="post-header">"#));
    }

    #[test]
    fn handler_rejects_unsluggable_name() {
        let tmp = TempDir::new().unwrap();
        let config = SiteConfig::default();
        let params = HandlerParams {
            output_root: tmp.path(),
            config: &config,
        };
        let err = render_page(&page("---", ""), &params).unwrap_err();
        assert!(matches!(err, RenderError::EmptyTitle(_)));
    }
}
