//! Build driver.
//!
//! Runs the whole site build in a single sequential pass:
//!
//! ```text
//! discover blog/ ─┬─ read bytes ─ markdown → HTML ─ PageMetadata
//!                 │
//!                 └─ registry lookup (dir) ─ handler ─ create file ─ render
//! ```
//!
//! The first failure of any step ends the build and is returned to the
//! caller. Pages written before the failure stay on disk; nothing after it is
//! attempted. Each destination file is flushed and closed before the next
//! source is read.
//!
//! [`build_raw`] is the template-free variant: it writes the converted HTML
//! next to each source file, with no registry and no title derivation.
//! [`plan`] computes what [`build`] would write without reading sources or
//! touching the output tree.

use crate::config::SiteConfig;
use crate::discover::{DiscoverError, SourceFile, discover};
use crate::markdown::markdown_to_html;
use crate::naming::derive_title;
use crate::paths::destination_for;
use crate::render::{HandlerParams, RenderError, RenderRegistry};
use crate::templates::render_component;
use crate::types::{BuildReport, GeneratedPage, PageMetadata};
use maud::Markup;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Default source root.
pub const DEFAULT_SOURCE_DIR: &str = "blog";
/// Default output root.
pub const DEFAULT_OUTPUT_DIR: &str = "docs";

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Discover(#[from] DiscoverError),
    #[error("Cannot read file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Cannot create file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot render component into {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Source and output roots for a build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub source: PathBuf,
    pub output: PathBuf,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Directory of `path` relative to `root`, `/`-separated, empty for the root.
pub fn relative_dir(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .parent()
        .map(|parent| {
            parent
                .components()
                .filter_map(|c| match c {
                    Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default()
}

/// File name without its extension.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn page_metadata(root: &Path, file: &SourceFile, html: String) -> PageMetadata {
    PageMetadata::new(
        file.modified,
        &file_stem(&file.path),
        &relative_dir(root, &file.path),
        html,
    )
}

fn read_source(path: &Path) -> Result<Vec<u8>, BuildError> {
    fs::read(path).map_err(|source| BuildError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Create `path` and render `component` into it, flushing before returning.
fn write_component(path: &Path, component: &Markup) -> Result<(), BuildError> {
    let file = File::create(path).map_err(|source| BuildError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    render_component(component, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|source| BuildError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Render every markdown file under `options.source` into `options.output`.
pub fn build(
    options: &BuildOptions,
    registry: &RenderRegistry,
    config: &SiteConfig,
) -> Result<BuildReport, BuildError> {
    let sources = discover(&options.source)?;
    let params = HandlerParams {
        output_root: &options.output,
        config,
    };

    let mut report = BuildReport::default();
    for file in &sources {
        let md = read_source(&file.path)?;
        let page = page_metadata(&options.source, file, markdown_to_html(&md));

        let handler = registry.lookup(&page.dir)?;
        let output = handler(&page, &params)?;
        write_component(&output.destination, &output.component)?;

        tracing::debug!(
            source = %file.path.display(),
            destination = %output.destination.display(),
            "rendered page"
        );
        report.pages.push(GeneratedPage {
            title: output.title,
            dir: page.dir,
            source: file.path.clone(),
            destination: output.destination,
        });
    }

    tracing::info!(
        pages = report.pages.len(),
        output = %options.output.display(),
        "build finished"
    );
    Ok(report)
}

/// Compute the pages [`build`] would write, without reading or writing files.
///
/// Fails the same way a build would on walk errors, unmapped directories
/// and unusable file names.
pub fn plan(options: &BuildOptions, registry: &RenderRegistry) -> Result<BuildReport, BuildError> {
    let mut report = BuildReport::default();
    for file in discover(&options.source)? {
        let page = page_metadata(&options.source, &file, String::new());
        registry.lookup(&page.dir)?;

        let title = derive_title(&page.file_name);
        if title.is_empty() {
            return Err(RenderError::EmptyTitle(page.file_name).into());
        }
        let destination = destination_for(&options.output, &title, &page);
        report.pages.push(GeneratedPage {
            title,
            dir: page.dir,
            source: file.path,
            destination,
        });
    }
    Ok(report)
}

/// Write each file's converted HTML next to it as `<stem>.html`.
///
/// No templates, registry, or title derivation are involved.
pub fn build_raw(source_root: &Path) -> Result<BuildReport, BuildError> {
    let mut report = BuildReport::default();
    for file in discover(source_root)? {
        let md = read_source(&file.path)?;
        let html = markdown_to_html(&md);
        let destination = file.path.with_extension("html");

        let out = File::create(&destination).map_err(|source| BuildError::Create {
            path: destination.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(out);
        writer
            .write_all(html.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|source| BuildError::Write {
                path: destination.clone(),
                source,
            })?;

        tracing::debug!(destination = %destination.display(), "wrote raw html");
        report.pages.push(GeneratedPage {
            title: file_stem(&file.path),
            dir: relative_dir(source_root, &file.path),
            source: file.path,
            destination,
        });
    }
    Ok(report)
}
