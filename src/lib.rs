//! # Simple Blog
//!
//! A minimal static blog generator. Your filesystem is the data source:
//! every markdown file under the source root becomes one HTML page at the
//! mirrored location in the output root.
//!
//! ```text
//! blog/                              docs/
//! ├── README.md          (skipped)
//! ├── hello-world.md        ──────→  ├── world.html
//! └── posts/                         └── posts/
//!     └── 2024-02-20-note.md ─────→      └── 02-20-note.html
//! ```
//!
//! # Architecture: One Sequential Pass
//!
//! ```text
//! discover → read → markdown → PageMetadata → registry lookup → handler → write
//! ```
//!
//! Each file is processed on its own, one after the other. The first failure
//! stops the run and is returned to the caller; the CLI turns it into a
//! diagnostic and a non-zero exit status.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`discover`] | Walks the source root and collects `.md` files (minus `README.md`) |
//! | [`markdown`] | Markdown → HTML with a fixed extension set via pulldown-cmark |
//! | [`slug`] | Lowercase hyphenated slugs |
//! | [`naming`] | Output title from a file name (`2024-02-20-note` → `02-20-note`) |
//! | [`paths`] | Destination paths in the output tree, creating directories |
//! | [`render`] | Directory → handler registry and the page/post handlers |
//! | [`templates`] | Maud components: document shell, layouts, footer |
//! | [`pipeline`] | The driver: `build`, `plan`, and the template-free `build_raw` |
//! | [`config`] | Optional `config.toml` in the source root |
//! | [`types`] | Types shared between stages (`PageMetadata`, `BuildReport`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Routing by Directory
//!
//! Which layout a page gets depends only on the directory it lives in. The
//! [`render::RenderRegistry`] is built once at startup and handed to the
//! driver by reference; there is no global state. A directory without a
//! registered handler is an error, not a silent fallback, so new content
//! directories have to be wired up on purpose.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): templates are
//! checked at compile time, interpolation is escaped by default, and there is
//! no template directory to ship.

pub mod config;
pub mod discover;
pub mod markdown;
pub mod naming;
pub mod output;
pub mod paths;
pub mod pipeline;
pub mod render;
pub mod slug;
pub mod templates;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
