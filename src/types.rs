//! Shared types passed between discovery, dispatch, and the driver.

use chrono::{DateTime, Utc};
use maud::{Markup, PreEscaped};
use serde::Serialize;
use std::path::PathBuf;
use std::time::SystemTime;

/// Everything a render handler knows about one source file.
///
/// Built once per file by the driver and consumed by exactly one handler.
#[derive(Debug, Clone)]
pub struct PageMetadata {
    /// Modification time of the source file.
    pub date: SystemTime,
    /// Source file name without its extension (`2024-02-20-note`).
    pub file_name: String,
    /// Directory relative to the source root, `/`-separated. Empty for the root.
    pub dir: String,
    /// Converted markdown, already HTML.
    pub content: Markup,
}

impl PageMetadata {
    pub fn new(date: SystemTime, file_name: &str, dir: &str, html: String) -> Self {
        Self {
            date,
            file_name: file_name.to_string(),
            dir: dir.to_string(),
            content: PreEscaped(html),
        }
    }

    /// Modification time as a UTC timestamp.
    pub fn date_utc(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from(self.date)
    }
}

/// One output file written (or planned) by the driver.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPage {
    /// Derived URL title (`02-20-note`).
    pub title: String,
    /// Source directory relative to the source root. Empty for the root.
    pub dir: String,
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Result of a full run, in processing order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    pub pages: Vec<GeneratedPage>,
}
