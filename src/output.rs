//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every generated page is shown by its positional index and derived title,
//! with the destination after an arrow and the source file as an indented
//! `Source:` line. Pages are grouped under their registry key, in the order
//! the build reached them:
//!
//! ```text
//! ./
//!     001 about → about.html
//!         Source: about.md
//!     002 world → world.html
//!         Source: hello-world.md
//! posts/
//!     001 01-01-my-post → posts/01-01-my-post.html
//!         Source: posts/2024-01-01-my-post.md
//!
//! Generated 3 pages in 2 directories
//! ```
//!
//! # Architecture
//!
//! `format_*` functions return `Vec<String>` and are pure; `print_*` wrappers
//! write them to stdout.

use crate::render::dir_key;
use crate::types::{BuildReport, GeneratedPage};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `path` relative to `root` with `/` separators, or the full path if it is
/// outside `root`.
fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Group pages by directory, keeping first-appearance order.
fn group_by_dir(pages: &[GeneratedPage]) -> Vec<(&str, Vec<&GeneratedPage>)> {
    let mut groups: Vec<(&str, Vec<&GeneratedPage>)> = Vec::new();
    for page in pages {
        match groups.iter().position(|(dir, _)| *dir == page.dir) {
            Some(i) => groups[i].1.push(page),
            None => groups.push((page.dir.as_str(), vec![page])),
        }
    }
    groups
}

/// Format a build report.
///
/// `verb` leads the summary line ("Generated", "Would generate").
pub fn format_report(
    report: &BuildReport,
    source_root: &Path,
    output_root: &Path,
    verb: &str,
) -> Vec<String> {
    let mut lines = Vec::new();
    let groups = group_by_dir(&report.pages);

    for (dir, pages) in &groups {
        lines.push(dir_key(dir));
        for (i, page) in pages.iter().enumerate() {
            lines.push(format!(
                "{}{} {} \u{2192} {}",
                indent(1),
                format_index(i + 1),
                page.title,
                display_relative(&page.destination, output_root)
            ));
            lines.push(format!(
                "{}Source: {}",
                indent(2),
                display_relative(&page.source, source_root)
            ));
        }
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "{} {} in {}",
        verb,
        count(report.pages.len(), "page", "pages"),
        count(groups.len(), "directory", "directories")
    ));
    lines
}

/// Print a finished build to stdout.
pub fn print_build_output(report: &BuildReport, source_root: &Path, output_root: &Path) {
    for line in format_report(report, source_root, output_root, "Generated") {
        println!("{}", line);
    }
}

/// Print a build plan to stdout.
pub fn print_plan_output(report: &BuildReport, source_root: &Path, output_root: &Path) {
    for line in format_report(report, source_root, output_root, "Would generate") {
        println!("{}", line);
    }
}
