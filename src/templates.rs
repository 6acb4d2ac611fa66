//! HTML components.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Every page is a document shell around a layout, with the site footer at
//! the bottom. Converted markdown is inserted as-is; everything else is
//! auto-escaped.
//!
//! The stylesheet is embedded at compile time from `static/style.css`.

use crate::config::SiteConfig;
use crate::naming::display_title;
use crate::types::PageMetadata;
use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fmt::Write as _;
use std::io;

const CSS: &str = include_str!("../static/style.css");

/// Format a date with a strftime format, falling back to ISO dates if the
/// format is invalid.
pub fn format_date(date: &DateTime<Utc>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// `<title>` text: the page title followed by the site title.
pub fn document_title(config: &SiteConfig, title: &str) -> String {
    format!("{} | {}", display_title(title), config.title)
}

/// Write a rendered component into a sink.
pub fn render_component<W: io::Write>(component: &Markup, sink: &mut W) -> io::Result<()> {
    sink.write_all(component.0.as_bytes())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
pub fn base_document(
    config: &SiteConfig,
    title: &str,
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(config.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Renders the footer shared by every page
pub fn site_footer(config: &SiteConfig, date: &DateTime<Utc>) -> Markup {
    let footer = &config.footer;
    html! {
        footer.site-footer {
            @if !footer.text.is_empty() {
                p.footer-text { (footer.text) }
            }
            @if footer.show_date {
                p.footer-date {
                    "Last updated "
                    time datetime=(date.to_rfc3339()) { (format_date(date, &footer.date_format)) }
                }
            }
        }
    }
}

// ============================================================================
// Layouts
// ============================================================================

/// Top-level page: the converted markdown, then the footer.
pub fn page_layout(config: &SiteConfig, page: &PageMetadata, title: &str) -> Markup {
    let content = html! {
        main.page {
            article.page-content {
                (page.content)
            }
        }
        (site_footer(config, &page.date_utc()))
    };

    base_document(config, &document_title(config, title), None, content)
}

/// Post: a dated header above the converted markdown, then the footer.
pub fn post_layout(config: &SiteConfig, page: &PageMetadata, title: &str) -> Markup {
    let date = page.date_utc();
    let content = html! {
        main.post {
            article.post-content {
                header.post-header {
                    time datetime=(date.to_rfc3339()) {
                        (format_date(&date, &config.footer.date_format))
                    }
                }
                (page.content)
            }
        }
        (site_footer(config, &date))
    };

    base_document(config, &document_title(config, title), Some("post"), content)
}
