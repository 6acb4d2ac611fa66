//! Markdown to HTML conversion.
//!
//! A thin layer over [pulldown-cmark](https://docs.rs/pulldown-cmark) with a
//! fixed, non-configurable set of behaviours:
//!
//! - **Common extensions**: tables, footnotes, strikethrough, task lists,
//!   definition lists, explicit heading attributes (`# Title {#custom-id}`)
//!   and smart punctuation.
//! - **Automatic heading IDs**: headings without an explicit id get the slug
//!   of their text; repeats within a document get `-1`, `-2`, … suffixes.
//! - **Blocks without a blank line**: CommonMark already lets headings,
//!   fences, lists and block quotes interrupt a paragraph.
//! - **External links open in a new tab**: absolute links are rendered with
//!   `target="_blank" rel="noopener"`. In-page (`#frag`), root-relative
//!   (`/x`) and `./`/`../` links are left alone.
//!
//! Conversion cannot fail. The grammar is permissive and degrades malformed
//! input to literal text; invalid UTF-8 is replaced, not rejected.

use crate::slug::slugify;
use maud::html;
use pulldown_cmark::html::push_html;
use pulldown_cmark::{CowStr, Event, HeadingLevel, LinkType, Options, Parser, Tag, TagEnd};
use std::collections::HashMap;

/// Parser options shared by every conversion.
pub fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
        | Options::ENABLE_DEFINITION_LIST
        | Options::ENABLE_SMART_PUNCTUATION
}

/// Convert raw markdown bytes to an HTML fragment.
pub fn markdown_to_html(md: &[u8]) -> String {
    let source = String::from_utf8_lossy(md);
    let parser = Parser::new_ext(&source, markdown_options());
    let events = open_external_links_in_new_tab(assign_heading_ids(parser));

    let mut html = String::with_capacity(source.len() * 3 / 2);
    push_html(&mut html, events.into_iter());
    html
}

// ============================================================================
// Heading IDs
// ============================================================================

/// A heading whose start tag is held back until its text is known.
struct OpenHeading<'a> {
    level: HeadingLevel,
    id: Option<CowStr<'a>>,
    classes: Vec<CowStr<'a>>,
    attrs: Vec<(CowStr<'a>, Option<CowStr<'a>>)>,
    inner: Vec<Event<'a>>,
    text: String,
}

/// Ids handed out so far in one document.
#[derive(Default)]
struct HeadingIds {
    seen: HashMap<String, usize>,
}

impl HeadingIds {
    /// Record an explicit id. Returns false if it was already handed out.
    fn reserve(&mut self, id: &str) -> bool {
        if self.seen.contains_key(id) {
            return false;
        }
        self.seen.insert(id.to_string(), 0);
        true
    }

    fn claim(&mut self, base: &str) -> String {
        let mut n = self.seen.get(base).copied().unwrap_or(0);
        let mut candidate = base.to_string();
        while self.seen.contains_key(&candidate) {
            n += 1;
            candidate = format!("{base}-{n}");
        }
        self.seen.insert(base.to_string(), n);
        self.seen.insert(candidate.clone(), 0);
        candidate
    }
}

fn assign_heading_ids<'a>(events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let mut out = Vec::new();
    let mut ids = HeadingIds::default();
    let mut open: Option<OpenHeading<'a>> = None;

    for event in events {
        match event {
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) => {
                open = Some(OpenHeading {
                    level,
                    id,
                    classes,
                    attrs,
                    inner: Vec::new(),
                    text: String::new(),
                });
            }
            Event::End(TagEnd::Heading(level)) => match open.take() {
                Some(heading) => {
                    let id = match heading.id {
                        // Explicit ids are kept as written, even when repeated.
                        Some(explicit) => {
                            if !ids.reserve(&explicit) {
                                tracing::debug!(id = %explicit, "duplicate explicit heading id");
                            }
                            Some(explicit)
                        }
                        None => {
                            let base = slugify(&heading.text);
                            (!base.is_empty()).then(|| CowStr::from(ids.claim(&base)))
                        }
                    };
                    out.push(Event::Start(Tag::Heading {
                        level: heading.level,
                        id,
                        classes: heading.classes,
                        attrs: heading.attrs,
                    }));
                    out.extend(heading.inner);
                    out.push(Event::End(TagEnd::Heading(level)));
                }
                None => out.push(Event::End(TagEnd::Heading(level))),
            },
            other => match open.as_mut() {
                Some(heading) => {
                    if let Event::Text(text) | Event::Code(text) = &other {
                        heading.text.push_str(text);
                    }
                    heading.inner.push(other);
                }
                None => out.push(other),
            },
        }
    }

    out
}

// ============================================================================
// Links
// ============================================================================

fn open_external_links_in_new_tab(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    events
        .into_iter()
        .map(|event| match event {
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                ..
            }) if link_type != LinkType::Email && !is_relative_link(&dest_url) => {
                Event::InlineHtml(external_link_open_tag(&dest_url, &title).into())
            }
            other => other,
        })
        .collect()
}

/// Whether a link stays on the current site.
fn is_relative_link(dest: &str) -> bool {
    dest.is_empty()
        || dest.starts_with('#')
        || dest == "/"
        || (dest.starts_with('/') && !dest.starts_with("//"))
        || dest.starts_with("./")
        || dest.starts_with("../")
}

fn external_link_open_tag(dest: &str, title: &str) -> String {
    let href = html! { (dest) }.into_string();
    if title.is_empty() {
        format!(r#"<a href="{href}" target="_blank" rel="noopener">"#)
    } else {
        let title = html! { (title) }.into_string();
        format!(r#"<a href="{href}" title="{title}" target="_blank" rel="noopener">"#)
    }
}
