//! URL slugs for output file names and heading anchors.

/// Turn arbitrary text into a lowercase, hyphen-separated, URL-safe token.
///
/// Non-ASCII text is transliterated first. ASCII letters and digits are then
/// kept (lowercased); every run of anything else collapses into a single
/// hyphen. Leading and trailing hyphens are dropped.
///
/// - `"Hello, World!"` → `"hello-world"`
/// - `"café crème"` → `"cafe-creme"`
/// - `"01-01-my-post"` → `"01-01-my-post"`
/// - `"  --  "` → `""`
pub fn slugify(text: &str) -> String {
    let ascii = deunicode::deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_hyphen = false;
    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}
