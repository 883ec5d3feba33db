//! CSS extraction from host documents.

use std::sync::OnceLock;

use regex::Regex;

use crate::document::ContentType;

/// Matches one inline style block, shortest span, across lines.
///
/// `(?is)` makes the scan case-insensitive with `.` crossing newlines; the
/// lazy body keeps an unterminated opening tag from swallowing the rest of
/// the document up to some unrelated closing tag.
const STYLE_BLOCK_PATTERN: &str = r"(?is)<style[^>]*>(.*?)</style[^>]*>";

#[allow(clippy::expect_used)] // the pattern is a constant known to compile
fn style_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(STYLE_BLOCK_PATTERN).expect("style block pattern is valid"))
}

/// Extracts the CSS content of a document, if any.
///
/// - CSS documents are returned verbatim.
/// - HTML documents yield the bodies of all inline `<style>` blocks, tag
///   delimiters stripped, joined with a newline in source order; `None`
///   when no block is present.
/// - Any other content type yields `None`.
///
/// Malformed markup never fails: a style tag with no closing counterpart
/// simply produces no match.
#[must_use]
pub fn extract_css(text: &str, content_type: ContentType) -> Option<String> {
    match content_type {
        ContentType::Css => Some(text.to_string()),
        ContentType::Html => {
            let bodies: Vec<&str> = style_block()
                .captures_iter(text)
                .filter_map(|captures| captures.get(1))
                .map(|body| body.as_str())
                .collect();
            if bodies.is_empty() {
                None
            } else {
                Some(bodies.join("\n"))
            }
        }
        ContentType::Other => None,
    }
}
