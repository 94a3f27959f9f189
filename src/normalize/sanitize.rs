//! Markup stripping: rendered HTML → plain text.

use super::MarkupSanitizer;
use regex::Regex;
use std::sync::LazyLock;

static RE_HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// Block-level elements separate words.
static RE_BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)</?(?:p|br|hr|div|pre|blockquote|ul|ol|li|dl|dt|dd|table|thead|tbody|tr|td|th|h[1-6])\b[^>]*>",
    )
    .unwrap()
});

static RE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][^>]*>").unwrap());

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub struct HtmlSanitizer;

impl MarkupSanitizer for HtmlSanitizer {
    fn strip(&self, markup: &str) -> String {
        let text = RE_HTML_COMMENT.replace_all(markup, "");
        let text = RE_BLOCK_TAG.replace_all(&text, " ");
        let text = RE_TAG.replace_all(&text, "");
        // Entities decode last so `&lt;b&gt;` stays text.
        let text = html_escape::decode_html_entities(&text);
        RE_WHITESPACE.replace_all(&text, " ").trim().to_string()
    }
}
