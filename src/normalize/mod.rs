//! Text normalization: render a tag's inline content, then strip markup.

pub mod render;
pub mod sanitize;

use crate::model::{Inline, ThrowsTag};

pub use render::HtmlRenderer;
pub use sanitize::HtmlSanitizer;

/// Turns a tag's inline content into markup, expanding inline tags.
pub trait InlineRenderer {
    fn render(&self, tag: &ThrowsTag<'_>, inline: &[Inline]) -> String;
}

/// Removes all markup from a rendered string.
pub trait MarkupSanitizer {
    fn strip(&self, markup: &str) -> String;
}

pub struct TextNormalizer<R, S> {
    renderer: R,
    sanitizer: S,
}

impl<R: InlineRenderer, S: MarkupSanitizer> TextNormalizer<R, S> {
    pub fn new(renderer: R, sanitizer: S) -> Self {
        Self {
            renderer,
            sanitizer,
        }
    }

    /// Plain-text comment of an exception tag.
    pub fn normalize(&self, tag: &ThrowsTag<'_>) -> String {
        let markup = self.renderer.render(tag, tag.body);
        self.sanitizer.strip(&markup)
    }
}
