//! HTML rendering of tag inline content, as a doclet would emit it.
//!
//! `{@inheritDoc}` inside an exception tag pulls in the text of the same
//! exception's tag from the overridden method chain, then from implemented
//! interface methods. Expansion is bounded by depth and never re-enters a
//! member already on the expansion path.

use super::InlineRenderer;
use crate::model::tag::exceptional_tags;
use crate::model::{ExceptionalTag, Inline, MemberRef, SymbolTable, ThrowsTag};
use html_escape::{encode_double_quoted_attribute, encode_text};

pub struct HtmlRenderer<'a> {
    table: &'a SymbolTable,
    max_depth: usize,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(table: &'a SymbolTable, max_depth: usize) -> Self {
        Self { table, max_depth }
    }

    fn render_inline<'t>(
        &self,
        tag: ThrowsTag<'t>,
        inline: &'t [Inline],
        trail: &mut Vec<MemberRef<'t>>,
        out: &mut String,
    ) where
        'a: 't,
    {
        for item in inline {
            match item {
                Inline::Text { text } => out.push_str(text),
                Inline::Code { text } => {
                    out.push_str("<code>");
                    out.push_str(&encode_text(text));
                    out.push_str("</code>");
                }
                Inline::Literal { text } | Inline::Other { text, .. } => {
                    out.push_str(&encode_text(text))
                }
                Inline::Link { target, label } => {
                    out.push_str(&format!(
                        "<a href=\"{}\"><code>{}</code></a>",
                        encode_double_quoted_attribute(target),
                        encode_text(&link_label(target, label.as_deref()))
                    ));
                }
                Inline::LinkPlain { target, label } => {
                    out.push_str(&format!(
                        "<a href=\"{}\">{}</a>",
                        encode_double_quoted_attribute(target),
                        encode_text(&link_label(target, label.as_deref()))
                    ));
                }
                Inline::InheritDoc => self.render_inherited(tag, trail, out),
            }
        }
    }

    fn render_inherited<'t>(
        &self,
        tag: ThrowsTag<'t>,
        trail: &mut Vec<MemberRef<'t>>,
        out: &mut String,
    ) where
        'a: 't,
    {
        if trail.len() > self.max_depth {
            log::warn!(
                "{}: {{@inheritDoc}} for {} nested deeper than {} levels, dropped",
                tag.owner,
                tag.exception,
                self.max_depth
            );
            return;
        }

        let table: &'t SymbolTable = self.table;
        let candidates = table
            .override_chain(tag.owner)
            .chain(table.implemented_methods(tag.owner));
        for candidate in candidates {
            if trail.iter().any(|m| m.same_as(&candidate)) {
                continue;
            }
            let inherited = exceptional_tags(candidate).find_map(|t| match t {
                ExceptionalTag::Throws(t) if t.documents(&tag) => Some(t),
                _ => None,
            });
            if let Some(inherited) = inherited {
                trail.push(candidate);
                self.render_inline(inherited, inherited.body, trail, out);
                trail.pop();
                return;
            }
        }

        log::warn!(
            "{}: nothing to inherit for {{@inheritDoc}} of {}",
            tag.owner,
            tag.exception
        );
    }
}

impl InlineRenderer for HtmlRenderer<'_> {
    fn render(&self, tag: &ThrowsTag<'_>, inline: &[Inline]) -> String {
        let mut out = String::new();
        let mut trail = vec![tag.owner];
        self.render_inline(*tag, inline, &mut trail, &mut out);
        out
    }
}

/// Explicit label, else the target with `#` shown as `.`: `List#add` → `List.add`.
fn link_label(target: &str, label: Option<&str>) -> String {
    match label.map(str::trim).filter(|l| !l.is_empty()) {
        Some(label) => label.to_string(),
        None => target.trim_start_matches('#').replace('#', "."),
    }
}
