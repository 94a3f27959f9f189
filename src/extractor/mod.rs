//! Extraction of exception documentation for whole classes.
//!
//! For each class: enumerate members, resolve each member's exception tags,
//! normalize their comments and build one record per member. Any error
//! aborts the class; no partial record list is returned.

pub mod members;
pub mod tags;

use crate::config::Config;
use crate::error::{ExtractError, ExtractResult};
use crate::model::{ClassSymbol, MemberRef, SymbolTable};
use crate::normalize::{
    HtmlRenderer, HtmlSanitizer, InlineRenderer, MarkupSanitizer, TextNormalizer,
};
use crate::record::{ExceptionTag, MethodRecord, MethodRecordBuilder, Parameter};

pub struct Extractor<'a, R = HtmlRenderer<'a>, S = HtmlSanitizer> {
    table: &'a SymbolTable,
    normalizer: TextNormalizer<R, S>,
}

impl<'a> Extractor<'a> {
    /// Extractor with the HTML renderer and sanitizer. Hierarchy walks end
    /// at the table's root class.
    pub fn new(table: &'a SymbolTable, config: &Config) -> Self {
        let renderer = HtmlRenderer::new(table, config.max_inherit_depth);
        Self::with_normalizer(table, TextNormalizer::new(renderer, HtmlSanitizer))
    }
}

impl<'a, R: InlineRenderer, S: MarkupSanitizer> Extractor<'a, R, S> {
    pub fn with_normalizer(table: &'a SymbolTable, normalizer: TextNormalizer<R, S>) -> Self {
        Self { table, normalizer }
    }

    /// Extract records for the class with the given qualified name.
    pub fn extract(&self, class_name: &str) -> ExtractResult<Vec<MethodRecord>> {
        let class = self
            .table
            .class(class_name)
            .ok_or_else(|| ExtractError::UnknownClass(class_name.to_string()))?;
        self.extract_class(class)
    }

    pub fn extract_class(&self, class: &'a ClassSymbol) -> ExtractResult<Vec<MethodRecord>> {
        let members = members::enumerate(self.table, class)?;
        log::debug!("{}: {} members to analyze", class.name, members.len());
        members
            .into_iter()
            .map(|member| self.build_record(member))
            .collect()
    }

    fn build_record(&self, member: MemberRef<'a>) -> ExtractResult<MethodRecord> {
        let mut builder = MethodRecordBuilder::new(member.qualified_name(), parameters(member)?);
        for tag in tags::resolve(self.table, member)? {
            let comment = self.normalizer.normalize(&tag);
            let exception = ExceptionTag::new(tag.exception_name(), comment).ok_or_else(|| {
                ExtractError::MalformedTag {
                    member: member.to_string(),
                    kind: "throws".to_string(),
                }
            })?;
            builder.tag(exception);
        }
        Ok(builder.build())
    }
}

/// Parameters in declaration order, typed as `qualified type + dimension`.
/// A blank type is malformed even when a dimension follows it.
fn parameters(member: MemberRef<'_>) -> ExtractResult<Vec<Parameter>> {
    member
        .member
        .parameters
        .iter()
        .enumerate()
        .map(|(index, p)| {
            Some(p)
                .filter(|p| !p.type_name.trim().is_empty())
                .and_then(|p| Parameter::new(p.full_type(), p.name.trim()))
                .ok_or_else(|| ExtractError::MalformedParameter {
                    member: member.to_string(),
                    index,
                })
        })
        .collect()
}
