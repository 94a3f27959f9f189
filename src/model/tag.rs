//! Exception tags as seen by the resolver.

use super::{BlockTag, Inline, MemberRef};

pub const THROWS: &str = "throws";
pub const EXCEPTION: &str = "exception";

/// A block tag pulled from an exception tag list. Only `Throws` can be
/// processed; anything else reaching the resolver is a caller bug.
#[derive(Debug, Clone, Copy)]
pub enum ExceptionalTag<'a> {
    Throws(ThrowsTag<'a>),
    Invalid { owner: MemberRef<'a>, kind: &'a str },
}

impl<'a> ExceptionalTag<'a> {
    pub fn classify(owner: MemberRef<'a>, tag: &'a BlockTag) -> Self {
        let is_exception_kind = tag.kind == THROWS || tag.kind == EXCEPTION;
        let exception = tag
            .exception
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty());
        match (is_exception_kind, exception) {
            (true, Some(exception)) => ExceptionalTag::Throws(ThrowsTag {
                owner,
                exception,
                exception_type: tag
                    .exception_type
                    .as_deref()
                    .map(str::trim)
                    .filter(|t| !t.is_empty()),
                body: &tag.body,
            }),
            _ => ExceptionalTag::Invalid {
                owner,
                kind: &tag.kind,
            },
        }
    }
}

/// A `@throws`/`@exception` tag together with the member it is written on.
#[derive(Debug, Clone, Copy)]
pub struct ThrowsTag<'a> {
    pub owner: MemberRef<'a>,
    /// Exception token as written
    pub exception: &'a str,
    /// Resolved qualified type, if any
    pub exception_type: Option<&'a str>,
    pub body: &'a [Inline],
}

impl<'a> ThrowsTag<'a> {
    /// Qualified type when resolved, otherwise the literal token.
    pub fn exception_name(&self) -> &'a str {
        self.exception_type.unwrap_or(self.exception)
    }

    /// Whether this tag documents the exception another tag names.
    pub fn documents(&self, other: &ThrowsTag<'_>) -> bool {
        if let (Some(mine), Some(theirs)) = (self.exception_type, other.exception_type) {
            return mine == theirs;
        }
        self.exception == other.exception
            || self.exception_type == Some(other.exception)
            || other.exception_type == Some(self.exception)
    }
}

/// `@throws` tags of a member followed by its `@exception` tags.
pub fn exceptional_tags<'a>(owner: MemberRef<'a>) -> impl Iterator<Item = ExceptionalTag<'a>> {
    owner
        .member
        .tags_named(THROWS)
        .chain(owner.member.tags_named(EXCEPTION))
        .map(move |tag| ExceptionalTag::classify(owner, tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassSymbol, MemberSymbol};

    fn class_with(json: &str) -> ClassSymbol {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn throws_before_exception_tags() {
        let class = class_with(
            r#"{ "name": "p.A", "methods": [ { "name": "m", "comment": { "tags": [
                { "kind": "exception", "exception": "E1" },
                { "kind": "param" },
                { "kind": "throws", "exception": "E2" }
            ] } } ] }"#,
        );
        let owner = MemberRef::method(&class, &class.methods[0]);
        let names: Vec<&str> = exceptional_tags(owner)
            .map(|t| match t {
                ExceptionalTag::Throws(t) => t.exception,
                ExceptionalTag::Invalid { kind, .. } => kind,
            })
            .collect();
        assert_eq!(names, vec!["E2", "E1"]);
    }

    #[test]
    fn missing_exception_token_is_invalid() {
        let class = class_with(
            r#"{ "name": "p.A", "methods": [ { "name": "m", "comment": { "tags": [
                { "kind": "throws", "exception": "  " }
            ] } } ] }"#,
        );
        let owner = MemberRef::method(&class, &class.methods[0]);
        let tags: Vec<_> = exceptional_tags(owner).collect();
        assert!(matches!(tags[0], ExceptionalTag::Invalid { kind: "throws", .. }));
    }

    #[test]
    fn other_kinds_are_invalid() {
        let class = class_with(r#"{ "name": "p.A", "methods": [ { "name": "m" } ] }"#);
        let member: &MemberSymbol = &class.methods[0];
        let tag = BlockTag {
            kind: "return".to_string(),
            exception: Some("E".to_string()),
            exception_type: None,
            body: vec![],
        };
        let owner = MemberRef::method(&class, member);
        assert!(matches!(
            ExceptionalTag::classify(owner, &tag),
            ExceptionalTag::Invalid { kind: "return", .. }
        ));
    }

    #[test]
    fn exception_name_prefers_resolved_type() {
        let class = class_with(
            r#"{ "name": "p.A", "methods": [ { "name": "m", "comment": { "tags": [
                { "kind": "throws", "exception": "IOException", "exceptionType": "java.io.IOException" },
                { "kind": "throws", "exception": "MissingException" }
            ] } } ] }"#,
        );
        let owner = MemberRef::method(&class, &class.methods[0]);
        let names: Vec<&str> = exceptional_tags(owner)
            .filter_map(|t| match t {
                ExceptionalTag::Throws(t) => Some(t.exception_name()),
                ExceptionalTag::Invalid { .. } => None,
            })
            .collect();
        assert_eq!(names, vec!["java.io.IOException", "MissingException"]);
    }
}
