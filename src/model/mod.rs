//! Symbol model for parsed documentation.
//!
//! The graph is produced elsewhere (a doclet, a compiler plugin) and handed to
//! us as JSON. Nothing here parses Java source.

pub mod index;
pub mod load;
pub mod tag;

use serde::Deserialize;
use std::fmt;

pub use index::SymbolTable;
pub use tag::{ExceptionalTag, ThrowsTag};

/// One model file: a flat list of classes.
#[derive(Debug, Default, Deserialize)]
pub struct ModelDocument {
    #[serde(default)]
    pub classes: Vec<ClassSymbol>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
}

/// A class or interface with its directly declared members.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassSymbol {
    /// Fully qualified name, e.g. `java.util.ArrayList`
    pub name: String,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub superclass: Option<String>,
    /// Implemented interfaces (for an interface: the interfaces it extends)
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub constructors: Vec<MemberSymbol>,
    #[serde(default)]
    pub methods: Vec<MemberSymbol>,
}

impl ClassSymbol {
    /// Name without package or enclosing class: `a.b.Outer.Inner` → `Inner`.
    pub fn simple_name(&self) -> &str {
        self.name
            .rsplit(['.', '$'])
            .next()
            .unwrap_or(&self.name)
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }
}

/// Source position of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Position {
    pub file: String,
    pub line: u32,
    #[serde(default)]
    pub column: u32,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// A constructor or method as declared in its class.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberSymbol {
    pub name: String,
    #[serde(default)]
    pub position: Option<Position>,
    /// Compiler-generated (bridge methods and the like)
    #[serde(default)]
    pub synthetic: bool,
    #[serde(default)]
    pub parameters: Vec<ParamSymbol>,
    #[serde(default)]
    pub comment: Option<Comment>,
}

impl MemberSymbol {
    /// `(java.lang.String, int[])`
    pub fn signature(&self) -> String {
        let types: Vec<String> = self.parameters.iter().map(ParamSymbol::full_type).collect();
        format!("({})", types.join(", "))
    }

    pub fn identity(&self) -> MemberIdentity {
        MemberIdentity(format!("{}{}", self.name, self.signature()))
    }

    /// True when the comment carries a main description worth inheriting.
    pub fn has_description(&self) -> bool {
        self.comment
            .as_ref()
            .is_some_and(|c| c.body.iter().any(|i| !i.is_blank()))
    }

    /// Block tags with the given name, in declaration order.
    pub fn tags_named<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a BlockTag> + 'a {
        self.comment
            .iter()
            .flat_map(|c| c.tags.iter())
            .filter(move |t| t.kind == kind)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParamSymbol {
    #[serde(rename = "type")]
    pub type_name: String,
    /// Array suffix, e.g. `[]` or `[][]`
    #[serde(default)]
    pub dimension: String,
    pub name: String,
}

impl ParamSymbol {
    pub fn full_type(&self) -> String {
        format!("{}{}", self.type_name, self.dimension)
    }
}

/// Documentation comment: main description plus block tags.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub body: Vec<Inline>,
    #[serde(default)]
    pub tags: Vec<BlockTag>,
}

/// A block tag such as `@throws IOException if the file is gone`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockTag {
    /// Tag name without the `@`
    pub kind: String,
    /// Exception token as written in the comment
    #[serde(default)]
    pub exception: Option<String>,
    /// Qualified exception type, when the documentation tool resolved it
    #[serde(default)]
    pub exception_type: Option<String>,
    #[serde(default)]
    pub body: Vec<Inline>,
}

/// Inline content of a comment or tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Inline {
    /// Raw comment text; may contain HTML
    Text { text: String },
    Code { text: String },
    Literal { text: String },
    Link {
        target: String,
        #[serde(default)]
        label: Option<String>,
    },
    LinkPlain {
        target: String,
        #[serde(default)]
        label: Option<String>,
    },
    InheritDoc,
    Other {
        name: String,
        #[serde(default)]
        text: String,
    },
}

impl Inline {
    fn is_blank(&self) -> bool {
        match self {
            Inline::Text { text } => text.trim().is_empty(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Constructor,
    Method,
}

/// `name + signature`, used to detect overrides and duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberIdentity(String);

impl fmt::Display for MemberIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A member together with the class that declares it.
#[derive(Debug, Clone, Copy)]
pub struct MemberRef<'a> {
    pub class: &'a ClassSymbol,
    pub member: &'a MemberSymbol,
    pub kind: MemberKind,
}

impl<'a> MemberRef<'a> {
    pub fn constructor(class: &'a ClassSymbol, member: &'a MemberSymbol) -> Self {
        Self {
            class,
            member,
            kind: MemberKind::Constructor,
        }
    }

    pub fn method(class: &'a ClassSymbol, member: &'a MemberSymbol) -> Self {
        Self {
            class,
            member,
            kind: MemberKind::Method,
        }
    }

    pub fn is_method(&self) -> bool {
        self.kind == MemberKind::Method
    }

    /// `pkg.Class.method`; constructors use the simple class name.
    pub fn qualified_name(&self) -> String {
        match self.kind {
            MemberKind::Constructor => format!("{}.{}", self.class.name, self.class.simple_name()),
            MemberKind::Method => format!("{}.{}", self.class.name, self.member.name),
        }
    }

    pub fn identity(&self) -> MemberIdentity {
        self.member.identity()
    }

    /// Same declaration, not just the same signature.
    pub fn same_as(&self, other: &MemberRef<'_>) -> bool {
        std::ptr::eq(self.member, other.member)
    }
}

impl fmt::Display for MemberRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.qualified_name(), self.member.signature())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(type_name: &str, dimension: &str, name: &str) -> ParamSymbol {
        ParamSymbol {
            type_name: type_name.to_string(),
            dimension: dimension.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn signature_includes_dimensions() {
        let member = MemberSymbol {
            name: "copy".to_string(),
            position: None,
            synthetic: false,
            parameters: vec![param("java.lang.String", "[]", "src"), param("int", "", "n")],
            comment: None,
        };
        assert_eq!(member.signature(), "(java.lang.String[], int)");
        assert_eq!(member.identity().to_string(), "copy(java.lang.String[], int)");
    }

    #[test]
    fn simple_name_of_nested_class() {
        let class: ClassSymbol =
            serde_json::from_str(r#"{ "name": "a.b.Outer$Inner" }"#).unwrap();
        assert_eq!(class.simple_name(), "Inner");
        assert_eq!(class.kind, ClassKind::Class);
    }

    #[test]
    fn blank_body_is_not_a_description() {
        let member: MemberSymbol = serde_json::from_str(
            r#"{ "name": "m", "comment": { "body": [ { "kind": "text", "text": "  " } ] } }"#,
        )
        .unwrap();
        assert!(!member.has_description());
    }

    #[test]
    fn deserializes_inline_kinds() {
        let inline: Vec<Inline> = serde_json::from_str(
            r#"[
                { "kind": "text", "text": "if " },
                { "kind": "code", "text": "x" },
                { "kind": "linkPlain", "target": "Foo#bar" },
                { "kind": "inheritDoc" }
            ]"#,
        )
        .unwrap();
        assert_eq!(inline.len(), 4);
        assert_eq!(inline[3], Inline::InheritDoc);
        assert!(matches!(inline[2], Inline::LinkPlain { ref label, .. } if label.is_none()));
    }
}
