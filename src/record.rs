//! Output records, one per constructor or method.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A formal parameter: type with array suffix, and declared name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(rename = "type")]
    type_name: String,
    name: String,
}

impl Parameter {
    /// `None` when either part is empty.
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Option<Self> {
        let type_name = type_name.into();
        let name = name.into();
        if type_name.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self { type_name, name })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name, self.name)
    }
}

/// An exception a member documents, with its plain-text condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionTag {
    #[serde(rename = "exception")]
    exception_name: String,
    comment: String,
}

impl ExceptionTag {
    /// `None` when the exception name is empty.
    pub fn new(exception_name: impl Into<String>, comment: impl Into<String>) -> Option<Self> {
        let exception_name = exception_name.into();
        if exception_name.is_empty() {
            return None;
        }
        Some(Self {
            exception_name,
            comment: comment.into(),
        })
    }

    pub fn exception_name(&self) -> &str {
        &self.exception_name
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

impl fmt::Display for ExceptionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@throws {} {}", self.exception_name, self.comment)
    }
}

/// Extracted specification of one member. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRecord {
    name: String,
    parameters: Vec<Parameter>,
    #[serde(rename = "throwsTags")]
    exception_tags: Vec<ExceptionTag>,
}

impl MethodRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn exception_tags(&self) -> &[ExceptionTag] {
        &self.exception_tags
    }

    /// `pkg.Class.method(java.lang.String s, int[] values)`
    pub fn signature(&self) -> String {
        let params: Vec<String> = self.parameters.iter().map(ToString::to_string).collect();
        format!("{}({})", self.name, params.join(", "))
    }
}

impl fmt::Display for MethodRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}

/// Accumulates tags for a record. `build` consumes the builder, so a
/// finalized record cannot take more tags.
#[derive(Debug)]
pub struct MethodRecordBuilder {
    name: String,
    parameters: Vec<Parameter>,
    exception_tags: Vec<ExceptionTag>,
}

impl MethodRecordBuilder {
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        Self {
            name: name.into(),
            parameters,
            exception_tags: Vec::new(),
        }
    }

    pub fn tag(&mut self, tag: ExceptionTag) -> &mut Self {
        self.exception_tags.push(tag);
        self
    }

    pub fn build(self) -> MethodRecord {
        MethodRecord {
            name: self.name,
            parameters: self.parameters,
            exception_tags: self.exception_tags,
        }
    }
}
