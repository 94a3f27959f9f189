//! Error types for extraction, model loading and output.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions for one class's extraction. None of them are retried;
/// the class produces no records.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unknown class: {0}")]
    UnknownClass(String),

    /// Implicit constructors are detected by position, so it must be known.
    #[error("{member}: missing source position, cannot tell implicit constructors apart")]
    MissingPosition { member: String },

    #[error("inheritance cycle through {0}")]
    InheritanceCycle(String),

    /// A tag that is not a usable @throws/@exception tag reached resolution.
    #[error("{member}: @{kind} tag is not an exception tag")]
    MalformedTag { member: String, kind: String },

    #[error("{member}: parameter {index} has an empty type or name")]
    MalformedParameter { member: String, index: usize },
}

pub type ExtractResult<T> = Result<T, ExtractError>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported model file: {}", .0.display())]
    Unsupported(PathBuf),

    #[error("invalid model {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("unknown format: {0}. Use json or text")]
    UnknownFormat(String),

    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },
}
