//! Model loading, dispatched by file extension.

use super::ModelDocument;
use crate::error::LoadError;
use std::path::Path;

/// Parse a model file into a document based on its extension.
pub fn parse_file(path: &Path, content: &str) -> Result<ModelDocument, LoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => parse_json(content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        }),
        _ => Err(LoadError::Unsupported(path.to_path_buf())),
    }
}

/// Parse a JSON model document (also used for stdin).
pub fn parse_json(content: &str) -> Result<ModelDocument, serde_json::Error> {
    serde_json::from_str(content)
}
