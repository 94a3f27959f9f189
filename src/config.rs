//! Run settings, passed explicitly to the extractor and the output sink.

use std::path::PathBuf;

/// Class where superclass walks end.
pub const DEFAULT_ROOT_CLASS: &str = "java.lang.Object";

/// Nesting limit for `{@inheritDoc}` expansion.
pub const DEFAULT_MAX_INHERIT_DEPTH: usize = 8;

pub const DEFAULT_FORMAT: &str = "json";

#[derive(Debug, Clone)]
pub struct Config {
    pub root_class: String,
    pub max_inherit_depth: usize,
    /// Output format name: json or text
    pub format: String,
    /// Output file; stdout when `None`
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_class: DEFAULT_ROOT_CLASS.to_string(),
            max_inherit_depth: DEFAULT_MAX_INHERIT_DEPTH,
            format: DEFAULT_FORMAT.to_string(),
            output: None,
        }
    }
}
