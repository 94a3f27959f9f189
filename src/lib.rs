//! throwsdoc: exception documentation extraction from a Java symbol model.
//!
//! Given an already-parsed class graph, produce one [`record::MethodRecord`]
//! per constructor and method of a class, carrying every `@throws` and
//! `@exception` tag that applies to it: its own, those inherited from the
//! method it overrides, and those of the interface methods it implements.
//! Tag comments are rendered (expanding `{@inheritDoc}`) and reduced to
//! plain text for the condition translator downstream.

pub mod config;
pub mod error;
pub mod extractor;
pub mod model;
pub mod normalize;
pub mod record;
pub mod sink;
pub mod translator;

pub use config::Config;
pub use error::{ExtractError, ExtractResult};
pub use extractor::Extractor;
pub use record::{ExceptionTag, MethodRecord, Parameter};
