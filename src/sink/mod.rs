//! Output sinks with trait-based format dispatch.
//!
//! A sink formats the whole record list before touching its destination, so
//! a serialization failure never leaves a half-written file behind.

pub mod json;
pub mod text;

use crate::config::Config;
use crate::error::SinkError;
use crate::record::MethodRecord;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Receives the final records of a run and persists them.
pub trait OutputSink {
    fn accept(&mut self, records: &[MethodRecord]) -> Result<(), SinkError>;
}

/// Turns records into a serialized string.
pub trait RecordFormatter {
    fn format(&self, records: &[MethodRecord]) -> Result<String, SinkError>;
}

/// Create a formatter for the given format name.
pub fn create_formatter(format: &str) -> Result<Box<dyn RecordFormatter>, SinkError> {
    match format {
        "json" => Ok(Box::new(json::JsonFormatter)),
        "text" | "txt" => Ok(Box::new(text::TextFormatter)),
        _ => Err(SinkError::UnknownFormat(format.to_string())),
    }
}

/// Create the sink described by the run configuration.
pub fn create_sink(config: &Config) -> Result<Box<dyn OutputSink>, SinkError> {
    let formatter = create_formatter(&config.format)?;
    let destination = match &config.output {
        Some(path) => Destination::File(path.clone()),
        None => Destination::Stdout,
    };
    Ok(Box::new(FormattedSink {
        formatter,
        destination,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

pub struct FormattedSink {
    formatter: Box<dyn RecordFormatter>,
    destination: Destination,
}

impl OutputSink for FormattedSink {
    fn accept(&mut self, records: &[MethodRecord]) -> Result<(), SinkError> {
        let output = self.formatter.format(records)?;
        match &self.destination {
            Destination::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(output.as_bytes())
                    .and_then(|_| stdout.flush())
                    .map_err(|source| SinkError::Io {
                        target: "stdout".to_string(),
                        source,
                    })
            }
            Destination::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).map_err(|source| SinkError::Io {
                        target: parent.display().to_string(),
                        source,
                    })?;
                }
                fs::write(path, output).map_err(|source| SinkError::Io {
                    target: path.display().to_string(),
                    source,
                })?;
                log::info!("wrote {} records to {}", records.len(), path.display());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ExceptionTag, MethodRecordBuilder, Parameter};
    use tempfile::TempDir;

    fn records() -> Vec<MethodRecord> {
        let mut builder =
            MethodRecordBuilder::new("p.A.m", vec![Parameter::new("int", "x").unwrap()]);
        builder.tag(ExceptionTag::new("java.io.IOException", "if closed").unwrap());
        vec![builder.build()]
    }

    #[test]
    fn unknown_format_rejected() {
        let config = Config {
            format: "xml".to_string(),
            ..Config::default()
        };
        assert!(matches!(create_sink(&config), Err(SinkError::UnknownFormat(f)) if f == "xml"));
    }

    #[test]
    fn file_sink_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/records.json");
        let config = Config {
            output: Some(path.clone()),
            ..Config::default()
        };
        create_sink(&config).unwrap().accept(&records()).unwrap();

        let written = fs::read_to_string(path).unwrap();
        let back: Vec<MethodRecord> = serde_json::from_str(&written).unwrap();
        assert_eq!(back, records());
    }
}
