//! Plain-text output for reading at a terminal.
//!
//! ```text
//! p.A.m(int x)
//!   @throws java.io.IOException if closed
//! ```

use super::RecordFormatter;
use crate::error::SinkError;
use crate::record::MethodRecord;

pub struct TextFormatter;

impl RecordFormatter for TextFormatter {
    fn format(&self, records: &[MethodRecord]) -> Result<String, SinkError> {
        let mut out = String::new();
        for record in records {
            out.push_str(&record.signature());
            out.push('\n');
            for tag in record.exception_tags() {
                out.push_str("  ");
                out.push_str(tag.to_string().trim_end());
                out.push('\n');
            }
        }
        Ok(out)
    }
}
