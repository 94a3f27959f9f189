//! JSON output: the record list as a pretty-printed array.

use super::RecordFormatter;
use crate::error::SinkError;
use crate::record::MethodRecord;

pub struct JsonFormatter;

impl RecordFormatter for JsonFormatter {
    fn format(&self, records: &[MethodRecord]) -> Result<String, SinkError> {
        let mut out = serde_json::to_string_pretty(records)?;
        out.push('\n');
        Ok(out)
    }
}
