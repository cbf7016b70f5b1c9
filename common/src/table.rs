//! Comma-separated encoding of extraction records

use crate::types::ExtractionRecord;
use std::borrow::Cow;
use std::io::Write;

/// Header row
pub const CSV_HEADER: &str = "location,drone_type";

/// Quotes a field when it holds a comma, quote or line break.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Writes the header followed by one row per record.
pub fn write_csv<W: Write>(mut writer: W, records: &[ExtractionRecord]) -> std::io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for record in records {
        writeln!(
            writer,
            "{},{}",
            escape_field(&record.location),
            escape_field(&record.drone_type)
        )?;
    }
    writer.flush()
}
