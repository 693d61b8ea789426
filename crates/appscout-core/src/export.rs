use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::collection::AccumulatedCollection;
use crate::error::ExportError;

pub const CSV_HEADERS: [&str; 4] = ["App Name", "App Store URL", "App Bundle ID", "Publisher"];

/// Serialize the accumulated results as CSV.
///
/// The header row is written bare; every data field is quoted, with inner
/// quotes doubled. Embedded newlines are left inside the quotes as-is.
pub fn to_csv(collection: &AccumulatedCollection) -> Result<String, ExportError> {
    if collection.is_empty() {
        return Err(ExportError::NoResults);
    }

    let mut out = CSV_HEADERS.join(",");
    out.push('\n');

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out.into_bytes());

    for record in collection.iter() {
        writer
            .write_record([
                record.app_name.as_str(),
                record.app_store_url.as_str(),
                record.bundle_id.as_str(),
                record.publisher.as_str(),
            ])
            .map_err(|e| ExportError::Csv(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Csv(e.to_string()))
}

/// Download name for an export made on `date`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("ios_app_info_{}.csv", date.format("%Y-%m-%d"))
}
