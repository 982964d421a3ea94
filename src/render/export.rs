//! CSV export of extracted spans.

use anyhow::Result;
use serde::Serialize;

use crate::nlp::ner::Span;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    entity: &'a str,
    label: &'a str,
    start: usize,
    end: usize,
}

/// Serialise spans into CSV bytes under an `entity,label,start,end` header.
///
/// The header is written even for an empty result set, so the export always
/// parses and its row count equals the span count.
pub fn to_csv(spans: &[Span]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut buf);
        writer.write_record(["entity", "label", "start", "end"])?;
        for span in spans {
            writer.serialize(CsvRow {
                entity: &span.text,
                label: &span.label,
                start: span.start,
                end: span.end,
            })?;
        }
        writer.flush()?;
    }
    Ok(buf)
}
