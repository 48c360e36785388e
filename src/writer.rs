//! Document assembly and the single write to the sink.

use crate::document::{Document, Encoding, PresentationDescriptor};
use crate::error::{Result, SeedError};
use crate::record::Dataset;
use crate::sink::Sink;

/// What a successful write produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub target: String,
    pub records: usize,
    pub bytes_written: usize,
}

/// Wrap `records` and `descriptor` in a document, encode it and hand the
/// whole text to `sink` in one call.
///
/// Records keep their order and the descriptor is copied as given. Sink
/// failures surface as `WriteError` and are not retried.
pub fn assemble_and_write(
    records: Dataset,
    descriptor: PresentationDescriptor,
    sink: &mut dyn Sink,
    encoding: Encoding,
) -> Result<WriteReport> {
    let document = Document::new(records, descriptor);
    write_document(&document, sink, encoding)
}

/// Encode an already assembled document and write it to `sink`.
pub fn write_document(
    document: &Document,
    sink: &mut dyn Sink,
    encoding: Encoding,
) -> Result<WriteReport> {
    let text = document.to_json(encoding)?;

    sink.replace(text.as_bytes())
        .map_err(|e| SeedError::write_error(sink.target(), e))?;

    Ok(WriteReport {
        target: sink.target(),
        records: document.data.len(),
        bytes_written: text.len(),
    })
}
