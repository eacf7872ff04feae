//! Text extraction from drawing documents
//!
//! Lines of the form `"text": "<json string>"` found past a fixed line
//! offset are decoded and written out as a numbered list. The document
//! format itself is never parsed.

mod extractor;
mod record;
mod run;
mod scanner;

pub use extractor::{Extraction, ScanStats, TextExtractor};
pub use record::{write_records, ExtractedRecord};
pub use run::{run, ExtractionReport};
pub use scanner::{scan_line, source_lines, LineScan, Rejection, SourceLines, TEXT_MARKER};
