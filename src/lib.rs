//! drawtext: text label extraction for Excalidraw drawings
//!
//! Scans a drawing document line by line, decodes the string value of
//! every `"text":` line past a fixed offset, and writes the values as a
//! numbered list.
//!
//! # Example
//!
//! ```
//! use drawtext::TextExtractor;
//!
//! let extraction = TextExtractor::new(0).extract("  \"text\": \"hello\",\n");
//! assert_eq!(extraction.records[0].to_string(), "1. hello");
//! ```

pub mod config;
mod error;
pub mod extract;

pub use config::{ConfigFile, ExtractConfig};
pub use error::{ConfigError, ExtractError, ExtractResult};
pub use extract::{
    run, scan_line, ExtractedRecord, Extraction, ExtractionReport, LineScan, Rejection, ScanStats,
    TextExtractor,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
