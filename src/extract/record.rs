//! Extracted records and the numbered-list output format

use std::fmt;
use std::io::{self, Write};

/// A decoded text value and its 1-based position in extraction order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRecord {
    pub index: usize,
    pub text: String,
}

impl ExtractedRecord {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

impl fmt::Display for ExtractedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.index, self.text)
    }
}

/// Write records as `"<n>. <text>"`, each followed by a blank line.
pub fn write_records<W: Write>(records: &[ExtractedRecord], mut out: W) -> io::Result<()> {
    for record in records {
        write!(out, "{}\n\n", record)?;
    }
    Ok(())
}
