//! TextExtractor: single forward pass over a source document

use super::record::ExtractedRecord;
use super::scanner::{scan_line, source_lines, LineScan};

/// Counters gathered while scanning a document.
///
/// `decoded + rejected == candidates` and
/// `skipped_lines + scanned_lines == total_lines` always hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Lines in the source document
    pub total_lines: usize,
    /// Lines inside the skipped prefix
    pub skipped_lines: usize,
    /// Lines examined after the prefix
    pub scanned_lines: usize,
    /// Scanned lines starting with the marker
    pub candidates: usize,
    /// Candidates that produced a record
    pub decoded: usize,
    /// Candidates dropped without a record
    pub rejected: usize,
}

/// Records extracted from one document, in source order.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub records: Vec<ExtractedRecord>,
    pub stats: ScanStats,
}

/// Extracts marker-line string values past a fixed line offset.
#[derive(Debug, Clone, Copy)]
pub struct TextExtractor {
    skip_lines: usize,
}

impl TextExtractor {
    /// Create an extractor that ignores the first `skip_lines` lines.
    pub fn new(skip_lines: usize) -> Self {
        Self { skip_lines }
    }

    pub fn skip_lines(&self) -> usize {
        self.skip_lines
    }

    /// Scan `content` and number every decoded value from 1.
    pub fn extract(&self, content: &str) -> Extraction {
        let mut records = Vec::new();
        let mut stats = ScanStats::default();

        for (idx, line) in source_lines(content).enumerate() {
            stats.total_lines += 1;
            if idx < self.skip_lines {
                stats.skipped_lines += 1;
                continue;
            }
            stats.scanned_lines += 1;

            match scan_line(line) {
                LineScan::NotCandidate => {}
                LineScan::Rejected(reason) => {
                    stats.candidates += 1;
                    stats.rejected += 1;
                    tracing::trace!(line = idx + 1, %reason, "skipping text candidate");
                }
                LineScan::Decoded(text) => {
                    stats.candidates += 1;
                    stats.decoded += 1;
                    records.push(ExtractedRecord::new(records.len() + 1, text));
                }
            }
        }

        tracing::debug!(
            total = stats.total_lines,
            scanned = stats.scanned_lines,
            candidates = stats.candidates,
            decoded = stats.decoded,
            rejected = stats.rejected,
            "scan complete"
        );

        Extraction { records, stats }
    }
}
