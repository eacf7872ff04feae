//! File-to-file extraction run

use super::extractor::{ScanStats, TextExtractor};
use super::record::write_records;
use crate::config::ExtractConfig;
use crate::error::{ExtractError, ExtractResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    /// File that was written
    pub output: PathBuf,
    pub stats: ScanStats,
}

impl ExtractionReport {
    /// Number of records written
    pub fn records(&self) -> usize {
        self.stats.decoded
    }
}

/// Read `config.source`, extract its text values and overwrite `config.output`.
///
/// The whole source is read before the output is opened, so a read failure
/// never creates or truncates the output file.
pub fn run(config: &ExtractConfig) -> ExtractResult<ExtractionReport> {
    let content =
        std::fs::read_to_string(&config.source).map_err(|source| ExtractError::ReadSource {
            path: config.source.clone(),
            source,
        })?;
    tracing::info!(source = %config.source.display(), bytes = content.len(), "read source");

    let extraction = TextExtractor::new(config.skip_lines).extract(&content);

    let write_err = |source| ExtractError::WriteOutput {
        path: config.output.clone(),
        source,
    };
    let mut out = BufWriter::new(File::create(&config.output).map_err(write_err)?);
    write_records(&extraction.records, &mut out).map_err(write_err)?;
    out.flush().map_err(write_err)?;

    tracing::info!(
        output = %config.output.display(),
        records = extraction.records.len(),
        "wrote output"
    );

    Ok(ExtractionReport {
        output: config.output.clone(),
        stats: extraction.stats,
    })
}
