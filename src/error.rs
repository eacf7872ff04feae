//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Fatal errors for an extraction run
///
/// Malformed candidate lines are never reported here; they are counted
/// in [`ScanStats`](crate::ScanStats) and skipped.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read source {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for extraction runs
pub type ExtractResult<T> = Result<T, ExtractError>;
