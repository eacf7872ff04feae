//! Extraction configuration
//!
//! [`ExtractConfig::default`] reproduces the fixed locations the tool was
//! written for. A YAML [`ConfigFile`] and explicit overrides are layered
//! on top of it.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default source document, relative to the working directory.
pub const DEFAULT_SOURCE: &str = ".excalidraw";

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "excalidraw_text.txt";

/// Number of preamble lines skipped in the default source document.
pub const DEFAULT_SKIP_LINES: usize = 4664;

/// Parameters for one extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Drawing document to scan
    pub source: PathBuf,
    /// Text file to (over)write
    pub output: PathBuf,
    /// Leading lines excluded from scanning
    pub skip_lines: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            skip_lines: DEFAULT_SKIP_LINES,
        }
    }
}

impl ExtractConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_skip_lines(mut self, skip_lines: usize) -> Self {
        self.skip_lines = skip_lines;
        self
    }

    /// Overlay every field the config file sets.
    pub fn apply(mut self, file: ConfigFile) -> Self {
        if let Some(source) = file.source {
            self.source = source;
        }
        if let Some(output) = file.output {
            self.output = output;
        }
        if let Some(skip_lines) = file.skip_lines {
            self.skip_lines = skip_lines;
        }
        self
    }
}

/// On-disk configuration; every field is optional.
///
/// ```yaml
/// source: drawings/board.excalidraw
/// output: board_text.txt
/// skip_lines: 0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub source: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub skip_lines: Option<usize>,
}

impl ConfigFile {
    /// Load a YAML config file.
    ///
    /// Relative `source`/`output` paths are resolved against the
    /// directory containing the file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut file = Self::parse(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = path.parent() {
            file.source = file.source.map(|p| base.join(p));
            file.output = file.output.map(|p| base.join(p));
        }
        Ok(file)
    }

    /// Parse YAML without touching relative paths.
    pub fn parse(raw: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty map.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }

    /// Per-user config location (`<config dir>/drawtext/config.yaml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("drawtext").join("config.yaml"))
    }
}
