//! Line splitting and candidate-line classification
//!
//! The scanner never parses the drawing document. It looks at one line at
//! a time, and only lines whose trimmed content starts with [`TEXT_MARKER`]
//! are considered. Everything after the first colon up to the last double
//! quote is decoded as a single JSON string literal.

use thiserror::Error;

/// Key prefix identifying a candidate line.
pub const TEXT_MARKER: &str = "\"text\":";

/// Outcome of scanning a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineScan {
    /// The trimmed line does not start with the marker.
    NotCandidate,
    /// A candidate line whose value could not be taken as a string.
    Rejected(Rejection),
    /// A candidate line with its decoded string value.
    Decoded(String),
}

/// Why a candidate line produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no key/value separator")]
    MissingSeparator,

    #[error("value is not a string literal")]
    NotAString,

    #[error("string literal has no closing quote")]
    Unterminated,

    #[error("string literal failed to decode")]
    InvalidLiteral,
}

/// Classify one source line.
pub fn scan_line(line: &str) -> LineScan {
    let trimmed = line.trim();
    if !trimmed.starts_with(TEXT_MARKER) {
        return LineScan::NotCandidate;
    }

    let Some((_, value)) = trimmed.split_once(':') else {
        return LineScan::Rejected(Rejection::MissingSeparator);
    };

    let value = value.trim();
    if !value.starts_with('"') {
        return LineScan::Rejected(Rejection::NotAString);
    }

    // A lone opening quote has no closing counterpart.
    let end = match value.rfind('"') {
        Some(idx) if idx > 0 => idx,
        _ => return LineScan::Rejected(Rejection::Unterminated),
    };

    match serde_json::from_str::<String>(&value[..=end]) {
        Ok(text) => LineScan::Decoded(text),
        Err(_) => LineScan::Rejected(Rejection::InvalidLiteral),
    }
}

/// Iterator over the lines of a source document.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`; the terminator is not part
/// of the yielded line. A trailing terminator does not start a new line.
#[derive(Debug, Clone)]
pub struct SourceLines<'a> {
    rest: &'a str,
}

/// Split source text into lines (see [`SourceLines`]).
pub fn source_lines(content: &str) -> SourceLines<'_> {
    SourceLines { rest: content }
}

impl<'a> Iterator for SourceLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let rest = self.rest;
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(idx) => {
                let next_start = if rest[idx..].starts_with("\r\n") {
                    idx + 2
                } else {
                    idx + 1
                };
                self.rest = &rest[next_start..];
                Some(&rest[..idx])
            }
            None => {
                self.rest = "";
                Some(rest)
            }
        }
    }
}
