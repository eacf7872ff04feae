//! Synthetic drawing documents and scratch workspaces

use drawtext::ExtractConfig;
use std::path::PathBuf;
use tempfile::TempDir;

/// Line-oriented builder for an Excalidraw-like scene.
///
/// Output mirrors the pretty-printed layout of real `.excalidraw` files:
/// one key per line, elements indented inside an `"elements"` array.
#[derive(Debug, Default)]
pub struct DrawingBuilder {
    lines: Vec<String>,
}

impl DrawingBuilder {
    pub fn new() -> Self {
        Self {
            lines: vec![
                "{".to_string(),
                "  \"type\": \"excalidraw\",".to_string(),
                "  \"version\": 2,".to_string(),
                "  \"elements\": [".to_string(),
            ],
        }
    }

    /// Pad with filler lines until the document has `total` lines.
    pub fn pad_to(mut self, total: usize) -> Self {
        while self.lines.len() < total {
            self.lines.push("      \"strokeWidth\": 1,".to_string());
        }
        self
    }

    /// Append a text element whose `"text"` value is `text`, JSON-encoded.
    pub fn text_element(mut self, text: &str) -> Self {
        let encoded = serde_json::to_string(text).unwrap();
        self.lines.push("    {".to_string());
        self.lines.push("      \"type\": \"text\",".to_string());
        self.lines.push(format!("      \"text\": {},", encoded));
        self.lines.push(format!("      \"originalText\": {},", encoded));
        self.lines.push("      \"fontSize\": 20".to_string());
        self.lines.push("    },".to_string());
        self
    }

    /// Append a raw line verbatim.
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Number of lines so far.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn build(mut self) -> String {
        self.lines.push("  ]".to_string());
        self.lines.push("}".to_string());
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Temp directory holding one source document and its output path.
pub struct Workspace {
    _dir: TempDir,
    pub source: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    pub fn with_source(content: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("scene.excalidraw");
        let output = dir.path().join("excalidraw_text.txt");
        std::fs::write(&source, content).unwrap();
        Self {
            _dir: dir,
            source,
            output,
        }
    }

    pub fn config(&self, skip_lines: usize) -> ExtractConfig {
        ExtractConfig::new()
            .with_source(&self.source)
            .with_output(&self.output)
            .with_skip_lines(skip_lines)
    }

    pub fn read_output(&self) -> String {
        std::fs::read_to_string(&self.output).unwrap()
    }
}
