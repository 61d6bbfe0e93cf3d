//! Plain-text reader implementation.

use mcq_core::{DocumentContent, DocumentFormat, Result};
use std::path::Path;

/// Reader for plain-text quiz documents.
///
/// Pages are split on form feed (`\f`), the page separator conventional
/// text exporters emit; a document without form feeds is one page. Plain
/// text carries no images or links, so those lists stay empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReader;

impl TextReader {
    /// Create a new text reader.
    pub fn new() -> Self {
        Self
    }

    /// Read a text file from disk.
    pub fn read_path(&self, path: &Path) -> Result<DocumentContent> {
        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        self.read_bytes(&bytes, filename)
    }

    /// Read text already loaded into memory.
    ///
    /// Decoding is lossy: a stray non-UTF-8 byte becomes a replacement
    /// character instead of failing the whole document.
    pub fn read_bytes(&self, bytes: &[u8], filename: &str) -> Result<DocumentContent> {
        let text = String::from_utf8_lossy(bytes);

        let mut content = DocumentContent::new(filename, DocumentFormat::Text);
        content.pages = text.split('\x0C').map(str::to_string).collect();

        Ok(content)
    }
}
