//! Domain types for representing extracted quiz content.

use serde::{Deserialize, Serialize};

/// A topic heading with the questions collected under it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    /// Topic name, with any leading heading marker stripped.
    #[serde(rename = "topic")]
    pub name: String,

    /// Questions in document order.
    pub questions: Vec<Question>,
}

impl Topic {
    /// Create a new topic with no questions yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            questions: Vec::new(),
        }
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Question text, with any leading numbering stripped.
    #[serde(rename = "question")]
    pub text: String,

    /// Option texts in encounter order, labels stripped.
    pub options: Vec<String>,

    /// Correct answer text, if an answer line was present.
    pub answer: Option<String>,

    /// Storage path of the positionally correlated image, if any.
    pub image: Option<String>,

    /// URI of the positionally correlated video/explanation link, if any.
    pub video_link: Option<String>,
}

impl Question {
    /// Create a new question with the given text and nothing else filled in.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Vec::new(),
            answer: None,
            image: None,
            video_link: None,
        }
    }
}

/// An image extracted from a document, in page order then intra-page order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Page number the image came from.
    pub page: usize,

    /// Zero-based index of the image within its page.
    pub index: usize,

    /// Where the extracted image bytes were written.
    pub path: String,
}

impl ImageAsset {
    /// Create a new image asset record.
    pub fn new(page: usize, index: usize, path: impl Into<String>) -> Self {
        Self {
            page,
            index,
            path: path.into(),
        }
    }
}

/// Raw content produced by a reader backend: per-page text plus the
/// page-ordered asset lists the correlator indexes into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentContent {
    /// Original filename (without path).
    pub filename: String,

    /// Detected format of the source file.
    pub format: DocumentFormat,

    /// Page texts in page order.
    pub pages: Vec<String>,

    /// Extracted images in page order, then intra-page order.
    pub images: Vec<ImageAsset>,

    /// Video/explanation link URIs in page order.
    pub links: Vec<String>,
}

impl DocumentContent {
    /// Create empty content for the given file.
    pub fn new(filename: impl Into<String>, format: DocumentFormat) -> Self {
        Self {
            filename: filename.into(),
            format,
            pages: Vec::new(),
            images: Vec::new(),
            links: Vec::new(),
        }
    }

    /// All text lines of all pages, flattened in page order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flat_map(|page| page.lines())
    }
}

/// The format of the source document file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    /// PDF document.
    Pdf,
    /// Plain UTF-8 text, form-feed page breaks.
    Text,
}

impl DocumentFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" | "text" => Some(Self::Text),
            _ => None,
        }
    }

    /// Detect format from file magic bytes.
    ///
    /// Plain text has no magic, so only PDF is detectable here; callers
    /// fall back to the extension for everything else.
    pub fn from_magic(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"%PDF-") {
            return Some(Self::Pdf);
        }

        None
    }
}
