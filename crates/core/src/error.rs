//! Error types for MCQ extraction.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a quiz document.
///
/// "Document parsed but contained no MCQs" is not an error; the core
/// reports that case as an empty topic list.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The file format is not supported or could not be detected.
    #[error("Unsupported or unrecognized file format: {0}")]
    UnsupportedFormat(String),

    /// Failed to parse the PDF file structure.
    #[error("PDF parsing error: {0}")]
    PdfParseError(String),

    /// The document is encrypted and cannot be read.
    #[error("Encrypted document is not supported: {0}")]
    EncryptedFile(String),

    /// Invalid or corrupted file.
    #[error("Invalid or corrupted file: {0}")]
    CorruptedFile(String),

    /// Failed to extract text from the document.
    #[error("Text extraction error: {0}")]
    ExtractionError(String),
}
