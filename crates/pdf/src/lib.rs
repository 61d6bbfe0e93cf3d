//! PDF reader backend for MCQ extraction.
//!
//! Extracts per-page text, embedded images, and video/explanation link
//! annotations from PDF documents.

pub mod reader;

pub use reader::PdfReader;
