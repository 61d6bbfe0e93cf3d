//! Plain-text reader backend for MCQ extraction.
//!
//! Handles `.txt` quiz dumps: UTF-8 text with form-feed page breaks.

pub mod reader;

pub use reader::TextReader;
