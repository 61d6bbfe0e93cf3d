//! Core domain types, line classification, and quiz assembly
//! for MCQ extraction.

pub mod assemble;
pub mod classify;
pub mod correlate;
pub mod error;
pub mod normalize;
pub mod render;
pub mod types;

pub use assemble::{extract_document, extract_topics, Assembler};
pub use classify::LineKind;
pub use correlate::AssetCorrelator;
pub use error::{Error, Result};
pub use render::QuizFormatter;
pub use types::{DocumentContent, DocumentFormat, ImageAsset, Question, Topic};
