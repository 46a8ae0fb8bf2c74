//! PPTX (Office Open XML) backend for quiz slide decks.
//!
//! Writes decks as .pptx files, which are ZIP archives containing XML
//! documents, and reads them back for inspection.

pub mod package;
pub mod reader;
pub mod slide;
pub mod writer;

pub use reader::PptxReader;
pub use writer::PptxWriter;

/// MIME type of a .pptx file.
pub const MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// File name offered when a generated deck is downloaded.
pub const DEFAULT_FILE_NAME: &str = "mcq_questions_with_reveal.pptx";
