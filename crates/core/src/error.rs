//! Error types for quiz deck generation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading questions or writing a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The delimited input could not be parsed.
    #[error("CSV parsing error: {0}")]
    CsvError(String),

    /// The input table lacks one or more required columns.
    #[error(
        "input must have 'question' and 'correct' columns (missing: {})",
        .0.join(", ")
    )]
    MissingColumns(Vec<String>),

    /// The file format is not supported or could not be detected.
    #[error("Unsupported or unrecognized file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid or corrupted deck file.
    #[error("Invalid or corrupted file: {0}")]
    CorruptedFile(String),

    /// ZIP archive error (for PPTX).
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML reading or writing error (for PPTX).
    #[error("XML error: {0}")]
    XmlError(String),

    /// Failed to format XML markup into a buffer.
    #[error("Formatting error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message() {
        let err = Error::MissingColumns(vec!["correct".to_string()]);
        assert_eq!(
            err.to_string(),
            "input must have 'question' and 'correct' columns (missing: correct)"
        );

        let err = Error::MissingColumns(vec!["question".to_string(), "correct".to_string()]);
        assert!(err.to_string().ends_with("(missing: question, correct)"));
    }
}
