//! Error types for the unocr library.

use std::io;
use thiserror::Error;

/// Result type alias for unocr operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reconstructing OCR output.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is neither structured XML nor a glyph annotation list.
    #[error("Unknown file format: not a recognized OCR engine output")]
    UnknownFormat,

    /// Error parsing the structured-XML engine output.
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// Error parsing the glyph-level JSON engine output.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The glyph-level page is missing its expected whole-page annotation.
    #[error("Malformed engine response: {0}")]
    MalformedResponse(String),

    /// Invalid volume range specification.
    #[error("Invalid volume range: {0}")]
    InvalidVolumeRange(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFormat;
        assert_eq!(
            err.to_string(),
            "Unknown file format: not a recognized OCR engine output"
        );

        let err = Error::MalformedResponse("no textAnnotations".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed engine response: no textAnnotations"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
