//! Error types for docx-md library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docx-md operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a Word document.
///
/// `NotFound`, `InvalidInput` and `ConversionFailed` are the variants a
/// caller of [`WordToMarkdown::convert`](crate::WordToMarkdown::convert)
/// sees. The remaining variants are produced by the reader and writer and
/// get folded into `ConversionFailed` at the converter boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path does not exist.
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input is not a supported document type.
    #[error("{0}")]
    InvalidInput(String),

    /// Any failure during extraction, rendering or writing.
    #[error("{0}")]
    ConversionFailed(String),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The DOCX container (ZIP archive) could not be read.
    #[error("Invalid DOCX container: {0}")]
    Container(String),

    /// Malformed WordprocessingML.
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// A required part is missing from the package.
    #[error("Missing document part: {0}")]
    MissingPart(String),
}

impl Error {
    /// Fold internal errors into [`Error::ConversionFailed`].
    ///
    /// The caller-facing variants pass through untouched.
    pub fn into_conversion_failure(self) -> Self {
        match self {
            Error::NotFound(_) | Error::InvalidInput(_) | Error::ConversionFailed(_) => self,
            other => Error::ConversionFailed(other.to_string()),
        }
    }

    /// Whether the error was raised before the document was opened.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::InvalidInput(_))
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => Error::MissingPart("archive entry".into()),
            _ => Error::Container(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}
