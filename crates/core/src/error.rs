//! Error types for slide generation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning images into a slide deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open, read or write a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// An accent color was not a 6-digit hex string.
    #[error("accent-color must be a 6-digit hex string, e.g., #1f77b4 (got {0:?})")]
    InvalidColor(String),

    /// A title policy name was not recognized.
    #[error("Unknown title policy {0:?} (expected first-line or filename)")]
    InvalidTitlePolicy(String),

    /// Failed to decode or encode an image.
    #[error("Image error: {0}")]
    ImageError(String),

    /// The OCR engine could not be run or reported a failure.
    #[error("OCR error: {0}")]
    OcrError(String),

    /// ZIP archive error (for PPTX).
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML writing or parsing error (for PPTX).
    #[error("XML error: {0}")]
    XmlError(String),

    /// The presentation could not be rendered.
    #[error("Render error: {0}")]
    RenderError(String),
}
