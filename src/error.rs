//! Error types for the docutext library.

use std::io;
use thiserror::Error;

/// Result type alias for docutext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document extraction.
///
/// Only a subset of these errors ever crosses the pipeline boundary:
/// rasterization failures and I/O errors abort a request, while image
/// decode, OCR, engine, and language detection failures are captured as
/// data in the extraction result (soft-fail).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not a supported document or raster image.
    #[error("Unknown file format: not a supported document or image")]
    UnknownFormat,

    /// The paged document could not be parsed or rendered.
    /// Fatal: aborts extraction for the whole document.
    #[error("PDF rasterization error: {0}")]
    Rasterize(String),

    /// A raster image could not be decoded.
    /// Soft: the affected page degrades to an error-text placeholder.
    #[error("image decode error: {0}")]
    ImageDecode(String),

    /// The OCR engine failed on a decodable image.
    /// Soft: treated the same way as a decode failure.
    #[error("OCR error: {0}")]
    Ocr(String),

    /// One digital extraction engine failed.
    /// Soft: the other engine's output is still used.
    #[error("extraction engine {engine} failed: {message}")]
    Engine {
        /// Engine label (e.g., "Engine A")
        engine: String,
        /// Underlying cause
        message: String,
    },

    /// The text carries no detectable linguistic signal.
    /// Soft: converted to an `Undetected` language by the detector.
    #[error("language detection error: {0}")]
    LanguageDetection(String),

    /// The table artifact could not be written.
    /// Fatal for the table file only; the text result stays valid.
    #[error("table serialization error: {0}")]
    TableSerialize(#[from] csv::Error),
}

impl Error {
    /// Build an engine failure from a label and any displayable cause.
    pub fn engine(label: &str, cause: impl std::fmt::Display) -> Self {
        Error::Engine {
            engine: label.to_string(),
            message: cause.to_string(),
        }
    }
}
