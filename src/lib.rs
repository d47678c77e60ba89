//! # docutext
//!
//! Document text extraction library for Rust.
//!
//! This library extracts text, tables, and detected languages from PDF
//! documents and raster images. PDFs are processed twice: a pair of
//! digital extraction engines reads the embedded text layer, and a
//! rasterize-then-OCR pass covers scanned or image-only content. Both
//! outputs are kept, labeled by source, so downstream consumers can see
//! exactly what each path produced.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docutext::extract_file;
//!
//! fn main() -> docutext::Result<()> {
//!     let output = extract_file("document.pdf")?;
//!
//!     println!("{}", output.result.raw_text);
//!     println!("languages: {:?}", output.result.language_codes());
//!     if let Some(path) = &output.table_file {
//!         println!("tables written to {}", path.display());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Dual digital engines**: independent text-layer and layout-analysis
//!   extraction, concatenated under per-engine section headers
//! - **OCR fallback**: every PDF page is rasterized and recognized, with
//!   per-page section headers
//! - **Table detection**: column-alignment heuristics over extracted text,
//!   serialized to CSV with blank-line separators between tables
//! - **Language detection**: statistical detection per text body, collected
//!   as a set across pages and engines
//! - **Soft failure**: engine, OCR, and detection errors become data in the
//!   result instead of aborting the document
//! - **Parallel processing**: uses Rayon for per-page OCR

pub mod combine;
pub mod detect;
pub mod digital;
pub mod error;
pub mod language;
pub mod model;
pub mod ocr;
pub mod pipeline;
pub mod raster;
pub mod tables;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf, InputFormat};
pub use digital::{EngineOutput, TextEngine};
pub use error::{Error, Result};
pub use language::{DetectedLanguage, LanguageDetector};
pub use model::{
    Document, DocumentKind, ExtractionResult, PageImage, SourceEngine, Table, TableRow,
    NO_IMAGE_TEXT, NO_PDF_TEXT,
};
pub use ocr::{ImageOcr, OcrConfig};
pub use pipeline::{DocumentOutput, ExtractOptions, Pipeline};
pub use raster::{Rasterizer, DEFAULT_RASTER_SCALE};

use std::path::Path;

/// Extract text, tables, and languages from a document file.
///
/// The format is sniffed from the file's magic bytes: PDFs run the full
/// dual-engine plus OCR pipeline, images run OCR only.
///
/// # Arguments
///
/// * `path` - Path to the PDF or image file
///
/// # Example
///
/// ```no_run
/// use docutext::extract_file;
///
/// let output = extract_file("scan.pdf").unwrap();
/// println!("{}", output.result.raw_text);
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<DocumentOutput> {
    extract_file_with_options(path, ExtractOptions::default())
}

/// Extract from a document file with custom options.
///
/// # Example
///
/// ```no_run
/// use docutext::{extract_file_with_options, ExtractOptions};
///
/// let options = ExtractOptions::new().with_ocr_language("deu");
/// let output = extract_file_with_options("brief.pdf", options).unwrap();
/// ```
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ExtractOptions,
) -> Result<DocumentOutput> {
    let document = Document::open(path)?;
    Pipeline::with_options(options).process(&document)
}

/// Extract text and language from in-memory image bytes.
///
/// Decode and OCR failures never return an error here; they degrade to an
/// error-message result with an undetected language.
pub fn extract_image(bytes: &[u8]) -> ExtractionResult {
    Pipeline::new().process_image_bytes(bytes)
}
