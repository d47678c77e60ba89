//! Data model for document extraction.
//!
//! These types bridge the extraction stages: the immutable [`Document`]
//! handle flows through every stage, [`PageImage`]s carry rasterized pages
//! into OCR, and [`ExtractionResult`] is the single structured value a
//! caller receives per document.

mod document;
mod page;
mod result;
mod table;

pub use document::{Document, DocumentKind};
pub use page::PageImage;
pub use result::{ExtractionResult, SourceEngine, NO_IMAGE_TEXT, NO_PDF_TEXT};
pub use table::{Table, TableRow};
