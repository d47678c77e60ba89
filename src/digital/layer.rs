//! Engine A: embedded text layer extraction.
//!
//! Walks pages with PDFium and reads the embedded text layer directly.
//! Fast and exact for born-digital PDFs; yields nothing for scanned,
//! image-only PDFs; those are covered by the OCR path.

use std::path::Path;

use crate::digital::{EngineOutput, TextEngine};
use crate::error::{Error, Result};
use crate::language::LanguageDetector;
use crate::raster::bind_pdfium;

/// Text-layer extraction engine ("Engine A").
pub struct TextLayerEngine;

impl TextLayerEngine {
    /// Create the engine.
    pub fn new() -> Self {
        Self
    }

    fn failure(&self, cause: impl std::fmt::Display) -> Error {
        Error::engine(self.label(), cause)
    }
}

impl TextEngine for TextLayerEngine {
    fn label(&self) -> &'static str {
        "Engine A"
    }

    fn extract(&self, path: &Path, detector: &LanguageDetector) -> Result<EngineOutput> {
        let pdfium = bind_pdfium().map_err(|e| self.failure(e))?;
        let document = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| self.failure(e))?;

        let mut text = String::new();
        for page in document.pages().iter() {
            let page_text = page.text().map_err(|e| self.failure(e))?.all();
            if !page_text.is_empty() {
                text.push_str(&page_text);
                text.push('\n');
            }
        }

        log::debug!(
            "{}: {} chars of embedded text in {}",
            self.label(),
            text.len(),
            path.display()
        );

        let language = detector.detect(&text);
        Ok(EngineOutput {
            text,
            tables: Vec::new(),
            language,
        })
    }
}

impl Default for TextLayerEngine {
    fn default() -> Self {
        Self::new()
    }
}
