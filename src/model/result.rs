//! Final extraction result types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::language::DetectedLanguage;
use crate::model::Table;

/// Sentinel substituted when a paged document yields no text at all.
pub const NO_PDF_TEXT: &str = "No text extracted from the PDF.";

/// Sentinel substituted when a plain image yields no text at all.
pub const NO_IMAGE_TEXT: &str = "No text extracted from the image.";

/// Which extractor contributed to a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceEngine {
    /// Embedded text layer walk (Engine A)
    TextLayer,
    /// Layout-heuristic text and table extraction (Engine B)
    LayoutAnalysis,
    /// Per-page optical character recognition
    Ocr,
}

impl std::fmt::Display for SourceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SourceEngine::TextLayer => "Engine A",
            SourceEngine::LayoutAnalysis => "Engine B",
            SourceEngine::Ocr => "OCR",
        };
        f.write_str(name)
    }
}

/// The structured result of extracting one document.
///
/// Invariant: `raw_text` is never empty; a blank extraction is replaced
/// by [`NO_PDF_TEXT`] or [`NO_IMAGE_TEXT`], so downstream consumers never
/// need to branch on emptiness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Ordered, possibly multi-section extracted text
    pub raw_text: String,

    /// Tables found by the digital path (the OCR path never yields tables)
    pub tables: Vec<Table>,

    /// Distinct languages seen across engines and pages
    pub languages: BTreeSet<DetectedLanguage>,

    /// Which extractors contributed to this result
    pub source_engines: Vec<SourceEngine>,
}

impl ExtractionResult {
    /// ISO codes of all confidently detected languages, sorted.
    pub fn language_codes(&self) -> Vec<&str> {
        self.languages
            .iter()
            .filter_map(|lang| lang.as_code())
            .collect()
    }

    /// Whether any table was extracted.
    pub fn has_tables(&self) -> bool {
        !self.tables.is_empty()
    }
}
