//! Engine B: text layer plus layout-heuristic table detection.
//!
//! Uses an extraction stack independent of Engine A's, so the two engines
//! fail independently and disagree usefully. Tabular regions are detected
//! from column alignment in the extracted text, a different heuristic
//! family from Engine A's straight text-layer walk.

use std::path::Path;

use crate::digital::table_detector::TableDetector;
use crate::digital::{EngineOutput, TextEngine};
use crate::error::{Error, Result};
use crate::language::LanguageDetector;

/// Layout-analysis extraction engine ("Engine B").
pub struct LayoutEngine {
    tables: TableDetector,
}

impl LayoutEngine {
    /// Create the engine with the default table detector.
    pub fn new() -> Self {
        Self {
            tables: TableDetector::new(),
        }
    }

    /// Create the engine with a custom table detector.
    pub fn with_table_detector(tables: TableDetector) -> Self {
        Self { tables }
    }
}

impl TextEngine for LayoutEngine {
    fn label(&self) -> &'static str {
        "Engine B"
    }

    fn extract(&self, path: &Path, detector: &LanguageDetector) -> Result<EngineOutput> {
        let text =
            pdf_extract::extract_text(path).map_err(|e| Error::engine(self.label(), e))?;

        let tables = self.tables.detect(&text);
        log::debug!(
            "{}: {} chars, {} table(s) in {}",
            self.label(),
            text.len(),
            tables.len(),
            path.display()
        );

        let language = detector.detect(&text);
        Ok(EngineOutput {
            text,
            tables,
            language,
        })
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}
