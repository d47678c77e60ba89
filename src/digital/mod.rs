//! Digital text extraction for born-digital PDFs.
//!
//! Two independently implemented engines run against the same document
//! behind the [`TextEngine`] trait: Engine A walks the embedded text layer
//! directly, Engine B extracts the text layer with different machinery and
//! detects tabular regions with layout heuristics. Adding a third engine
//! (e.g. a layout-ML extractor) is a pure extension of the trait.

mod layer;
mod layout;
mod table_detector;

pub use layer::TextLayerEngine;
pub use layout::LayoutEngine;
pub use table_detector::{TableDetector, TableDetectorConfig};

use std::path::Path;

use crate::combine::{self, DigitalOutcome};
use crate::error::{Error, Result};
use crate::language::{DetectedLanguage, LanguageDetector};
use crate::model::Table;

/// What one engine produced for one document.
#[derive(Debug, Clone)]
pub struct EngineOutput {
    /// Accumulated text across all pages, pages joined by newline
    pub text: String,

    /// Tables detected by this engine (empty for text-only engines)
    pub tables: Vec<Table>,

    /// Language detected on this engine's accumulated text
    pub language: DetectedLanguage,
}

/// A digital text extraction strategy.
pub trait TextEngine: Send + Sync {
    /// Human-visible engine label used in the combined output's section
    /// headers (e.g. "Engine A").
    fn label(&self) -> &'static str;

    /// Extract text, tables, and a language from the PDF at `path`.
    fn extract(&self, path: &Path, detector: &LanguageDetector) -> Result<EngineOutput>;
}

/// Run one engine with the soft-fail policy applied.
///
/// An engine failure never aborts the document: it is captured as an
/// error-message-as-text output with an `Undetected` language, matching
/// the OCR path's degradation behavior.
pub fn run_engine(
    engine: &dyn TextEngine,
    path: &Path,
    detector: &LanguageDetector,
) -> EngineOutput {
    match engine.extract(path, detector) {
        Ok(output) => output,
        Err(err) => {
            log::warn!("{} failed on {}: {}", engine.label(), path.display(), err);
            let cause = match &err {
                Error::Engine { message, .. } => message.clone(),
                other => other.to_string(),
            };
            EngineOutput {
                text: format!("Error extracting text with {}: {}", engine.label(), cause),
                tables: Vec::new(),
                language: DetectedLanguage::Undetected(err.to_string()),
            }
        }
    }
}

/// Run every engine against the document and combine their outputs.
///
/// Engines run in order; the combination order is fixed regardless of how
/// the outputs were produced.
pub fn extract_digital(
    engines: &[Box<dyn TextEngine>],
    path: &Path,
    detector: &LanguageDetector,
) -> DigitalOutcome {
    let sections: Vec<(&'static str, EngineOutput)> = engines
        .iter()
        .map(|engine| (engine.label(), run_engine(engine.as_ref(), path, detector)))
        .collect();

    combine::combine_engines(sections)
}

/// The default engine pair: text layer walk plus layout analysis.
pub fn default_engines() -> Vec<Box<dyn TextEngine>> {
    vec![
        Box::new(TextLayerEngine::new()),
        Box::new(LayoutEngine::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingEngine;

    impl TextEngine for FailingEngine {
        fn label(&self) -> &'static str {
            "Engine A"
        }

        fn extract(&self, _path: &Path, _detector: &LanguageDetector) -> Result<EngineOutput> {
            Err(Error::engine("Engine A", "file is encrypted"))
        }
    }

    #[test]
    fn test_run_engine_soft_fails() {
        let detector = LanguageDetector::new();
        let output = run_engine(&FailingEngine, Path::new("missing.pdf"), &detector);

        assert_eq!(
            output.text,
            "Error extracting text with Engine A: file is encrypted"
        );
        assert!(output.tables.is_empty());
        assert!(output.language.is_undetected());
    }
}
