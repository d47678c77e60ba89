//! Extraction pipeline orchestration.
//!
//! One call processes one document to completion: for a PDF, the digital
//! engines run first, then every page is rasterized and OCR'd, then the
//! combiner merges both paths and the table artifact is written. For a
//! plain image, only OCR and language detection run. Pages may be OCR'd
//! in parallel, but the output is always page-ordered and the engine
//! combination order is fixed.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::combine;
use crate::digital::{self, TextEngine};
use crate::error::Result;
use crate::language::LanguageDetector;
use crate::model::{
    Document, DocumentKind, ExtractionResult, SourceEngine, Table, NO_IMAGE_TEXT,
};
use crate::ocr::{ImageOcr, OcrConfig};
use crate::raster::{Rasterizer, DEFAULT_RASTER_SCALE};
use crate::tables;

/// Options for the extraction pipeline.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// OCR recognition language hint (ISO 639-2 code)
    pub ocr_language: String,

    /// PDF rendering scale relative to the 72-DPI baseline
    pub raster_scale: f32,

    /// Whether to OCR pages in parallel (output stays page-ordered)
    pub parallel: bool,

    /// Table CSV destination; defaults to `<stem>_tables.csv` next to the
    /// document
    pub table_output: Option<PathBuf>,
}

impl ExtractOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the OCR recognition language hint.
    pub fn with_ocr_language(mut self, language: impl Into<String>) -> Self {
        self.ocr_language = language.into();
        self
    }

    /// Set the rendering scale.
    pub fn with_raster_scale(mut self, scale: f32) -> Self {
        self.raster_scale = scale;
        self
    }

    /// Enable or disable parallel page OCR.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel page OCR.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the table CSV destination.
    pub fn with_table_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.table_output = Some(path.into());
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            ocr_language: "eng".to_string(),
            raster_scale: DEFAULT_RASTER_SCALE,
            parallel: true,
            table_output: None,
        }
    }
}

/// Result of processing one document: the structured extraction result
/// plus, for the PDF path, the location of the written table file.
#[derive(Debug)]
pub struct DocumentOutput {
    /// The structured extraction result
    pub result: ExtractionResult,

    /// Where the table CSV was written, if it was
    pub table_file: Option<PathBuf>,
}

/// The document extraction pipeline.
///
/// Construction is moderately expensive (the language detector loads
/// models); reuse one pipeline across documents where possible. All state
/// is read-only per call, so one pipeline can serve documents from many
/// threads.
pub struct Pipeline {
    options: ExtractOptions,
    detector: LanguageDetector,
    ocr: ImageOcr,
    rasterizer: Rasterizer,
    engines: Vec<Box<dyn TextEngine>>,
}

impl Pipeline {
    /// Create a pipeline with default options and engines.
    pub fn new() -> Self {
        Self::with_options(ExtractOptions::default())
    }

    /// Create a pipeline with custom options.
    pub fn with_options(options: ExtractOptions) -> Self {
        let ocr = ImageOcr::with_config(
            OcrConfig::new().with_language(options.ocr_language.clone()),
        );
        let rasterizer = Rasterizer::with_scale(options.raster_scale);

        Self {
            options,
            detector: LanguageDetector::new(),
            ocr,
            rasterizer,
            engines: digital::default_engines(),
        }
    }

    /// Replace the digital engine set (extension point; also used by
    /// integration tests).
    pub fn with_engines(mut self, engines: Vec<Box<dyn TextEngine>>) -> Self {
        self.engines = engines;
        self
    }

    /// The options in effect.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Process one document to completion.
    ///
    /// # Errors
    ///
    /// Fatal errors only: I/O failure reading the document, or a PDF that
    /// cannot be rasterized. Per-page, per-engine, and language failures
    /// are captured as data in the result.
    pub fn process(&self, document: &Document) -> Result<DocumentOutput> {
        match document.kind() {
            DocumentKind::Pdf => self.process_pdf(document),
            DocumentKind::Image => {
                let bytes = fs::read(document.path())?;
                Ok(DocumentOutput {
                    result: self.process_image_bytes(&bytes),
                    table_file: None,
                })
            }
        }
    }

    /// Process raw image bytes (the direct image path).
    ///
    /// Never fails: decode and OCR errors degrade to error-text results.
    pub fn process_image_bytes(&self, bytes: &[u8]) -> ExtractionResult {
        let (text, language) = self.ocr.extract(bytes, &self.detector);

        let raw_text = if text.trim().is_empty() {
            NO_IMAGE_TEXT.to_string()
        } else {
            text
        };

        let mut languages = BTreeSet::new();
        languages.insert(language);

        ExtractionResult {
            raw_text,
            tables: Vec::new(),
            languages,
            source_engines: vec![SourceEngine::Ocr],
        }
    }

    fn process_pdf(&self, document: &Document) -> Result<DocumentOutput> {
        log::info!("extracting PDF {}", document.path().display());

        // Digital extraction first: cheap and exact for born-digital PDFs.
        let digital = digital::extract_digital(&self.engines, document.path(), &self.detector);

        // Image pipeline: rasterize all pages (fatal on corrupt documents),
        // then OCR each page (soft-fail per page).
        let pages = self.rasterizer.rasterize(document.path())?;
        let recognized: Vec<_> = if self.options.parallel {
            pages
                .par_iter()
                .map(|page| self.ocr.extract(&page.bytes, &self.detector))
                .collect()
        } else {
            pages
                .iter()
                .map(|page| self.ocr.extract(&page.bytes, &self.detector))
                .collect()
        };
        let ocr = combine::combine_pages(recognized);

        let mut languages = ocr.languages;
        languages.insert(digital.language);

        let raw_text = format!("{}\n\n{}", digital.text.trim_end(), ocr.text.trim_end());

        let result = ExtractionResult {
            raw_text,
            tables: digital.tables,
            languages,
            source_engines: vec![
                SourceEngine::TextLayer,
                SourceEngine::LayoutAnalysis,
                SourceEngine::Ocr,
            ],
        };

        let table_file = self.write_tables(document, &result.tables);
        Ok(DocumentOutput { result, table_file })
    }

    /// Write the table artifact. A write failure is fatal for the artifact
    /// only, never for the text result.
    fn write_tables(&self, document: &Document, extracted: &[Table]) -> Option<PathBuf> {
        let path = self
            .options
            .table_output
            .clone()
            .unwrap_or_else(|| default_table_path(document.path()));

        match tables::serialize_tables(extracted, &path) {
            Ok(()) => Some(path),
            Err(err) => {
                log::warn!("failed to write table file {}: {}", path.display(), err);
                None
            }
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Default table CSV location: `<stem>_tables.csv` next to the document.
pub fn default_table_path(document: &Path) -> PathBuf {
    let stem = document
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    document.with_file_name(format!("{stem}_tables.csv"))
}
