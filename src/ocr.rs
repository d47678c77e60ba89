//! Optical character recognition for raster images.
//!
//! Soft-fail policy: a single undecodable or unrecognizable image must not
//! abort the whole document. The failure message becomes the extracted
//! text and the language is `Undetected`, so the combined output degrades
//! to an error-text page instead of raising.
//!
//! The recognition language hint is an explicit configuration value, not a
//! hidden default. Detection of the actual content language happens
//! post-hoc on the recognized text, not by language-aware recognition.

use tesseract::Tesseract;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};
use crate::language::{DetectedLanguage, LanguageDetector};

/// OCR engine configuration.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Tesseract language hint (ISO 639-2 code, e.g. "eng")
    pub language: String,
}

impl OcrConfig {
    /// Create the default configuration (English hint).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recognition language hint.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
        }
    }
}

/// Extracts text from a single raster image.
pub struct ImageOcr {
    config: OcrConfig,
}

impl ImageOcr {
    /// Create an OCR extractor with the default configuration.
    pub fn new() -> Self {
        Self {
            config: OcrConfig::default(),
        }
    }

    /// Create an OCR extractor with a custom configuration.
    pub fn with_config(config: OcrConfig) -> Self {
        Self { config }
    }

    /// The configuration in effect.
    pub fn config(&self) -> &OcrConfig {
        &self.config
    }

    /// Extract text and a post-hoc detected language from encoded image
    /// bytes.
    ///
    /// Never fails: decode or recognition errors are returned as the text
    /// field with an `Undetected` language.
    pub fn extract(&self, bytes: &[u8], detector: &LanguageDetector) -> (String, DetectedLanguage) {
        match self.recognize(bytes) {
            Ok(text) => {
                let language = detector.detect(&text);
                (text, language)
            }
            Err(err) => {
                log::warn!("image OCR soft-failed: {err}");
                let message = err.to_string();
                (message.clone(), DetectedLanguage::Undetected(message))
            }
        }
    }

    fn recognize(&self, bytes: &[u8]) -> Result<String> {
        // Decode gate: reject bytes Tesseract would choke on with a typed
        // error instead of an opaque recognition failure.
        let decoded =
            image::load_from_memory(bytes).map_err(|e| Error::ImageDecode(e.to_string()))?;
        log::debug!(
            "decoded {}x{} image for OCR (hint: {})",
            decoded.width(),
            decoded.height(),
            self.config.language
        );

        let mut tess = Tesseract::new(None, Some(&self.config.language))
            .map_err(|e| Error::Ocr(e.to_string()))?
            .set_image_from_mem(bytes)
            .map_err(|e| Error::Ocr(e.to_string()))?
            .recognize()
            .map_err(|e| Error::Ocr(e.to_string()))?;
        let text = tess.get_text().map_err(|e| Error::Ocr(e.to_string()))?;

        Ok(text.nfc().collect())
    }
}

impl Default for ImageOcr {
    fn default() -> Self {
        Self::new()
    }
}
