//! Natural language detection.
//!
//! Wraps a statistical detector behind a soft-fail contract: any text with
//! no linguistic signal (empty, purely numeric, symbolic) yields a typed
//! [`DetectedLanguage::Undetected`] carrying the diagnostic, never an
//! error. Detection is deterministic: identical input always yields the
//! identical code across calls and process restarts.

use lingua::LanguageDetectorBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A detected language: a valid ISO 639-1 code or a typed undetectable
/// outcome. Never a silently-empty string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedLanguage {
    /// Lowercase ISO 639-1 code, e.g. "en"
    Code(String),
    /// Detection failed; carries the diagnostic message
    Undetected(String),
}

impl DetectedLanguage {
    /// Build a detected code.
    pub fn code(code: impl Into<String>) -> Self {
        DetectedLanguage::Code(code.into())
    }

    /// The ISO code, if detection succeeded.
    pub fn as_code(&self) -> Option<&str> {
        match self {
            DetectedLanguage::Code(code) => Some(code),
            DetectedLanguage::Undetected(_) => None,
        }
    }

    /// Whether detection failed.
    pub fn is_undetected(&self) -> bool {
        matches!(self, DetectedLanguage::Undetected(_))
    }
}

impl std::fmt::Display for DetectedLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectedLanguage::Code(code) => f.write_str(code),
            DetectedLanguage::Undetected(_) => f.write_str("unknown"),
        }
    }
}

/// Deterministic language detector over extracted text.
pub struct LanguageDetector {
    inner: lingua::LanguageDetector,
}

impl LanguageDetector {
    /// Create a detector covering all supported languages.
    ///
    /// Models are loaded lazily on first use; construction is cheap enough
    /// to do once per pipeline.
    pub fn new() -> Self {
        Self {
            inner: LanguageDetectorBuilder::from_all_languages().build(),
        }
    }

    /// Detect the language of `text`.
    ///
    /// Soft-fails: returns [`DetectedLanguage::Undetected`] with the
    /// diagnostic preserved instead of raising to the caller.
    ///
    /// # Example
    /// ```
    /// use docutext::language::LanguageDetector;
    ///
    /// let detector = LanguageDetector::new();
    /// let lang = detector.detect("the quick brown fox jumps over the lazy dog");
    /// assert_eq!(lang.as_code(), Some("en"));
    /// ```
    pub fn detect(&self, text: &str) -> DetectedLanguage {
        match self.try_detect(text) {
            Ok(code) => DetectedLanguage::Code(code),
            Err(err) => {
                log::debug!("language detection soft-failed: {err}");
                DetectedLanguage::Undetected(err.to_string())
            }
        }
    }

    fn try_detect(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(Error::LanguageDetection("text is empty".into()));
        }

        match self.inner.detect_language_of(text) {
            Some(language) => Ok(language.iso_code_639_1().to_string().to_lowercase()),
            None => Err(Error::LanguageDetection(
                "no linguistic content detected".into(),
            )),
        }
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_english() {
        let detector = LanguageDetector::new();
        let lang = detector.detect(
            "The quick brown fox jumps over the lazy dog while the sun sets behind the hills.",
        );
        assert_eq!(lang.as_code(), Some("en"));
    }

    #[test]
    fn test_detect_is_deterministic() {
        let detector = LanguageDetector::new();
        let text = "Er ging bei strömendem Regen durch die engen Gassen der alten Stadt.";
        let first = detector.detect(text);
        let second = detector.detect(text);
        assert_eq!(first, second);
        assert!(!first.is_undetected());
    }

    #[test]
    fn test_empty_text_is_undetected() {
        let detector = LanguageDetector::new();
        let lang = detector.detect("   \n\t ");
        assert!(lang.is_undetected());
        match lang {
            DetectedLanguage::Undetected(message) => {
                assert!(message.contains("empty"));
            }
            DetectedLanguage::Code(_) => unreachable!(),
        }
    }

    #[test]
    fn test_numeric_text_is_undetected() {
        let detector = LanguageDetector::new();
        let lang = detector.detect("12345 67890 --- +++ 42");
        assert!(lang.is_undetected());
    }

    #[test]
    fn test_display() {
        assert_eq!(DetectedLanguage::code("en").to_string(), "en");
        assert_eq!(
            DetectedLanguage::Undetected("whatever".into()).to_string(),
            "unknown"
        );
    }

    #[test]
    fn test_ordering_for_language_sets() {
        // BTreeSet membership relies on Ord; identical codes must collapse.
        let mut set = std::collections::BTreeSet::new();
        set.insert(DetectedLanguage::code("en"));
        set.insert(DetectedLanguage::code("en"));
        set.insert(DetectedLanguage::code("fr"));
        assert_eq!(set.len(), 2);
    }
}
