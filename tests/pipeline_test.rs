//! Integration tests for digital extraction and result combination.

use std::path::Path;

use docutext::digital::{extract_digital, run_engine, EngineOutput, TextEngine};
use docutext::error::{Error, Result};
use docutext::language::{DetectedLanguage, LanguageDetector};
use docutext::model::{Table, NO_PDF_TEXT};

/// Mock engine returning a fixed output.
struct MockEngine {
    label: &'static str,
    text: &'static str,
    tables: Vec<Table>,
    language: DetectedLanguage,
}

impl MockEngine {
    fn new(label: &'static str, text: &'static str, language: DetectedLanguage) -> Self {
        Self {
            label,
            text,
            tables: Vec::new(),
            language,
        }
    }

    fn with_tables(mut self, tables: Vec<Table>) -> Self {
        self.tables = tables;
        self
    }
}

impl TextEngine for MockEngine {
    fn label(&self) -> &'static str {
        self.label
    }

    fn extract(&self, _path: &Path, _detector: &LanguageDetector) -> Result<EngineOutput> {
        Ok(EngineOutput {
            text: self.text.to_string(),
            tables: self.tables.clone(),
            language: self.language.clone(),
        })
    }
}

/// Mock engine that always fails.
struct BrokenEngine {
    label: &'static str,
    message: &'static str,
}

impl TextEngine for BrokenEngine {
    fn label(&self) -> &'static str {
        self.label
    }

    fn extract(&self, _path: &Path, _detector: &LanguageDetector) -> Result<EngineOutput> {
        Err(Error::engine(self.label, self.message))
    }
}

fn engines(list: Vec<Box<dyn TextEngine>>) -> Vec<Box<dyn TextEngine>> {
    list
}

#[test]
fn test_both_engines_appear_under_section_headers() {
    let detector = LanguageDetector::new();
    let engines = engines(vec![
        Box::new(MockEngine::new(
            "Engine A",
            "text layer content",
            DetectedLanguage::code("en"),
        )),
        Box::new(MockEngine::new(
            "Engine B",
            "layout content",
            DetectedLanguage::code("en"),
        )),
    ]);

    let outcome = extract_digital(&engines, Path::new("doc.pdf"), &detector);

    let a = outcome.text.find("--- Engine A Extraction ---").unwrap();
    let b = outcome.text.find("--- Engine B Extraction ---").unwrap();
    assert!(a < b);
    assert!(outcome.text.contains("text layer content"));
    assert!(outcome.text.contains("layout content"));
}

#[test]
fn test_one_broken_engine_degrades_to_error_text() {
    let detector = LanguageDetector::new();
    let engines = engines(vec![
        Box::new(BrokenEngine {
            label: "Engine A",
            message: "damaged cross-reference table",
        }),
        Box::new(MockEngine::new(
            "Engine B",
            "recovered text",
            DetectedLanguage::code("en"),
        )),
    ]);

    let outcome = extract_digital(&engines, Path::new("doc.pdf"), &detector);

    assert!(outcome.text.contains(
        "Error extracting text with Engine A: damaged cross-reference table"
    ));
    assert!(outcome.text.contains("recovered text"));
    // The broken engine's language is not confident, so Engine B's wins.
    assert_eq!(outcome.language, DetectedLanguage::code("en"));
}

#[test]
fn test_all_engines_broken_still_produces_text() {
    let detector = LanguageDetector::new();
    let engines = engines(vec![
        Box::new(BrokenEngine {
            label: "Engine A",
            message: "no trailer",
        }),
        Box::new(BrokenEngine {
            label: "Engine B",
            message: "no trailer",
        }),
    ]);

    let outcome = extract_digital(&engines, Path::new("doc.pdf"), &detector);

    // Error texts are content, so no sentinel is needed.
    assert!(outcome.text.contains("Error extracting text with Engine A"));
    assert!(outcome.text.contains("Error extracting text with Engine B"));
    assert!(outcome.language.is_undetected());
}

#[test]
fn test_first_confident_language_wins_across_engines() {
    let detector = LanguageDetector::new();
    let engines = engines(vec![
        Box::new(MockEngine::new(
            "Engine A",
            "bonjour le monde",
            DetectedLanguage::code("fr"),
        )),
        Box::new(MockEngine::new(
            "Engine B",
            "hello world, quite a lot of english",
            DetectedLanguage::code("en"),
        )),
    ]);

    let outcome = extract_digital(&engines, Path::new("doc.pdf"), &detector);
    assert_eq!(outcome.language, DetectedLanguage::code("fr"));
}

#[test]
fn test_tables_collected_in_engine_order() {
    let detector = LanguageDetector::new();
    let engines = engines(vec![
        Box::new(
            MockEngine::new("Engine A", "a", DetectedLanguage::code("en"))
                .with_tables(vec![Table::from_rows([vec!["first"]])]),
        ),
        Box::new(
            MockEngine::new("Engine B", "b", DetectedLanguage::code("en"))
                .with_tables(vec![Table::from_rows([vec!["second"]])]),
        ),
    ]);

    let outcome = extract_digital(&engines, Path::new("doc.pdf"), &detector);
    assert_eq!(outcome.tables.len(), 2);
    assert_eq!(outcome.tables[0].rows[0].cells, vec!["first"]);
    assert_eq!(outcome.tables[1].rows[0].cells, vec!["second"]);
}

#[test]
fn test_header_only_output_is_not_sentinel() {
    let detector = LanguageDetector::new();
    let engines = engines(vec![Box::new(MockEngine::new(
        "Engine A",
        "   \n  ",
        DetectedLanguage::Undetected("text is empty".to_string()),
    ))]);

    let outcome = extract_digital(&engines, Path::new("doc.pdf"), &detector);
    // Header-only output still counts as text, never the sentinel.
    assert!(outcome.text.contains("--- Engine A Extraction ---"));
    assert_ne!(outcome.text, NO_PDF_TEXT);
}

#[test]
fn test_repeated_extraction_is_byte_identical() {
    let detector = LanguageDetector::new();
    let engines = engines(vec![
        Box::new(
            MockEngine::new(
                "Engine A",
                "the quick brown fox jumps over the lazy dog",
                DetectedLanguage::code("en"),
            )
            .with_tables(vec![Table::from_rows([vec!["a", "b"]])]),
        ),
        Box::new(MockEngine::new(
            "Engine B",
            "layout pass output",
            DetectedLanguage::code("en"),
        )),
    ]);

    let first = extract_digital(&engines, Path::new("doc.pdf"), &detector);
    let second = extract_digital(&engines, Path::new("doc.pdf"), &detector);

    assert_eq!(first.text, second.text);
    assert_eq!(first.tables, second.tables);
    assert_eq!(first.language, second.language);
}

#[test]
fn test_run_engine_passes_through_success() {
    let detector = LanguageDetector::new();
    let engine = MockEngine::new("Engine A", "fine", DetectedLanguage::code("en"));

    let output = run_engine(&engine, Path::new("doc.pdf"), &detector);
    assert_eq!(output.text, "fine");
    assert_eq!(output.language, DetectedLanguage::code("en"));
}
