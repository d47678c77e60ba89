//! Result combination policies.
//!
//! Two deliberate policies live here and must not be "improved" silently:
//!
//! - Engine outputs are **not** merged into one coherent body. They are
//!   concatenated under per-engine section headers so a human reviewer can
//!   see both outputs side by side; the engines frequently disagree on
//!   whitespace and ordering for complex layouts, and transparency beats
//!   cleanliness here.
//! - The combined language is the first engine's unless it is
//!   `Undetected`, in which case the next engine's is used
//!   (first-engine-wins-if-confident), even when the first engine's text
//!   is empty and a later engine's is substantial.

use std::collections::BTreeSet;

use crate::digital::EngineOutput;
use crate::language::DetectedLanguage;
use crate::model::{Table, NO_PDF_TEXT};

/// Combined output of the digital extraction engines.
#[derive(Debug, Clone)]
pub struct DigitalOutcome {
    /// Section-headed concatenation of all engine texts
    pub text: String,

    /// All engines' tables, in engine order
    pub tables: Vec<Table>,

    /// First confidently detected engine language
    pub language: DetectedLanguage,
}

/// Combined output of the per-page OCR path.
#[derive(Debug, Clone)]
pub struct OcrOutcome {
    /// Page-headed concatenation of all pages' OCR text
    pub text: String,

    /// Distinct languages seen across pages
    pub languages: BTreeSet<DetectedLanguage>,
}

/// Concatenate engine outputs under section headers and pick the combined
/// language.
///
/// Section order follows engine order regardless of how the outputs were
/// produced. If the concatenated, trimmed result is entirely blank, the
/// fixed sentinel is substituted.
pub fn combine_engines(sections: Vec<(&'static str, EngineOutput)>) -> DigitalOutcome {
    let mut bodies = Vec::with_capacity(sections.len());
    let mut tables = Vec::new();
    let mut language =
        DetectedLanguage::Undetected("no extraction engine produced a language".to_string());
    let mut language_settled = false;

    for (label, output) in sections {
        bodies.push(format!(
            "--- {} Extraction ---\n{}",
            label,
            output.text.trim()
        ));
        tables.extend(output.tables);

        if !language_settled {
            let confident = !output.language.is_undetected();
            language = output.language;
            language_settled = confident;
        }
    }

    let mut text = bodies.join("\n\n");
    if text.trim().is_empty() {
        text = NO_PDF_TEXT.to_string();
    }

    DigitalOutcome {
        text,
        tables,
        language,
    }
}

/// Concatenate per-page OCR results under 1-indexed page headers and
/// collect the set of distinct languages.
///
/// Pages must be supplied in page order; the header numbering follows the
/// input order. If no page produced any text, the fixed sentinel is
/// substituted so the image pipeline never reports an empty string.
pub fn combine_pages(pages: Vec<(String, DetectedLanguage)>) -> OcrOutcome {
    let mut text = String::new();
    let mut languages = BTreeSet::new();
    let mut any_text = false;

    for (index, (page_text, language)) in pages.into_iter().enumerate() {
        if !page_text.trim().is_empty() {
            any_text = true;
        }
        text.push_str(&format!("--- Page {} ---\n{}\n", index + 1, page_text));
        languages.insert(language);
    }

    if !any_text {
        text = NO_PDF_TEXT.to_string();
    }

    OcrOutcome { text, languages }
}
