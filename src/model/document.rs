//! Document handle types.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::detect::{self, InputFormat};
use crate::error::Result;

/// How a document is routed through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Paged document: digital extraction plus per-page OCR
    Pdf,
    /// Single raster image: OCR only
    Image,
}

impl From<InputFormat> for DocumentKind {
    fn from(format: InputFormat) -> Self {
        if format.is_paged() {
            DocumentKind::Pdf
        } else {
            DocumentKind::Image
        }
    }
}

/// An opaque handle to validated, already-persisted document bytes.
///
/// Owned by the upload collaborator; every extraction stage borrows it
/// read-only. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    path: PathBuf,
    kind: DocumentKind,
}

impl Document {
    /// Create a document handle with an explicit kind.
    pub fn new(path: impl Into<PathBuf>, kind: DocumentKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Open a document, sniffing its kind from the file's magic bytes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownFormat`] if the header matches no
    /// supported format, or an I/O error if the file cannot be read.
    ///
    /// # Example
    /// ```no_run
    /// use docutext::Document;
    ///
    /// let doc = Document::open("scan.pdf").unwrap();
    /// assert!(doc.is_pdf());
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let format = detect::detect_format_from_path(&path)?;
        Ok(Self {
            path: path.as_ref().to_path_buf(),
            kind: format.into(),
        })
    }

    /// Path to the on-disk bytes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pipeline routing kind.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Whether this document takes the paged-document path.
    pub fn is_pdf(&self) -> bool {
        self.kind == DocumentKind::Pdf
    }
}
