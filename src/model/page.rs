//! Rasterized page types.

use serde::{Deserialize, Serialize};

/// One rasterized page of a paged document.
///
/// Produced by the rasterizer (one per page, in page order), consumed and
/// discarded by the OCR stage. Never persisted by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageImage {
    /// Page index (0-based)
    pub index: u32,

    /// Encoded raster bytes (JPEG)
    pub bytes: Vec<u8>,

    /// Rendering scale relative to the 72-DPI page unit baseline
    pub dpi_scale: f32,
}

impl PageImage {
    /// Create a new page image.
    pub fn new(index: u32, bytes: Vec<u8>, dpi_scale: f32) -> Self {
        Self {
            index,
            bytes,
            dpi_scale,
        }
    }

    /// Human-readable page number (1-indexed).
    pub fn page_number(&self) -> u32 {
        self.index + 1
    }
}
