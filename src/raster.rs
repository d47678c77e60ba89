//! PDF page rasterization.
//!
//! Converts a paged document into per-page JPEG images for the OCR path.
//! The rendering scale is fixed at 300/72 by default, high enough for
//! legible OCR on typical scanned text, independent of the source PDF's
//! native DPI metadata.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat};
use pdfium_render::prelude::*;

use crate::error::{Error, Result};
use crate::model::PageImage;

/// Default rendering scale: ~300 DPI from the 72-DPI page unit baseline.
pub const DEFAULT_RASTER_SCALE: f32 = 300.0 / 72.0;

/// Bind to the PDFium library.
///
/// Searches the current directory, then `vendor/pdfium/lib/`, then the
/// system library paths.
pub(crate) fn bind_pdfium() -> std::result::Result<Pdfium, PdfiumError> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                "./vendor/pdfium/lib/",
            ))
        })
        .or_else(|_| Pdfium::bind_to_system_library())?;
    Ok(Pdfium::new(bindings))
}

/// Renders PDF pages to encoded raster images.
pub struct Rasterizer {
    scale: f32,
}

impl Rasterizer {
    /// Create a rasterizer at the default 300/72 scale.
    pub fn new() -> Self {
        Self {
            scale: DEFAULT_RASTER_SCALE,
        }
    }

    /// Create a rasterizer with a custom scale.
    pub fn with_scale(scale: f32) -> Self {
        Self { scale }
    }

    /// The rendering scale in effect.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Rasterize every page of the PDF at `path`, in page order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Rasterize`] if the document cannot be parsed or a
    /// page cannot be rendered. A corrupt page aborts the whole document;
    /// there is no partial-page recovery at this layer.
    pub fn rasterize(&self, path: &Path) -> Result<Vec<PageImage>> {
        let pdfium = bind_pdfium().map_err(|e| Error::Rasterize(e.to_string()))?;
        let document = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| Error::Rasterize(e.to_string()))?;

        let page_count = document.pages().len();
        log::debug!(
            "rasterizing {} at scale {:.2} ({} pages)",
            path.display(),
            self.scale,
            page_count
        );

        let mut pages = Vec::with_capacity(page_count as usize);
        for (index, page) in document.pages().iter().enumerate() {
            let width = (page.width().value * self.scale).round() as i32;
            let height = (page.height().value * self.scale).round() as i32;
            let config = PdfRenderConfig::new().set_target_size(width, height);

            let bitmap = page
                .render_with_config(&config)
                .map_err(|e| Error::Rasterize(format!("page {}: {}", index + 1, e)))?;

            // JPEG cannot carry an alpha channel.
            let rendered = DynamicImage::ImageRgb8(bitmap.as_image().to_rgb8());
            let mut bytes = Vec::new();
            rendered
                .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
                .map_err(|e| Error::Rasterize(format!("page {}: {}", index + 1, e)))?;

            pages.push(PageImage::new(index as u32, bytes, self.scale));
        }

        Ok(pages)
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}
