//! Input format detection and validation.
//!
//! Sniffs the magic bytes of an upload to classify it as a paged document
//! (PDF) or one of the accepted raster kinds (PNG, JPEG/JFIF, TIFF, WEBP,
//! BMP). Extension-based routing is the upload collaborator's job; the
//! core trusts bytes only.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Recognized input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Paged document (processed by both the digital and OCR paths)
    Pdf,
    /// PNG raster image
    Png,
    /// JPEG/JFIF raster image
    Jpeg,
    /// TIFF raster image (either byte order)
    Tiff,
    /// WEBP raster image
    Webp,
    /// BMP raster image
    Bmp,
}

impl InputFormat {
    /// Short lowercase name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            InputFormat::Pdf => "pdf",
            InputFormat::Png => "png",
            InputFormat::Jpeg => "jpeg",
            InputFormat::Tiff => "tiff",
            InputFormat::Webp => "webp",
            InputFormat::Bmp => "bmp",
        }
    }

    /// Whether this format goes through the paged-document pipeline.
    pub fn is_paged(&self) -> bool {
        matches!(self, InputFormat::Pdf)
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const TIFF_MAGIC_LE: &[u8] = b"II*\x00";
const TIFF_MAGIC_BE: &[u8] = b"MM\x00*";
const RIFF_MAGIC: &[u8] = b"RIFF";
const WEBP_TAG: &[u8] = b"WEBP";
const BMP_MAGIC: &[u8] = b"BM";

/// Number of header bytes needed for an unambiguous decision.
const HEADER_LEN: usize = 12;

/// Detect the input format from a file path.
///
/// # Arguments
/// * `path` - Path to the file
///
/// # Returns
/// * `Ok(InputFormat)` for a recognized header
/// * `Err(Error::UnknownFormat)` otherwise
///
/// # Example
/// ```no_run
/// use docutext::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("document.pdf").unwrap();
/// println!("detected: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the input format from bytes.
///
/// # Arguments
/// * `data` - Byte slice containing at least the first 12 bytes of the file
///
/// # Returns
/// * `Ok(InputFormat)` if the data starts with a recognized header
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<InputFormat> {
    if data.len() < HEADER_LEN {
        return Err(Error::UnknownFormat);
    }

    if data.starts_with(PDF_MAGIC) {
        return Ok(InputFormat::Pdf);
    }
    if data.starts_with(PNG_MAGIC) {
        return Ok(InputFormat::Png);
    }
    if data.starts_with(JPEG_MAGIC) {
        return Ok(InputFormat::Jpeg);
    }
    if data.starts_with(TIFF_MAGIC_LE) || data.starts_with(TIFF_MAGIC_BE) {
        return Ok(InputFormat::Tiff);
    }
    if data.starts_with(RIFF_MAGIC) && &data[8..12] == WEBP_TAG {
        return Ok(InputFormat::Webp);
    }
    if data.starts_with(BMP_MAGIC) {
        return Ok(InputFormat::Bmp);
    }

    Err(Error::UnknownFormat)
}

/// Check if a file is a valid PDF.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    matches!(detect_format_from_path(path), Ok(InputFormat::Pdf))
}

/// Check if bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    matches!(detect_format_from_bytes(data), Ok(InputFormat::Pdf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_pdf() {
        let data = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3";
        assert_eq!(detect_format_from_bytes(data).unwrap(), InputFormat::Pdf);
    }

    #[test]
    fn test_detect_png() {
        let data = b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0D";
        assert_eq!(detect_format_from_bytes(data).unwrap(), InputFormat::Png);
    }

    #[test]
    fn test_detect_jpeg() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), InputFormat::Jpeg);
    }

    #[test]
    fn test_detect_tiff_both_orders() {
        let le = b"II*\x00\x08\x00\x00\x00\x00\x00\x00\x00";
        let be = b"MM\x00*\x00\x00\x00\x08\x00\x00\x00\x00";
        assert_eq!(detect_format_from_bytes(le).unwrap(), InputFormat::Tiff);
        assert_eq!(detect_format_from_bytes(be).unwrap(), InputFormat::Tiff);
    }

    #[test]
    fn test_detect_webp() {
        let data = b"RIFF\x24\x00\x00\x00WEBPVP8 ";
        assert_eq!(detect_format_from_bytes(data).unwrap(), InputFormat::Webp);
    }

    #[test]
    fn test_detect_bmp() {
        let data = b"BM\x3A\x00\x00\x00\x00\x00\x00\x00\x36\x00";
        assert_eq!(detect_format_from_bytes(data).unwrap(), InputFormat::Bmp);
    }

    #[test]
    fn test_detect_unknown() {
        let data = b"<!DOCTYPE html><html>";
        assert!(matches!(
            detect_format_from_bytes(data),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_detect_too_short() {
        let data = b"%PDF";
        assert!(matches!(
            detect_format_from_bytes(data),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_is_pdf_bytes() {
        assert!(is_pdf_bytes(b"%PDF-1.4\n%test"));
        assert!(!is_pdf_bytes(b"Not a PDF at all"));
        assert!(!is_pdf_bytes(b""));
    }

    #[test]
    fn test_format_names() {
        assert_eq!(InputFormat::Pdf.to_string(), "pdf");
        assert_eq!(InputFormat::Jpeg.to_string(), "jpeg");
        assert!(InputFormat::Pdf.is_paged());
        assert!(!InputFormat::Webp.is_paged());
    }
}
