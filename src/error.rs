//! Error type for the edgequake-pdf2img library.
//!
//! Every failure is fatal to the run: the first error aborts the remaining
//! pages and is returned as `Err(Pdf2ImgError)` from [`crate::convert`].
//! Pages already written before the failure stay on disk.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the edgequake-pdf2img library.
#[derive(Debug, Error)]
pub enum Pdf2ImgError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Source file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    SourceNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// Any other I/O failure while opening the source.
    #[error("Cannot read PDF '{path}': {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// PDFium could not parse the file as a PDF document.
    #[error("Failed to open PDF '{path}': {detail}")]
    OpenFailed { path: PathBuf, detail: String },

    /// PDF requires a password but none was provided.
    #[error("PDF '{path}' is encrypted and requires a password.\nProvide it with -password <PASSWORD>.")]
    PasswordRequired { path: PathBuf },

    /// A password was provided but it is wrong.
    #[error("Wrong password for PDF '{path}'")]
    WrongPassword { path: PathBuf },

    /// pdfium-render returned an error for a specific page (1-indexed).
    #[error("Rasterisation failed for page {page}: {detail}")]
    RenderFailed { page: usize, detail: String },

    // ── Output errors ─────────────────────────────────────────────────────
    /// The output directory could not be created.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An image file could not be created or flushed.
    #[error("Failed to write image '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image encoder rejected the page.
    #[error("Failed to encode image '{path}': {source}")]
    ImageEncodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Requested output format is not one of png, jpg, jpeg.
    #[error("Unsupported image format '{format}' (expected png, jpg or jpeg)")]
    UnsupportedFormat { format: String },

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library:\n  {0}\n\n\
Place libpdfium next to the pdf2img executable or in the working directory,\n\
install it on the system library path, or pass --pdfium-lib /path/to/libpdfium.\n\
Pre-built libraries: https://github.com/bblanchon/pdfium-binaries/releases"
    )]
    PdfiumBindingFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_not_found_display() {
        let e = Pdf2ImgError::SourceNotFound {
            path: PathBuf::from("/nope/report.pdf"),
        };
        assert!(e.to_string().contains("/nope/report.pdf"));
    }

    #[test]
    fn render_failed_display() {
        let e = Pdf2ImgError::RenderFailed {
            page: 7,
            detail: "bitmap allocation failed".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("page 7"), "got: {msg}");
        assert!(msg.contains("bitmap allocation failed"));
    }

    #[test]
    fn write_failed_keeps_io_source() {
        use std::error::Error as _;

        let e = Pdf2ImgError::OutputWriteFailed {
            path: PathBuf::from("out/page_001.png"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert!(e.to_string().contains("page_001.png"));
        assert_eq!(e.source().map(|s| s.to_string()), Some("disk full".into()));
    }

    #[test]
    fn unsupported_format_display() {
        let e = Pdf2ImgError::UnsupportedFormat {
            format: "tiff".into(),
        };
        assert!(e.to_string().contains("'tiff'"));
    }
}
