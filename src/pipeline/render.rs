//! PDF rasterisation via pdfium.
//!
//! The page is rendered at `scale = dpi / 72` on both axes, so a US Letter
//! page (612 × 792 pt) at 300 DPI becomes 2550 × 3300 px. pdfium fills the
//! bitmap with its default white clear colour before drawing.

use crate::error::Pdf2ImgError;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Open `pdf_path` with pdfium, mapping load failures to typed errors.
pub fn open_document<'a>(
    pdfium: &'a Pdfium,
    pdf_path: &Path,
    password: Option<&'a str>,
) -> Result<PdfDocument<'a>, Pdf2ImgError> {
    let document = pdfium.load_pdf_from_file(pdf_path, password).map_err(|e| {
        let err_str = format!("{:?}", e);
        if err_str.contains("Password") || err_str.contains("password") {
            if password.is_some() {
                Pdf2ImgError::WrongPassword {
                    path: pdf_path.to_path_buf(),
                }
            } else {
                Pdf2ImgError::PasswordRequired {
                    path: pdf_path.to_path_buf(),
                }
            }
        } else {
            Pdf2ImgError::OpenFailed {
                path: pdf_path.to_path_buf(),
                detail: err_str,
            }
        }
    })?;

    info!(
        "Opened PDF '{}': {} pages",
        pdf_path.display(),
        document.pages().len()
    );
    Ok(document)
}

/// Render settings shared by every page of one run.
pub fn render_config(scale: f32) -> PdfRenderConfig {
    PdfRenderConfig::new().scale_page_by_factor(scale)
}

/// Rasterise a single page. `page_num` is 1-indexed and only used for
/// error reporting and logs.
///
/// The bitmap is released when this returns; only the decoded image
/// survives.
pub fn render_page(
    page: &PdfPage,
    page_num: usize,
    config: &PdfRenderConfig,
) -> Result<DynamicImage, Pdf2ImgError> {
    let bitmap = page
        .render_with_config(config)
        .map_err(|e| Pdf2ImgError::RenderFailed {
            page: page_num,
            detail: format!("{:?}", e),
        })?;

    let image = bitmap.as_image();
    debug!(
        "Rendered page {} → {}x{} px",
        page_num,
        image.width(),
        image.height()
    );

    Ok(image)
}
