//! The conversion loop: open the PDF once, then render → encode → write
//! each page in order.
//!
//! Pages are processed strictly one at a time. The page handle and its image
//! belong to a single loop iteration and are dropped before the next page is
//! touched, so peak memory is one page worth of pixels regardless of document
//! length. The first error aborts the run; files already written stay.

use crate::config::ConversionConfig;
use crate::engine;
use crate::error::Pdf2ImgError;
use crate::output::{page_path, ConversionSummary};
use crate::pipeline::{encode, input, render};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Rasterise every page of `source` into `config.output_dir`.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `source` — Local path to a PDF
/// * `config` — Conversion configuration
///
/// # Returns
/// `Ok(ConversionSummary)` once every page has been written as
/// `page_001.<ext>` … `page_NNN.<ext>`.
///
/// # Errors
/// - [`Pdf2ImgError::SourceNotFound`] before anything is written
/// - [`Pdf2ImgError::OpenFailed`] (and password variants) from pdfium
/// - [`Pdf2ImgError::RenderFailed`] / write errors for the failing page
///
/// # Example
/// ```rust,no_run
/// use edgequake_pdf2img::{convert, ConversionConfig, OutputFormat};
///
/// let config = ConversionConfig::builder()
///     .format(OutputFormat::Jpeg)
///     .dpi(150)
///     .build()?;
/// let summary = convert("report.pdf", &config)?;
/// println!("{} pages → {}", summary.page_count, summary.output_dir.display());
/// # Ok::<(), edgequake_pdf2img::Pdf2ImgError>(())
/// ```
pub fn convert(
    source: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionSummary, Pdf2ImgError> {
    let total_start = Instant::now();
    let source = source.as_ref();
    info!("Starting conversion: {}", source.display());

    // ── Step 1: Validate input, prepare output ───────────────────────────
    let pdf_path = input::resolve_source(source)?;
    let output_dir = input::prepare_output_dir(&config.output_dir)?;

    // ── Step 2: Open the document ────────────────────────────────────────
    let pdfium = engine::bind_pdfium(config.pdfium_library.as_deref())?;
    let document = render::open_document(&pdfium, &pdf_path, config.password.as_deref())?;
    let pages = document.pages();
    let total_pages = pages.len() as usize;
    info!(
        "PDF has {} pages, rendering at {} DPI (scale {:.3})",
        total_pages,
        config.dpi,
        config.scale_factor()
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_start(total_pages);
    }

    // ── Step 3: Render and write page by page ────────────────────────────
    let render_config = render::render_config(config.scale_factor());
    let mut files = Vec::with_capacity(total_pages);

    for (idx, page) in pages.iter().enumerate() {
        let page_num = idx + 1;
        let image = render::render_page(&page, page_num, &render_config)?;
        drop(page);

        let path = page_path(&output_dir, page_num, config.format);
        encode::write_page(image, &path, config.format, config.jpeg_quality)?;

        info!("Finished: {}/{}", page_num, total_pages);
        if let Some(ref cb) = config.progress_callback {
            cb.on_page_complete(page_num, total_pages, &path);
        }
        files.push(path);
    }

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_complete(total_pages);
    }

    let duration_ms = total_start.elapsed().as_millis() as u64;
    info!(
        "Conversion complete: {} pages written to {} in {}ms",
        files.len(),
        output_dir.display(),
        duration_ms
    );

    Ok(ConversionSummary {
        source: pdf_path,
        output_dir,
        format: config.format,
        dpi: config.dpi,
        page_count: total_pages,
        files,
        duration_ms,
    })
}
