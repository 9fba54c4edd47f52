//! # edgequake-pdf2img
//!
//! Rasterise every page of a PDF document into numbered PNG or JPEG files.
//!
//! Rendering is done by [PDFium](https://pdfium.googlesource.com/pdfium/)
//! through `pdfium-render`; encoding by the `image` crate. Pages are
//! processed one after another and written as `page_001.png`,
//! `page_002.png`, … into the output directory.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input   check the file exists, create the output directory
//!  ├─ 2. Open    bind pdfium, load the document
//!  ├─ 3. Render  page N at scale = dpi / 72
//!  ├─ 4. Encode  PNG (alpha kept) or JPEG (alpha dropped)
//!  └─ 5. Write   {output_dir}/page_{N:03}.{ext}, then the next page
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edgequake_pdf2img::{convert, ConversionConfig, OutputFormat};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::builder()
//!         .format(OutputFormat::Png)
//!         .dpi(300)
//!         .output_dir("output_images")
//!         .build()?;
//!     let summary = convert("document.pdf", &config)?;
//!     eprintln!("wrote {} images", summary.files.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2img` binary (clap + anyhow + indicatif + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! edgequake-pdf2img = { version = "0.1", default-features = false }
//! ```
//!
//! ## PDFium
//!
//! libpdfium is loaded at runtime; see [`engine::bind_pdfium`] for where it
//! is looked up. Pre-built libraries are published at
//! <https://github.com/bblanchon/pdfium-binaries/releases>.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod engine;
pub mod error;
pub mod options;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, OutputFormat};
pub use convert::convert;
pub use error::Pdf2ImgError;
pub use options::{parse_page_options, PageOptions};
pub use output::{page_file_name, ConversionSummary};
pub use progress::{ConversionProgressCallback, NoopProgressCallback, ProgressCallback};
