//! Configuration types for PDF-to-image conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. Callers set only what they care about
//! and rely on the defaults for the rest: PNG output at 300 DPI into
//! `./output_images`.

use crate::error::Pdf2ImgError;
use crate::progress::ProgressCallback;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default rendering resolution.
pub const DEFAULT_DPI: u32 = 300;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output_images";

/// Default JPEG quality, matching the usual encoder default.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Native reference resolution of PDF user space (1 pt = 1/72 inch).
pub const PDF_POINTS_PER_INCH: f32 = 72.0;

/// Configuration for a PDF-to-image conversion.
///
/// # Example
/// ```rust
/// use edgequake_pdf2img::{ConversionConfig, OutputFormat};
///
/// let config = ConversionConfig::builder()
///     .dpi(150)
///     .format(OutputFormat::Jpg)
///     .output_dir("scans")
///     .build()
///     .unwrap();
/// assert_eq!(config.scale_factor(), 150.0 / 72.0);
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Directory receiving `page_NNN.<ext>` files. Created with its parents
    /// when missing. Default: `output_images`.
    pub output_dir: PathBuf,

    /// Image format written for every page. Default: [`OutputFormat::Png`].
    pub format: OutputFormat,

    /// Rendering resolution in dots per inch. Must be > 0. Default: 300.
    pub dpi: u32,

    /// JPEG quality (1–100). Ignored for PNG. Default: 75.
    pub jpeg_quality: u8,

    /// PDF user password for encrypted documents.
    pub password: Option<String>,

    /// Explicit pdfium library file, or a directory containing it.
    /// When `None`, the lookup described in [`crate::engine::bind_pdfium`]
    /// applies.
    pub pdfium_library: Option<PathBuf>,

    /// Receives per-page progress events.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: OutputFormat::default(),
            dpi: DEFAULT_DPI,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            password: None,
            pdfium_library: None,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("output_dir", &self.output_dir)
            .field("format", &self.format)
            .field("dpi", &self.dpi)
            .field("jpeg_quality", &self.jpeg_quality)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("pdfium_library", &self.pdfium_library)
            .field(
                "progress_callback",
                &self
                    .progress_callback
                    .as_ref()
                    .map(|_| "<dyn ConversionProgressCallback>"),
            )
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Linear scale applied to both page axes: `dpi / 72`.
    pub fn scale_factor(&self) -> f32 {
        self.dpi as f32 / PDF_POINTS_PER_INCH
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi;
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.config.jpeg_quality = quality;
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    pub fn pdfium_library(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.pdfium_library = Some(path.into());
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Pdf2ImgError> {
        let c = &self.config;
        if c.dpi == 0 {
            return Err(Pdf2ImgError::InvalidConfig(
                "DPI must be a positive integer, got 0".into(),
            ));
        }
        if !(1..=100).contains(&c.jpeg_quality) {
            return Err(Pdf2ImgError::InvalidConfig(format!(
                "JPEG quality must be 1–100, got {}",
                c.jpeg_quality
            )));
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Image format written for each page.
///
/// `Jpg` and `Jpeg` encode identically; they differ only in the file
/// extension, which follows the spelling the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless; keeps the alpha channel of the render. (default)
    #[default]
    Png,
    /// Lossy; alpha is dropped before encoding. Written as `.jpg`.
    Jpg,
    /// Same encoder as [`OutputFormat::Jpg`], written as `.jpeg`.
    Jpeg,
}

impl OutputFormat {
    /// Lowercase file extension used in output names.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpg => "jpg",
            OutputFormat::Jpeg => "jpeg",
        }
    }

    /// Whether pages are encoded as JPEG.
    pub fn is_jpeg(self) -> bool {
        matches!(self, OutputFormat::Jpg | OutputFormat::Jpeg)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = Pdf2ImgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" => Ok(OutputFormat::Jpg),
            "jpeg" => Ok(OutputFormat::Jpeg),
            _ => Err(Pdf2ImgError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}
