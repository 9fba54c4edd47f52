//! Image encoding: `DynamicImage` → PNG or JPEG file on disk.
//!
//! PNG is written from the render as-is, alpha included. JPEG has no alpha
//! channel, so the image is flattened to RGB first by dropping alpha.

use crate::config::OutputFormat;
use crate::error::Pdf2ImgError;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Fit the pixel format to what `format` can store.
pub fn prepare_image(image: DynamicImage, format: OutputFormat) -> DynamicImage {
    if !format.is_jpeg() {
        return image;
    }
    match image {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => image,
        other => DynamicImage::ImageRgb8(other.into_rgb8()),
    }
}

/// Encode `image` into `path`. `jpeg_quality` is ignored for PNG.
///
/// The image is consumed so its buffer is released as soon as the file is
/// written.
pub fn write_page(
    image: DynamicImage,
    path: &Path,
    format: OutputFormat,
    jpeg_quality: u8,
) -> Result<(), Pdf2ImgError> {
    let image = prepare_image(image, format);

    let file = File::create(path).map_err(|e| Pdf2ImgError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let encoded = if format.is_jpeg() {
        image.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, jpeg_quality))
    } else {
        image.write_to(&mut writer, ImageFormat::Png)
    };
    encoded.map_err(|e| Pdf2ImgError::ImageEncodeFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    writer.flush().map_err(|e| Pdf2ImgError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(
        "Wrote {} ({}x{} {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(())
}
