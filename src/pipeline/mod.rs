//! Pipeline stages for PDF-to-image conversion.
//!
//! ```text
//! input ──▶ render ──▶ encode
//! (path)    (pdfium)   (png/jpeg file)
//! ```
//!
//! 1. [`input`]  — check the source exists, create the output directory
//! 2. [`render`] — open the document and rasterise one page at a time
//! 3. [`encode`] — fit the pixel format to the target codec and write the file
//!
//! [`crate::convert::convert`] drives the stages page by page so that at most
//! one page image is alive at any moment.

pub mod encode;
pub mod input;
pub mod render;
