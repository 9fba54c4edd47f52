//! Input validation and output-directory preparation.

use crate::error::Pdf2ImgError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Validate that the source PDF exists and is readable.
///
/// Only existence and read permission are checked here; whether the bytes
/// form a PDF is left to pdfium when the document is opened.
pub fn resolve_source(path: &Path) -> Result<PathBuf, Pdf2ImgError> {
    if let Err(e) = std::fs::File::open(path) {
        let path = path.to_path_buf();
        return Err(match e.kind() {
            ErrorKind::NotFound => Pdf2ImgError::SourceNotFound { path },
            ErrorKind::PermissionDenied => Pdf2ImgError::PermissionDenied { path },
            _ => Pdf2ImgError::SourceUnreadable { path, source: e },
        });
    }

    debug!("Resolved local PDF: {}", path.display());
    Ok(path.to_path_buf())
}

/// Create `dir` and its parents if missing. An existing directory is fine.
pub fn prepare_output_dir(dir: &Path) -> Result<PathBuf, Pdf2ImgError> {
    std::fs::create_dir_all(dir).map_err(|e| Pdf2ImgError::OutputDirFailed {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let shown = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    info!("Images will be saved to: {}", shown.display());
    Ok(dir.to_path_buf())
}
