//! PDFium binding: locate the platform shared library and load it.
//!
//! `pdfium-render` loads libpdfium dynamically at runtime. [`bind_pdfium`]
//! walks a short, fixed list of places and binds to the first library that
//! loads, falling back to the system library search path. Nothing is
//! downloaded.

use crate::error::Pdf2ImgError;
use pdfium_render::prelude::Pdfium;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Bind to a PDFium library.
///
/// Lookup order (first library that loads wins):
///
/// 1. `explicit` — a library file, or a directory holding the platform
///    library name (`libpdfium.so`, `libpdfium.dylib`, `pdfium.dll`)
/// 2. the directory of the running executable
/// 3. the current working directory
/// 4. the system library search path
///
/// # Errors
/// [`Pdf2ImgError::PdfiumBindingFailed`] listing every failed attempt.
pub fn bind_pdfium(explicit: Option<&Path>) -> Result<Pdfium, Pdf2ImgError> {
    let mut failures = Vec::new();

    for candidate in library_candidates(explicit) {
        match Pdfium::bind_to_library(&candidate) {
            Ok(bindings) => {
                debug!("Bound pdfium from {}", candidate.display());
                return Ok(Pdfium::new(bindings));
            }
            Err(e) => {
                debug!("pdfium not loadable from {}: {}", candidate.display(), e);
                failures.push(format!("{}: {}", candidate.display(), e));
            }
        }
    }

    match Pdfium::bind_to_system_library() {
        Ok(bindings) => {
            debug!("Bound pdfium from the system library path");
            Ok(Pdfium::new(bindings))
        }
        Err(e) => {
            failures.push(format!("system library: {e}"));
            Err(Pdf2ImgError::PdfiumBindingFailed(failures.join("\n  ")))
        }
    }
}

/// Candidate library paths tried before the system search path, in order.
pub fn library_candidates(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = explicit {
        if path.is_dir() {
            candidates.push(path.join(Pdfium::pdfium_platform_library_name()));
        } else {
            candidates.push(path.to_path_buf());
        }
    }

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join(Pdfium::pdfium_platform_library_name()));
    }

    candidates.push(PathBuf::from(".").join(Pdfium::pdfium_platform_library_name()));

    candidates.dedup();
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform_name() -> PathBuf {
        PathBuf::from(Pdfium::pdfium_platform_library_name())
    }

    #[test]
    fn explicit_file_comes_first() {
        let lib = Path::new("/opt/pdfium/lib/libpdfium-custom.so");
        let candidates = library_candidates(Some(lib));
        assert_eq!(candidates[0], lib);
    }

    #[test]
    fn explicit_directory_gets_platform_name() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = library_candidates(Some(dir.path()));
        assert_eq!(candidates[0], dir.path().join(platform_name()));
    }

    #[test]
    fn working_directory_is_always_tried() {
        let candidates = library_candidates(None);
        assert_eq!(
            candidates.last(),
            Some(&PathBuf::from(".").join(platform_name()))
        );
    }

    #[test]
    fn missing_explicit_library_reports_the_path() {
        // Binding succeeds when a system pdfium is installed; only the
        // failure path is checked here.
        let bogus = Path::new("/definitely/not/here/libpdfium.so");
        if let Err(Pdf2ImgError::PdfiumBindingFailed(msg)) = bind_pdfium(Some(bogus)) {
            assert!(msg.contains("/definitely/not/here/libpdfium.so"), "got: {msg}");
        }
    }
}
