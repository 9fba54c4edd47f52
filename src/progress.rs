//! Progress-callback trait for per-page conversion events.
//!
//! Inject an [`Arc<dyn ConversionProgressCallback>`] via
//! [`crate::config::ConversionConfigBuilder::progress_callback`] to receive
//! an event after every page is written. The CLI uses it to drive a terminal
//! progress bar; library callers can forward events anywhere they like.
//!
//! # Example
//!
//! ```rust
//! use edgequake_pdf2img::{ConversionProgressCallback, ConversionConfig};
//! use std::path::Path;
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingCallback {
//!     written: AtomicUsize,
//! }
//!
//! impl ConversionProgressCallback for CountingCallback {
//!     fn on_page_complete(&self, page_num: usize, total_pages: usize, path: &Path) {
//!         self.written.fetch_add(1, Ordering::SeqCst);
//!         eprintln!("{}/{} → {}", page_num, total_pages, path.display());
//!     }
//! }
//!
//! let counter = Arc::new(CountingCallback { written: AtomicUsize::new(0) });
//!
//! let config = ConversionConfig::builder()
//!     .progress_callback(counter as Arc<dyn ConversionProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use std::path::Path;
use std::sync::Arc;

/// Called by the conversion loop as it writes each page.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Pages are processed sequentially, so events arrive
/// in page order on the calling thread.
pub trait ConversionProgressCallback: Send + Sync {
    /// Called once after the document is opened, before any page is rendered.
    fn on_conversion_start(&self, total_pages: usize) {
        let _ = total_pages;
    }

    /// Called after a page image has been written.
    ///
    /// # Arguments
    /// * `page_num`    — 1-indexed page number
    /// * `total_pages` — total pages in the document
    /// * `path`        — the file just written
    fn on_page_complete(&self, page_num: usize, total_pages: usize, path: &Path) {
        let _ = (page_num, total_pages, path);
    }

    /// Called once after every page has been written.
    fn on_conversion_complete(&self, total_pages: usize) {
        let _ = total_pages;
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl ConversionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConversionConfig`].
pub type ProgressCallback = Arc<dyn ConversionProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct TrackingCallback {
        started_total: AtomicUsize,
        pages: Mutex<Vec<(usize, PathBuf)>>,
        completed_total: AtomicUsize,
    }

    impl ConversionProgressCallback for TrackingCallback {
        fn on_conversion_start(&self, total_pages: usize) {
            self.started_total.store(total_pages, Ordering::SeqCst);
        }

        fn on_page_complete(&self, page_num: usize, _total_pages: usize, path: &Path) {
            self.pages
                .lock()
                .unwrap()
                .push((page_num, path.to_path_buf()));
        }

        fn on_conversion_complete(&self, total_pages: usize) {
            self.completed_total.store(total_pages, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_conversion_start(5);
        cb.on_page_complete(1, 5, Path::new("output_images/page_001.png"));
        cb.on_conversion_complete(5);
    }

    #[test]
    fn tracking_callback_receives_events() {
        let tracker = TrackingCallback::default();

        tracker.on_conversion_start(2);
        tracker.on_page_complete(1, 2, Path::new("out/page_001.png"));
        tracker.on_page_complete(2, 2, Path::new("out/page_002.png"));
        tracker.on_conversion_complete(2);

        assert_eq!(tracker.started_total.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.completed_total.load(Ordering::SeqCst), 2);
        let pages = tracker.pages.lock().unwrap();
        assert_eq!(pages[0], (1, PathBuf::from("out/page_001.png")));
        assert_eq!(pages[1].0, 2);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: ProgressCallback = Arc::new(NoopProgressCallback);
        cb.on_conversion_start(10);
        cb.on_page_complete(1, 10, Path::new("page_001.jpg"));
    }
}
