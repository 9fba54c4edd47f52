//! Output naming and the conversion summary.

use crate::config::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name for a 1-indexed page: `page_001.png`, `page_042.jpg`, …
///
/// Numbers wider than three digits are written in full (`page_1000.png`).
pub fn page_file_name(page_num: usize, format: OutputFormat) -> String {
    format!("page_{:03}.{}", page_num, format.extension())
}

/// Full output path for a 1-indexed page inside `output_dir`.
pub fn page_path(output_dir: &Path, page_num: usize, format: OutputFormat) -> PathBuf {
    output_dir.join(page_file_name(page_num, format))
}

/// Result of a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionSummary {
    /// The PDF that was rasterised.
    pub source: PathBuf,
    /// Directory the images were written to.
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub dpi: u32,
    /// Pages in the document; equals `files.len()` on success.
    pub page_count: usize,
    /// Written files, in page order.
    pub files: Vec<PathBuf>,
    /// Wall-clock time for the whole run.
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_zero_padded_and_one_based() {
        assert_eq!(page_file_name(1, OutputFormat::Png), "page_001.png");
        assert_eq!(page_file_name(42, OutputFormat::Jpg), "page_042.jpg");
        assert_eq!(page_file_name(42, OutputFormat::Jpeg), "page_042.jpeg");
        assert_eq!(page_file_name(999, OutputFormat::Png), "page_999.png");
        assert_eq!(page_file_name(1000, OutputFormat::Png), "page_1000.png");
    }

    #[test]
    fn names_sort_in_page_order() {
        let mut names: Vec<String> = (1..=120)
            .rev()
            .map(|n| page_file_name(n, OutputFormat::Png))
            .collect();
        names.sort();
        assert_eq!(names.first().map(String::as_str), Some("page_001.png"));
        assert_eq!(names.last().map(String::as_str), Some("page_120.png"));
    }

    #[test]
    fn page_path_joins_output_dir() {
        let p = page_path(Path::new("output_images"), 3, OutputFormat::Jpg);
        assert_eq!(p, PathBuf::from("output_images").join("page_003.jpg"));
    }

    #[test]
    fn summary_serialises_format_lowercase() {
        let summary = ConversionSummary {
            source: PathBuf::from("doc.pdf"),
            output_dir: PathBuf::from("output_images"),
            format: OutputFormat::Jpeg,
            dpi: 300,
            page_count: 1,
            files: vec![PathBuf::from("output_images/page_001.jpg")],
            duration_ms: 12,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["format"], "jpeg");
        assert_eq!(json["page_count"], 1);
        assert_eq!(json["files"][0], "output_images/page_001.jpg");
    }
}
