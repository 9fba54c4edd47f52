//! Lenient parser for the single-dash option list that follows the PDF path
//! on the command line: `-format jpg -dpi 150 -output scans`.
//!
//! Nothing here is fatal. Unknown options, missing values and unparsable
//! numbers each produce a warning and leave the default in place, so a typo
//! never prevents the conversion from running.

use crate::config::{OutputFormat, DEFAULT_DPI, DEFAULT_JPEG_QUALITY, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;

/// Options recognised after the PDF path, with defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub format: OutputFormat,
    pub dpi: u32,
    pub output_dir: PathBuf,
    pub jpeg_quality: u8,
    pub password: Option<String>,
    /// Human-readable notes about ignored or replaced input, in argument order.
    pub warnings: Vec<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            dpi: DEFAULT_DPI,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            password: None,
            warnings: Vec::new(),
        }
    }
}

/// Parse `args` (everything after the PDF path).
///
/// Recognised: `-format png|jpg|jpeg`, `-dpi N`, `-output DIR`, `-quality N`,
/// `-password PASS`. An option with no following value counts as unknown.
pub fn parse_page_options<S: AsRef<str>>(args: &[S]) -> PageOptions {
    let mut opts = PageOptions::default();
    let mut i = 0;

    while i < args.len() {
        let flag: &str = args[i].as_ref();
        let value: Option<&str> = args.get(i + 1).map(|v| v.as_ref());

        match (flag, value) {
            ("-format", Some(v)) => {
                match v.parse::<OutputFormat>() {
                    Ok(format) => opts.format = format,
                    Err(_) => opts.warnings.push(format!(
                        "unsupported format '{v}', using {}",
                        OutputFormat::default()
                    )),
                }
                i += 2;
            }
            ("-dpi", Some(v)) => {
                match v.trim().parse::<u32>() {
                    Ok(dpi) if dpi > 0 => opts.dpi = dpi,
                    _ => opts.warnings.push(format!(
                        "DPI must be a positive integer (got '{v}'), using default {DEFAULT_DPI}"
                    )),
                }
                i += 2;
            }
            ("-output", Some(v)) => {
                opts.output_dir = PathBuf::from(v);
                i += 2;
            }
            ("-quality", Some(v)) => {
                match v.trim().parse::<u8>() {
                    Ok(q) if (1..=100).contains(&q) => opts.jpeg_quality = q,
                    _ => opts.warnings.push(format!(
                        "JPEG quality must be 1-100 (got '{v}'), using default {DEFAULT_JPEG_QUALITY}"
                    )),
                }
                i += 2;
            }
            ("-password", Some(v)) => {
                opts.password = Some(v.to_string());
                i += 2;
            }
            _ => {
                opts.warnings
                    .push(format!("unknown argument '{flag}', ignored"));
                i += 1;
            }
        }
    }

    opts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::page_file_name;

    #[test]
    fn empty_gives_defaults() {
        let opts = parse_page_options::<&str>(&[]);
        assert_eq!(opts, PageOptions::default());
        assert_eq!(opts.dpi, 300);
        assert_eq!(opts.output_dir, PathBuf::from("output_images"));
    }

    #[test]
    fn format_and_dpi() {
        let opts = parse_page_options(&["-format", "JPG", "-dpi", "150"]);
        assert_eq!(opts.format, OutputFormat::Jpg);
        assert_eq!(opts.dpi, 150);
        assert!(opts.warnings.is_empty());
    }

    #[test]
    fn invalid_dpi_falls_back_to_300() {
        let opts = parse_page_options(&["-dpi", "high", "-format", "jpg"]);
        assert_eq!(opts.dpi, 300);
        assert_eq!(opts.format, OutputFormat::Jpg, "parsing continues");
        assert_eq!(opts.warnings.len(), 1);
        assert!(opts.warnings[0].contains("'high'"));
    }

    #[test]
    fn zero_and_negative_dpi_fall_back() {
        assert_eq!(parse_page_options(&["-dpi", "0"]).dpi, 300);
        assert_eq!(parse_page_options(&["-dpi", "-20"]).dpi, 300);
        assert_eq!(parse_page_options(&["-dpi", "72.5"]).dpi, 300);
    }

    #[test]
    fn unknown_flags_are_skipped_with_warning() {
        let opts = parse_page_options(&["--fast", "-dpi", "96", "extra.pdf"]);
        assert_eq!(opts.dpi, 96);
        assert_eq!(
            opts.warnings,
            vec![
                "unknown argument '--fast', ignored".to_string(),
                "unknown argument 'extra.pdf', ignored".to_string(),
            ]
        );
    }

    #[test]
    fn trailing_flag_without_value_is_unknown() {
        let opts = parse_page_options(&["-format", "jpg", "-dpi"]);
        assert_eq!(opts.format, OutputFormat::Jpg);
        assert_eq!(opts.dpi, 300);
        assert_eq!(opts.warnings, vec!["unknown argument '-dpi', ignored"]);
    }

    #[test]
    fn unsupported_format_keeps_png() {
        let opts = parse_page_options(&["-format", "bmp"]);
        assert_eq!(opts.format, OutputFormat::Png);
        assert!(opts.warnings[0].contains("'bmp'"));
    }

    #[test]
    fn file_extension_keeps_the_requested_spelling() {
        let name = |f: &str| page_file_name(1, parse_page_options(&["-format", f]).format);
        assert_eq!(name("jpeg"), "page_001.jpeg");
        assert_eq!(name("JPEG"), "page_001.jpeg");
        assert_eq!(name("JPG"), "page_001.jpg");
        assert_eq!(name("Png"), "page_001.png");
    }

    #[test]
    fn output_quality_password() {
        let opts = parse_page_options(&[
            "-output", "scans/out", "-quality", "92", "-password", "s3cret",
        ]);
        assert_eq!(opts.output_dir, PathBuf::from("scans/out"));
        assert_eq!(opts.jpeg_quality, 92);
        assert_eq!(opts.password.as_deref(), Some("s3cret"));
    }

    #[test]
    fn bad_quality_keeps_default() {
        let opts = parse_page_options(&["-quality", "0"]);
        assert_eq!(opts.jpeg_quality, 75);
        assert_eq!(opts.warnings.len(), 1);
    }
}
