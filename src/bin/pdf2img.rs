//! CLI binary for edgequake-pdf2img.
//!
//! A thin shim over the library crate: clap handles help, version and the
//! global flags; the page options after the PDF path go through the lenient
//! [`parse_page_options`] so that typos warn instead of aborting.

use anyhow::{Context, Result};
use clap::Parser;
use edgequake_pdf2img::{
    convert, parse_page_options, ConversionConfig, ConversionProgressCallback, ProgressCallback,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"];

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: one bar, advanced after each written page.
struct CliProgressCallback {
    bar: ProgressBar,
}

impl CliProgressCallback {
    /// Starts as a spinner; `on_conversion_start` turns it into a bar once
    /// the page count is known.
    fn new_dynamic() -> Arc<Self> {
        let bar = ProgressBar::new(0);

        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICKS);

        bar.set_style(spinner_style);
        bar.set_prefix("Preparing");
        bar.set_message("Opening PDF…");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self { bar })
    }
}

impl ConversionProgressCallback for CliProgressCallback {
    fn on_conversion_start(&self, total_pages: usize) {
        let progress_style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} pages  \
             ⏱ {elapsed_precise}  ETA {eta_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(TICKS);

        self.bar.set_length(total_pages as u64);
        self.bar.set_style(progress_style);
        self.bar.set_prefix("Rendering");
        self.bar.reset_eta();
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!("Opened PDF with {total_pages} pages…"))
        ));
    }

    fn on_page_complete(&self, page_num: usize, total: usize, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.bar.println(format!(
            "  {} Page {:>3}/{:<3}  {}",
            green("✓"),
            page_num,
            total,
            dim(&name),
        ));
        self.bar.inc(1);
    }

    fn on_conversion_complete(&self, _total_pages: usize) {
        self.bar.finish_and_clear();
    }
}

const AFTER_HELP: &str = r#"PAGE OPTIONS (after the PDF path):
  -format png|jpg|jpeg
                     Output image format (default: png); the file
                     extension follows the spelling given
  -dpi N             Rendering resolution (default: 300)
  -output DIR        Output directory (default: output_images)
  -quality N         JPEG quality 1-100 (default: 75)
  -password PASS     Password for encrypted PDFs

  Unknown options and invalid values are reported as warnings and ignored.
  --json, --no-progress, -v/--verbose, -q/--quiet and --pdfium-lib PATH are
  also recognised when they appear among the page options.

EXAMPLES:
  # Every page as PNG at 300 DPI into ./output_images
  pdf2img document.pdf

  # JPEG at 150 DPI
  pdf2img document.pdf -format jpg -dpi 150

  # Machine-readable summary
  pdf2img --json document.pdf -output scans

OUTPUT:
  output_images/page_001.png, page_002.png, … one file per page.

PDFIUM:
  libpdfium is loaded from --pdfium-lib, then next to the executable, then
  the working directory, then the system library path.
  Pre-built libraries: https://github.com/bblanchon/pdfium-binaries/releases
"#;

/// Convert every page of a PDF to PNG or JPEG images.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2img",
    version,
    about = "Convert every page of a PDF to PNG or JPEG images",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the PDF file.
    input: PathBuf,

    /// Page options: -format png|jpg|jpeg, -dpi N, -output DIR, -quality N, -password PASS.
    #[arg(
        value_name = "OPTIONS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    options: Vec<String>,

    /// pdfium shared library, or a directory containing it.
    #[arg(long)]
    pdfium_lib: Option<PathBuf>,

    /// Print a JSON summary of the written files on stdout.
    #[arg(long)]
    json: bool,

    /// Disable progress bar.
    #[arg(long)]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Global flags written after the PDF path land in `options` because of
    /// `trailing_var_arg`. Move them back onto their fields so they are not
    /// reported as unknown page options.
    fn lift_trailing_globals(&mut self) {
        let mut rest = Vec::with_capacity(self.options.len());
        let mut args = std::mem::take(&mut self.options).into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => self.json = true,
                "--no-progress" => self.no_progress = true,
                "-v" | "--verbose" => self.verbose = true,
                "-q" | "--quiet" => self.quiet = true,
                "--pdfium-lib" => match args.next() {
                    Some(path) => self.pdfium_lib = Some(PathBuf::from(path)),
                    None => rest.push(arg),
                },
                _ => match arg.strip_prefix("--pdfium-lib=") {
                    Some(path) => self.pdfium_lib = Some(PathBuf::from(path)),
                    None => rest.push(arg),
                },
            }
        }
        self.options = rest;
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    cli.lift_trailing_globals();

    // ── Logging setup ────────────────────────────────────────────────────
    // While the progress bar is active it carries per-page feedback, so
    // only warnings and errors are logged.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else if show_progress {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Page options ─────────────────────────────────────────────────────
    let opts = parse_page_options(cli.options.as_slice());
    for warning in &opts.warnings {
        warn!("{}", warning);
    }

    // ── Build config ─────────────────────────────────────────────────────
    let progress_bar = show_progress.then(CliProgressCallback::new_dynamic);
    let progress_cb: Option<ProgressCallback> = progress_bar
        .clone()
        .map(|cb| cb as Arc<dyn ConversionProgressCallback>);

    let mut builder = ConversionConfig::builder()
        .output_dir(opts.output_dir)
        .format(opts.format)
        .dpi(opts.dpi)
        .jpeg_quality(opts.jpeg_quality);
    if let Some(password) = opts.password {
        builder = builder.password(password);
    }
    if let Some(ref lib) = cli.pdfium_lib {
        builder = builder.pdfium_library(lib);
    }
    if let Some(cb) = progress_cb {
        builder = builder.progress_callback(cb);
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    let result = convert(&cli.input, &config);
    if let (Err(_), Some(cb)) = (&result, &progress_bar) {
        cb.bar.finish_and_clear();
    }
    let summary = result.context("Conversion failed")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialise summary")?;
        println!("{json}");
    } else if !cli.quiet {
        eprintln!(
            "{}  {} pages  {}ms  →  {}",
            green("✔"),
            summary.page_count,
            summary.duration_ms,
            bold(&summary.output_dir.display().to_string()),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut cli = Cli::try_parse_from(args).expect("valid command line");
        cli.lift_trailing_globals();
        cli
    }

    #[test]
    fn page_options_follow_the_path() {
        let cli = parse(&["pdf2img", "doc.pdf", "-format", "jpg", "-dpi", "150"]);
        assert_eq!(cli.input, PathBuf::from("doc.pdf"));
        assert_eq!(cli.options, vec!["-format", "jpg", "-dpi", "150"]);
        assert!(!cli.json);
    }

    #[test]
    fn global_flags_after_the_path_are_not_page_options() {
        let cli = parse(&[
            "pdf2img",
            "doc.pdf",
            "-format",
            "jpg",
            "--json",
            "-q",
            "--pdfium-lib",
            "/opt/pdfium",
        ]);
        assert!(cli.json);
        assert!(cli.quiet);
        assert_eq!(cli.pdfium_lib, Some(PathBuf::from("/opt/pdfium")));
        assert_eq!(cli.options, vec!["-format", "jpg"]);
        assert!(parse_page_options(cli.options.as_slice()).warnings.is_empty());
    }

    #[test]
    fn global_flags_before_the_path_still_work() {
        let cli = parse(&["pdf2img", "--no-progress", "doc.pdf", "-dpi", "72"]);
        assert!(cli.no_progress);
        assert_eq!(cli.options, vec!["-dpi", "72"]);
    }

    #[test]
    fn dangling_pdfium_lib_is_left_for_the_page_parser() {
        let cli = parse(&["pdf2img", "doc.pdf", "--pdfium-lib"]);
        assert_eq!(cli.pdfium_lib, None);
        assert_eq!(cli.options, vec!["--pdfium-lib"]);
    }

    #[test]
    fn pdfium_lib_is_not_read_from_the_environment() {
        let cli = parse(&["pdf2img", "doc.pdf"]);
        assert_eq!(cli.pdfium_lib, None);
    }
}
