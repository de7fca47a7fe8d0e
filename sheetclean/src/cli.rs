//! This file defines the command-line interface (CLI) for sheetclean.
//!
//! Path arguments are validated while parsing, so a bad `--src-file` or
//! `--dst-dir` is reported as a usage error before any file is touched.

use clap::Parser;
use std::path::PathBuf;

use sheetclean_core::{PathSpec, SheetcleanError};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "sheetclean",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip word-processor export artifacts from HTML files",
    long_about = "sheetclean removes empty Office paragraph markers and rewrites whitespace-run spans in HTML exported from a word processor. It cleans a single file (--src-file), a whole directory tree mirrored into a new root (--src-dir), or both in one run."
)]
pub struct Cli {
    /// Source HTML file to clean.
    #[arg(long = "src-file", alias = "src_file", value_name = "FILE", value_parser = parse_source_file)]
    pub src_file: Option<PathBuf>,

    /// Destination for the cleaned file (default: source name with "-new" inserted).
    #[arg(long = "dst-file", alias = "dst_file", value_name = "FILE", value_parser = parse_dest_file)]
    pub dst_file: Option<PathBuf>,

    /// Source directory whose .html/.htm files are cleaned recursively.
    #[arg(long = "src-dir", alias = "src_dir", value_name = "DIR", value_parser = parse_source_dir)]
    pub src_dir: Option<PathBuf>,

    /// Destination root for the mirrored tree (default: source name with "-new" appended).
    #[arg(long = "dst-dir", alias = "dst_dir", value_name = "DIR", value_parser = parse_dest_dir)]
    pub dst_dir: Option<PathBuf>,

    /// JSON table remapping three-digit character references (e.g. {"128": 9833}).
    #[arg(long = "code-map", value_name = "FILE", env = "SHEETCLEAN_CODE_MAP", value_parser = parse_source_file)]
    pub code_map: Option<PathBuf>,

    /// Suppress all log output.
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd')]
    pub debug: bool,
}

fn parse_with(spec: PathSpec, raw: &str) -> Result<PathBuf, SheetcleanError> {
    spec.validate(raw)?
        .ok_or_else(|| SheetcleanError::invalid_path(raw, "must not be empty"))
}

fn parse_source_file(raw: &str) -> Result<PathBuf, SheetcleanError> {
    parse_with(PathSpec::SOURCE_FILE, raw)
}

fn parse_dest_file(raw: &str) -> Result<PathBuf, SheetcleanError> {
    parse_with(PathSpec::DEST_FILE, raw)
}

fn parse_source_dir(raw: &str) -> Result<PathBuf, SheetcleanError> {
    parse_with(PathSpec::SOURCE_DIR, raw)
}

fn parse_dest_dir(raw: &str) -> Result<PathBuf, SheetcleanError> {
    parse_with(PathSpec::DEST_DIR, raw)
}
