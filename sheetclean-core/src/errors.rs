//! errors.rs - Custom error types for the sheetclean-core library.
//!
//! This module defines a structured error enum for the library so that the CLI
//! can tell usage problems (bad paths) apart from failures during cleaning.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// All error types raised by `sheetclean-core`.
///
/// `#[non_exhaustive]` so new variants can be added without breaking callers
/// that match on it.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SheetcleanError {
    #[error("Path {} {reason}", .path.display())]
    InvalidPath { path: PathBuf, reason: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to compile substitution rule '{0}': {1}")]
    RuleCompilation(String, regex::Error),

    #[error("Invalid substitution rule table: {0}")]
    RuleTable(String),

    #[error("Invalid code map {}: {reason}", .path.display())]
    CodeMap { path: PathBuf, reason: String },
}

impl SheetcleanError {
    /// Wraps an `std::io::Error` together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SheetcleanError::Io { path: path.into(), source }
    }

    pub fn invalid_path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        SheetcleanError::InvalidPath { path: path.into(), reason: reason.into() }
    }
}

/// Convenience alias used throughout the core crate.
pub type Result<T, E = SheetcleanError> = std::result::Result<T, E>;
