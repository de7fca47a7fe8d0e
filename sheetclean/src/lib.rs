// sheetclean/src/lib.rs
//! # sheetclean CLI
//!
//! Command-line front end for `sheetclean-core`: argument parsing and path
//! validation, logger setup, and the `clean` runner.

pub mod cli;
pub mod commands;
pub mod logger;

pub use commands::clean::{run_clean, CleanOptions};
