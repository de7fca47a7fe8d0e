//! Command implementations for the sheetclean CLI.

pub mod clean;
