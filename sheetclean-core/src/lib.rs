// sheetclean-core/src/lib.rs
//! # sheetclean Core Library
//!
//! `sheetclean-core` holds the logic for normalising HTML exported from a word
//! processor: a fixed, ordered table of regular-expression substitutions and
//! the engine that applies it to text, to a single file, or to a whole
//! directory tree mirrored into a destination root.
//!
//! ## Modules
//!
//! * `config`: The substitution rule table, stored as embedded YAML.
//! * `sanitizers`: Compiles the rule table into regular expressions, once per process.
//! * `cleaner`: The [`Cleaner`] with its text, file and tree operations.
//! * `code_conv`: Optional remapping of `&#NNN;` references through a JSON table.
//! * `paths`: Validation of path arguments and default destination naming.
//! * `errors`: The [`SheetcleanError`] type.
//!
//! ## Usage Example
//!
//! ```rust
//! use sheetclean_core::Cleaner;
//!
//! fn main() -> Result<(), sheetclean_core::SheetcleanError> {
//!     let cleaner = Cleaner::new()?;
//!     let cleaned = cleaner.clean_text("Some text<o:p></o:p>more text");
//!     assert_eq!(cleaned, "Some textmore text");
//!     Ok(())
//! }
//! ```
//!
//! License: MIT OR Apache-2.0

pub mod cleaner;
pub mod code_conv;
pub mod config;
pub mod errors;
pub mod paths;
pub mod sanitizers;

pub use cleaner::{Cleaner, HTML_EXTENSIONS};
pub use code_conv::CodeConvMap;
pub use config::{RuleSetConfig, SubstitutionRule};
pub use errors::SheetcleanError;
pub use paths::{default_destination, PathKind, PathSpec};
pub use sanitizers::compiler::{compile_rules, default_compiled_rules, CompiledRule, CompiledRules};
