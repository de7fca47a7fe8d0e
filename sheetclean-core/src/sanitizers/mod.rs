//! Rule compilation for the cleaning engine.
//!
//! Turns the data-only [`crate::config::RuleSetConfig`] into regular
//! expressions that the [`crate::cleaner::Cleaner`] applies in order.

pub mod compiler;
