//! compiler.rs - Compiles substitution rules into regular expressions.
//!
//! The built-in rule table is compiled at most once per process and shared
//! through an `Arc`; the compiled form is read-only and safe to share across
//! threads.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use once_cell::sync::OnceCell;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::sync::Arc;

use crate::config::{RuleSetConfig, SubstitutionRule};
use crate::errors::{Result, SheetcleanError};

/// A single compiled substitution rule.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// Replacement template applied to every match.
    pub replace_with: String,
    /// The unique name of the rule.
    pub name: String,
}

impl CompiledRule {
    /// Replaces every non-overlapping match in `text`.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex.replace_all(text, self.replace_with.as_str())
    }
}

/// The ordered collection of compiled rules.
#[derive(Debug)]
pub struct CompiledRules {
    pub rules: Vec<CompiledRule>,
}

impl CompiledRules {
    /// Applies every rule in order; each rule sees the previous rule's output.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            let replaced = match rule.apply(&out) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(replaced) => replaced,
            };
            debug!("Rule '{}' rewrote the buffer.", rule.name);
            out = replaced;
        }
        out
    }
}

static DEFAULT_RULES: OnceCell<Arc<CompiledRules>> = OnceCell::new();

/// Compiles a list of rules, failing on the first invalid pattern.
pub fn compile_rules(rules_to_compile: Vec<SubstitutionRule>) -> Result<CompiledRules> {
    debug!("Starting compilation of {} rules.", rules_to_compile.len());

    let mut compiled_rules = Vec::with_capacity(rules_to_compile.len());
    for rule in rules_to_compile {
        let regex = RegexBuilder::new(&rule.pattern)
            .size_limit(10 * (1 << 20))
            .build()
            .map_err(|e| SheetcleanError::RuleCompilation(rule.name.clone(), e))?;

        log::debug!(
            target: "sheetclean_core::sanitizer",
            "Rule '{}' compiled successfully.",
            &rule.name
        );
        compiled_rules.push(CompiledRule {
            regex,
            replace_with: rule.replace_with,
            name: rule.name,
        });
    }

    Ok(CompiledRules { rules: compiled_rules })
}

/// Returns the built-in rule table, compiling it on first use.
pub fn default_compiled_rules() -> Result<Arc<CompiledRules>> {
    DEFAULT_RULES
        .get_or_try_init(|| {
            let config = RuleSetConfig::load_default_rules()?;
            compile_rules(config.rules).map(Arc::new)
        })
        .map(Arc::clone)
}
