//! Rule table management for `sheetclean-core`.
//!
//! The substitution rules are kept as data: an embedded YAML document that is
//! parsed into a [`RuleSetConfig`] and validated before compilation. Rule order
//! in the document is the order of application.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::{Result, SheetcleanError};

/// One global find-and-replace transformation over text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubstitutionRule {
    /// Unique identifier for the rule (e.g., "empty_office_paragraph").
    pub name: String,
    /// Human-readable description of what the rule targets.
    #[serde(default)]
    pub description: Option<String>,
    /// The regex pattern string.
    pub pattern: String,
    /// Replacement template; `$1`/`${name}` expand capture groups.
    #[serde(default)]
    pub replace_with: String,
}

/// The ordered list of substitution rules.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleSetConfig {
    pub rules: Vec<SubstitutionRule>,
}

impl RuleSetConfig {
    /// Loads the built-in rule table from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let config = Self::from_yaml(default_yaml)?;
        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }

    /// Parses and validates a rule table from YAML text.
    pub(crate) fn from_yaml(text: &str) -> Result<Self> {
        let config: RuleSetConfig = serde_yml::from_str(text)
            .map_err(|e| SheetcleanError::RuleTable(format!("Failed to parse rules: {}", e)))?;
        validate_rules(&config.rules)?;
        Ok(config)
    }
}

/// Checks names are present and unique and patterns are non-empty.
///
/// Regex syntax is checked later, at compile time.
fn validate_rules(rules: &[SubstitutionRule]) -> Result<()> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.as_str()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }
        if rule.pattern.is_empty() {
            errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SheetcleanError::RuleTable(errors.join("\n")))
    }
}
