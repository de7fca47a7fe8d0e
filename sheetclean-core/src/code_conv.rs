// sheetclean-core/src/code_conv.rs
//! Remapping of three-digit numeric character references (`&#NNN;`).
//!
//! Some exported sheets use a music-notation font whose glyphs sit at code
//! points 128..=159; browsers decode those as Windows-1252 punctuation. A code
//! map, produced from the font's character map, points each such code at the
//! code the glyph actually lives at.

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::path::Path;

use crate::errors::{Result, SheetcleanError};

static CHAR_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"&#([0-9]{3});").expect("static pattern"));

/// Table mapping a three-digit decimal code to its replacement code.
///
/// A `null` target in the JSON file is treated like a missing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeConvMap {
    map: HashMap<String, u32>,
}

impl CodeConvMap {
    /// Loads a JSON object of the form `{"128": 8364, "130": null}`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading code map from: {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|e| SheetcleanError::io(path, e))?;
        let map = Self::from_json(&text).map_err(|reason| SheetcleanError::CodeMap {
            path: path.to_path_buf(),
            reason,
        })?;
        debug!("Loaded {} code mappings.", map.len());
        Ok(map)
    }

    fn from_json(text: &str) -> std::result::Result<Self, String> {
        let raw: HashMap<String, Option<u32>> =
            serde_json::from_str(text).map_err(|e| e.to_string())?;
        if let Some(bad) = raw.keys().find(|k| k.len() != 3 || !k.bytes().all(|b| b.is_ascii_digit())) {
            return Err(format!("key '{}' is not a three-digit code", bad));
        }
        let map = raw
            .into_iter()
            .filter_map(|(code, target)| target.map(|t| (code, t)))
            .collect();
        Ok(Self { map })
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Rewrites every `&#NNN;` whose code is in the table.
    pub fn apply(&self, text: &str) -> String {
        CHAR_REF
            .replace_all(text, |caps: &Captures| match self.map.get(&caps[1]) {
                Some(target) => format!("&#{};", target),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

impl FromIterator<(String, u32)> for CodeConvMap {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self { map: iter.into_iter().collect() }
    }
}
