// sheetclean-core/src/cleaner.rs
//! The cleaning engine: text, single file, and mirrored directory tree.
//!
//! A [`Cleaner`] owns a shared, compiled rule table and an optional
//! [`CodeConvMap`]. All operations are synchronous and stop at the first I/O
//! error; files already written by [`Cleaner::clean_tree`] are left in place.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::code_conv::CodeConvMap;
use crate::errors::{Result, SheetcleanError};
use crate::sanitizers::compiler::{default_compiled_rules, CompiledRules};

/// File extensions (lower-case, without the dot) processed by tree mode.
pub const HTML_EXTENSIONS: [&str; 2] = ["html", "htm"];

#[derive(Debug, Clone)]
pub struct Cleaner {
    rules: Arc<CompiledRules>,
    code_map: Option<CodeConvMap>,
}

impl Cleaner {
    /// Builds a cleaner over the built-in rule table.
    pub fn new() -> Result<Self> {
        Ok(Self::with_rules(default_compiled_rules()?))
    }

    pub fn with_rules(rules: Arc<CompiledRules>) -> Self {
        Self { rules, code_map: None }
    }

    /// Adds character-reference remapping after the substitution rules.
    pub fn with_code_map(mut self, code_map: CodeConvMap) -> Self {
        self.code_map = Some(code_map);
        self
    }

    /// Applies every rule in order, then the code map if one is set.
    pub fn clean_text(&self, content: &str) -> String {
        let cleaned = self.rules.apply(content);
        match &self.code_map {
            Some(map) => map.apply(&cleaned),
            None => cleaned,
        }
    }

    /// Reads `src`, cleans it, and writes the result to `dst`.
    ///
    /// `dst` is created or truncated; its parent directory must already exist.
    pub fn clean_file(&self, src: &Path, dst: &Path) -> Result<()> {
        let content = fs::read_to_string(src).map_err(|e| SheetcleanError::io(src, e))?;
        let cleaned = self.clean_text(&content);
        debug!(
            "Cleaned {}: {} bytes -> {} bytes",
            src.display(),
            content.len(),
            cleaned.len()
        );
        fs::write(dst, cleaned).map_err(|e| SheetcleanError::io(dst, e))
    }

    /// Cleans every `.html`/`.htm` file under `src_root` into the same
    /// relative location under `dst_root`.
    ///
    /// Destination directories are created as needed, only for directories
    /// that contain at least one HTML file somewhere below them. When
    /// `dst_root` lies inside `src_root` the walk never descends into it.
    /// Symlinks are skipped, whether they point at files or directories.
    pub fn clean_tree(&self, src_root: &Path, dst_root: &Path) -> Result<()> {
        let resolved_dst = resolve_destination(dst_root)?;
        debug!("Destination root resolves to {}", resolved_dst.display());
        self.clean_dir(src_root, dst_root, &resolved_dst, src_root)
    }

    fn clean_dir(&self, src_root: &Path, dst_root: &Path, resolved_dst: &Path, current: &Path) -> Result<()> {
        let entries = fs::read_dir(current).map_err(|e| SheetcleanError::io(current, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| SheetcleanError::io(current, e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| SheetcleanError::io(&path, e))?;

            if file_type.is_dir() {
                let canonical = fs::canonicalize(&path).map_err(|e| SheetcleanError::io(&path, e))?;
                if canonical == resolved_dst {
                    debug!("Skipping destination root {}", path.display());
                    continue;
                }
                self.clean_dir(src_root, dst_root, resolved_dst, &path)?;
            } else if file_type.is_file() && is_html(&path) {
                let relative = path
                    .strip_prefix(src_root)
                    .map_err(|_| SheetcleanError::invalid_path(&path, "is outside the source tree"))?;
                let dst = dst_root.join(relative);
                if let Some(parent) = dst.parent() {
                    fs::create_dir_all(parent).map_err(|e| SheetcleanError::io(parent, e))?;
                }
                info!("Cleaning {} -> {}", path.display(), dst.display());
                self.clean_file(&path, &dst)?;
            } else {
                debug!("Skipping {}", path.display());
            }
        }
        Ok(())
    }
}

/// Absolute, symlink-free form of `dst`, which need not exist yet.
///
/// The deepest existing ancestor is canonicalized and the missing tail is
/// appended unchanged.
fn resolve_destination(dst: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(dst).map_err(|e| SheetcleanError::io(dst, e))?;
    let mut existing = absolute.as_path();
    let mut missing = Vec::new();
    loop {
        if let Ok(canonical) = fs::canonicalize(existing) {
            return Ok(missing.iter().rev().fold(canonical, |acc, name| acc.join(name)));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name);
                existing = parent;
            }
            _ => return Ok(absolute.clone()),
        }
    }
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| HTML_EXTENSIONS.iter().any(|h| ext.eq_ignore_ascii_case(h)))
}
