//! Validation of path arguments and default destination naming.
//!
//! License: MIT OR Apache-2.0

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::errors::{Result, SheetcleanError};

/// What a path argument is expected to point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Dir,
}

/// Validation recipe for one path argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSpec {
    pub kind: PathKind,
    /// The path has to exist already (sources).
    pub must_exist: bool,
    /// An empty argument means "not given".
    pub nullable: bool,
}

impl PathSpec {
    /// An existing regular file.
    pub const SOURCE_FILE: PathSpec = PathSpec { kind: PathKind::File, must_exist: true, nullable: false };
    /// A file that may be created; if present it must be a regular file.
    pub const DEST_FILE: PathSpec = PathSpec { kind: PathKind::File, must_exist: false, nullable: false };
    /// An existing directory.
    pub const SOURCE_DIR: PathSpec = PathSpec { kind: PathKind::Dir, must_exist: true, nullable: false };
    /// A directory that may be created; if present it must be a directory.
    pub const DEST_DIR: PathSpec = PathSpec { kind: PathKind::Dir, must_exist: false, nullable: false };

    pub fn nullable(self) -> Self {
        PathSpec { nullable: true, ..self }
    }

    /// Checks `raw` against this spec and returns the validated path.
    ///
    /// Returns `Ok(None)` only for an empty argument on a nullable spec.
    pub fn validate(&self, raw: &str) -> Result<Option<PathBuf>> {
        if raw.is_empty() {
            return if self.nullable {
                Ok(None)
            } else {
                Err(SheetcleanError::invalid_path(raw, "must not be empty"))
            };
        }

        let path = PathBuf::from(raw);
        if !path.exists() {
            if self.must_exist {
                return Err(SheetcleanError::invalid_path(path, "does not exist"));
            }
            return Ok(Some(path));
        }

        match self.kind {
            PathKind::File if !path.is_file() => Err(SheetcleanError::invalid_path(path, "is not a file")),
            PathKind::Dir if !path.is_dir() => Err(SheetcleanError::invalid_path(path, "is not a directory")),
            _ => Ok(Some(path)),
        }
    }
}

/// Computes the sibling path used when no destination is given.
///
/// `-new` is inserted before the first `.` of the final component
/// (`report.html` -> `report-new.html`), or appended when there is none
/// (`archive` -> `archive-new`). A trailing `..` counts as a name (`..` ->
/// `-new..`) and a trailing `.` as an empty one (`.` -> `-new`).
pub fn default_destination(src: &Path) -> Result<PathBuf> {
    let name = match src.components().next_back() {
        Some(Component::Normal(name)) => name,
        Some(Component::ParentDir) => OsStr::new(".."),
        _ => OsStr::new(""),
    };
    let name = name
        .to_str()
        .ok_or_else(|| SheetcleanError::invalid_path(src, "has a file name that is not valid UTF-8"))?;
    let new_name = match name.find('.') {
        Some(pos) => format!("{}-new{}", &name[..pos], &name[pos..]),
        None => format!("{}-new", name),
    };
    let parent = src.parent().unwrap_or(src);
    Ok(parent.join(new_name))
}
