//! The `clean` command: resolves destinations and drives the core cleaner.

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

use sheetclean_core::{default_destination, Cleaner, CodeConvMap};

use crate::cli::Cli;

/// Resolved inputs for one run.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    pub src_file: Option<PathBuf>,
    pub dst_file: Option<PathBuf>,
    pub src_dir: Option<PathBuf>,
    pub dst_dir: Option<PathBuf>,
    pub code_map: Option<PathBuf>,
}

impl From<Cli> for CleanOptions {
    fn from(cli: Cli) -> Self {
        Self {
            src_file: cli.src_file,
            dst_file: cli.dst_file,
            src_dir: cli.src_dir,
            dst_dir: cli.dst_dir,
            code_map: cli.code_map,
        }
    }
}

/// Runs file mode, then tree mode; each only if its source was given.
///
/// With no source at all this logs a warning and succeeds without touching
/// the filesystem.
pub fn run_clean(opts: CleanOptions) -> Result<()> {
    if opts.src_file.is_none() && opts.src_dir.is_none() {
        warn!("Nothing to clean: neither --src-file nor --src-dir was given.");
        return Ok(());
    }

    let mut cleaner = Cleaner::new().context("Failed to build the substitution rules")?;
    if let Some(path) = &opts.code_map {
        let map = CodeConvMap::load_from_file(path)
            .with_context(|| format!("Failed to load code map {}", path.display()))?;
        cleaner = cleaner.with_code_map(map);
    }

    if let Some(src_file) = &opts.src_file {
        let dst_file = match &opts.dst_file {
            Some(path) => path.clone(),
            None => default_destination(src_file)?,
        };
        info!("src file: {}", src_file.display());
        info!("dst file: {}", dst_file.display());
        cleaner
            .clean_file(src_file, &dst_file)
            .with_context(|| format!("Failed to clean file {}", src_file.display()))?;
    }

    if let Some(src_dir) = &opts.src_dir {
        let dst_dir = match &opts.dst_dir {
            Some(path) => path.clone(),
            None => default_destination(src_dir)?,
        };
        info!("src dir: {}", src_dir.display());
        info!("dst dir: {}", dst_dir.display());
        cleaner
            .clean_tree(src_dir, &dst_dir)
            .with_context(|| format!("Failed to clean directory {}", src_dir.display()))?;
    }

    info!("sheetclean completed.");
    Ok(())
}
