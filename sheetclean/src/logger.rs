// sheetclean/src/logger.rs
//! Logger initialisation on top of `env_logger`.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialises the global logger.
///
/// `RUST_LOG` is honoured (defaulting to `info`) unless `level_override` is
/// given. Calling this twice is harmless; the second call is ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp_secs();
    let _ = builder.try_init();
}

/// Picks the level override for the `--quiet`/`--debug` flags.
pub fn level_for_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
