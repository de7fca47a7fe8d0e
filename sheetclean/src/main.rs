// sheetclean/src/main.rs
//! sheetclean entry point.

use anyhow::Result;
use clap::Parser;

use sheetclean::cli::Cli;
use sheetclean::logger;
use sheetclean::{CleanOptions, run_clean};

fn main() -> Result<()> {
    let args = Cli::parse();
    logger::init_logger(logger::level_for_flags(args.quiet, args.debug));
    log::debug!("sheetclean started. Version: {}", env!("CARGO_PKG_VERSION"));

    run_clean(CleanOptions::from(args))
}
