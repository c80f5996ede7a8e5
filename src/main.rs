//! Route Audit - Command-line tool for backend/frontend route consistency checks.
//!
//! This binary runs the audit pipeline: it extracts the backend's declared
//! routes and the frontend's API call sites, reconciles the two lists, and
//! writes JSON snapshots plus a Markdown report of every inconsistency.
//!
//! # Usage
//!
//! ```bash
//! route-audit [OPTIONS]
//! ```
//!
//! # Examples
//!
//! Run the full pipeline against the default directories:
//! ```bash
//! route-audit
//! ```
//!
//! Audit specific directories:
//! ```bash
//! route-audit -b server/routes -f client/src -o reports
//! ```
//!
//! Run only the backend extraction:
//! ```bash
//! route-audit --stage backend
//! ```

mod cli;
mod config;
mod scanner;
mod extractor;
mod normalize;
mod reconciler;
mod report;
mod serializer;

use anyhow::Result;
use clap::Parser;
use log::info;

fn main() -> Result<()> {
    // Parse args first to get the verbose flag, then init the logger before
    // the validating parse so validation messages are logged.
    let args_for_verbose = cli::CliArgs::parse();

    let log_level = if args_for_verbose.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Route audit starting...");

    let args = cli::parse_args_from_parsed(args_for_verbose)?;

    cli::run(args)?;

    info!("Route audit finished successfully");

    Ok(())
}
