//! `clog <LEVEL> <MESSAGE>...` logs one line through the configured logger.
//!
//! Usage:
//!   clog info "Service started"
//!   clog --file run.log --no-color error "Disk full"
//!   clog --app backup --min-level warn warn "Snapshot slow"

use clap::Parser;
use clog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}
