// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rulematch CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use rulematch::cli::Cli;
use rulematch::error::ExitCode;

mod cmd_match;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("RULEMATCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("rulematch: {}", e);
            match e.downcast_ref::<rulematch::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    cmd_match::run(&cli)
}
