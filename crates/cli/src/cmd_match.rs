// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match command implementation.

use rulematch::cli::{Cli, OutputFormat};
use rulematch::config::{self, Config};
use rulematch::error::{Error, ExitCode};
use rulematch::output::{JsonFormatter, TextFormatter};
use rulematch::{changes, rules};

/// Run the match command.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;

    let config = match config::locate(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load(&path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };

    tracing::trace!("match command starting");

    let rules_config = config
        .rules
        .with_overrides(cli.rules_dir.as_deref(), cli.extension.as_deref())?;

    let changed_files = changes::read_changed_files(&cli.changed_files)?;
    let matched = rules::match_rules_with(&changed_files, &rules_config)?;

    tracing::debug!(
        "{} changed files, {} rules matched",
        changed_files.len(),
        matched.len()
    );

    let stdout = std::io::stdout().lock();
    match cli.output {
        OutputFormat::Text => TextFormatter::new(stdout).write(&matched)?,
        OutputFormat::Json => JsonFormatter::new(stdout).write(&matched)?,
    }

    Ok(ExitCode::Success)
}
