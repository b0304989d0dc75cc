// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// Print the rules whose `paths:` globs match a list of changed files
#[derive(Parser)]
#[command(name = "rulematch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File listing changed paths, one per line ("-" for stdin)
    #[arg(value_name = "CHANGED_FILES")]
    pub changed_files: PathBuf,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "RULEMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory containing rule documents [default: .claude/rules]
    #[arg(long, value_name = "DIR")]
    pub rules_dir: Option<PathBuf>,

    /// Extension of rule documents [default: md]
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
