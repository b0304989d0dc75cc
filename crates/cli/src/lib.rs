// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match changed files against path-scoped rule documents.

pub mod changes;
pub mod cli;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod output;
pub mod pattern;
pub mod rules;

pub use cli::{Cli, OutputFormat};
pub use config::{Config, RulesConfig};
pub use error::{Error, ExitCode, Result};
pub use pattern::{GlobCache, GlobMatcher, glob_to_regex};
pub use rules::{MatchedRule, RuleDocument, discover_rules, match_rules, match_rules_with};
