// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles rulematch.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Config file name looked up by [`locate`].
pub const CONFIG_FILE_NAME: &str = "rulematch.toml";

/// Supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Rules directory, relative to the working directory.
pub const DEFAULT_RULES_DIR: &str = ".claude/rules";

/// Extension identifying rule documents.
pub const DEFAULT_EXTENSION: &str = "md";

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "rules"];

/// Known `[rules]` keys in the config.
const KNOWN_RULES_KEYS: &[&str] = &["dir", "extension"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(default)]
    rules: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Rule document location.
    pub rules: RulesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            rules: RulesConfig::default(),
        }
    }
}

/// Where rule documents live and how they are recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesConfig {
    /// Directory listed (one level) for rule documents.
    pub dir: PathBuf,

    /// File extension of rule documents, without the leading dot.
    pub extension: String,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_RULES_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl RulesConfig {
    /// Rules config for `dir` with the default extension.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    /// Apply command-line overrides on top of this config.
    ///
    /// An `--extension` that is empty once its leading dots are removed is
    /// rejected, since no rule file could ever be selected by it.
    pub fn with_overrides(
        mut self,
        dir: Option<&Path>,
        extension: Option<&str>,
    ) -> Result<Self> {
        if let Some(dir) = dir {
            self.dir = dir.to_path_buf();
        }
        if let Some(extension) = extension {
            self.extension = normalize_extension(extension).ok_or_else(|| {
                Error::Argument(format!("--extension {:?} names no file extension", extension))
            })?;
        }
        Ok(self)
    }
}

/// Pick the config file for a run.
///
/// An explicit path (`-C` or `RULEMATCH_CONFIG`) must name an existing
/// file. Otherwise the nearest rulematch.toml at or above `cwd` is used;
/// the search does not leave the repository `cwd` belongs to, so a
/// directory holding `.git` is the last one examined.
pub fn locate(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(Error::Config {
                message: format!("config file not found: {}", path.display()),
                path: Some(path.to_path_buf()),
            });
        }
        return Ok(Some(path.to_path_buf()));
    }

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Ok(Some(candidate));
        }
        if dir.join(".git").exists() {
            tracing::debug!("no config found up to repository root {}", dir.display());
            break;
        }
    }

    Ok(None)
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})\n  Upgrade rulematch to use this config.",
            version, SUPPORTED_VERSION
        )));
    }

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let rules = match flexible.rules {
        None => RulesConfig::default(),
        Some(toml::Value::Table(t)) => parse_rules_config(&t, path)?,
        Some(_) => return Err(config_error("`rules` must be a table".to_string())),
    };

    Ok(Config { version, rules })
}

fn parse_rules_config(table: &toml::Table, path: &Path) -> Result<RulesConfig> {
    let mut rules = RulesConfig::default();

    for (key, value) in table {
        match (key.as_str(), value) {
            ("dir", toml::Value::String(dir)) => rules.dir = PathBuf::from(dir),
            ("extension", toml::Value::String(ext)) => {
                rules.extension = normalize_extension(ext).ok_or_else(|| Error::Config {
                    message: "`rules.extension` must not be empty".to_string(),
                    path: Some(path.to_path_buf()),
                })?;
            }
            (known, _) if KNOWN_RULES_KEYS.contains(&known) => {
                return Err(Error::Config {
                    message: format!("`rules.{}` must be a string", known),
                    path: Some(path.to_path_buf()),
                });
            }
            (unknown, _) => warn_unknown_key(path, &format!("rules.{}", unknown)),
        }
    }

    Ok(rules)
}

/// Strip leading dots; `None` when nothing is left.
fn normalize_extension(extension: &str) -> Option<String> {
    let trimmed = extension.trim_start_matches('.');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::debug!("ignoring unknown config key {}", key);
    eprintln!(
        "rulematch: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
