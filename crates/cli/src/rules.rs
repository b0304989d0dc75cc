// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule documents and the matching pass over changed files.
//!
//! A rule matches when any of its `paths:` globs accepts any changed file.
//! Rules without globs never match.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::config::RulesConfig;
use crate::error::{Error, Result};
use crate::frontmatter::{parse_paths, strip_frontmatter};
use crate::pattern::GlobCache;

/// A rule document loaded from disk.
#[derive(Debug, Clone)]
pub struct RuleDocument {
    path: PathBuf,
    patterns: Vec<String>,
    content: String,
}

/// A rule whose globs matched at least one changed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedRule {
    /// Rule path as listed from the rules directory (e.g. `.claude/rules/rust.md`).
    pub path: String,
    /// Rule body with the frontmatter stripped.
    pub body: String,
}

impl RuleDocument {
    /// Build a rule document from already-read content.
    pub fn parse(path: impl Into<PathBuf>, content: String) -> Self {
        let patterns = parse_paths(&content);
        Self {
            path: path.into(),
            patterns,
            content,
        }
    }

    /// Read and parse a rule document.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::parse(path, content))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Globs declared under `paths:`, in declaration order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// The document text with the frontmatter removed.
    pub fn body(&self) -> &str {
        strip_frontmatter(&self.content)
    }

    /// Find the first (glob, changed file) pair that matches.
    ///
    /// Globs are tried in declaration order and files in the given order.
    pub fn first_match<'a>(
        &'a self,
        changed_files: &'a [String],
        cache: &mut GlobCache,
    ) -> Option<(&'a str, &'a str)> {
        for pattern in &self.patterns {
            let Some(matcher) = cache.get_or_compile(pattern) else {
                continue;
            };
            if let Some(file) = changed_files.iter().find(|f| matcher.is_match(f)) {
                return Some((pattern.as_str(), file.as_str()));
            }
        }
        None
    }

    /// Returns true if any glob matches any changed file.
    pub fn matches(&self, changed_files: &[String], cache: &mut GlobCache) -> bool {
        self.first_match(changed_files, cache).is_some()
    }

    fn into_matched(self) -> MatchedRule {
        MatchedRule {
            path: self.path.display().to_string(),
            body: self.body().to_string(),
        }
    }
}

/// List rule documents in `rules_dir` with the given extension.
///
/// Only the top level is listed. Results are sorted by file name. A
/// missing directory yields no rules.
pub fn discover_rules(rules_dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !rules_dir.is_dir() {
        tracing::debug!("rules directory {} not found", rules_dir.display());
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(rules_dir).map_err(|e| Error::io(rules_dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(rules_dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!(
        "found {} rule documents in {}",
        paths.len(),
        rules_dir.display()
    );
    Ok(paths)
}

/// Match changed files against the `.md` rules in `rules_dir`.
pub fn match_rules(changed_files: &[String], rules_dir: &Path) -> Result<Vec<MatchedRule>> {
    match_rules_with(changed_files, &RulesConfig::in_dir(rules_dir))
}

/// Match changed files against the rules described by `config`.
///
/// Rules are returned in file-name order. Any unreadable rule document
/// fails the whole run.
pub fn match_rules_with(
    changed_files: &[String],
    config: &RulesConfig,
) -> Result<Vec<MatchedRule>> {
    if changed_files.is_empty() {
        return Ok(Vec::new());
    }

    let paths = discover_rules(&config.dir, &config.extension)?;

    let results: Vec<Option<MatchedRule>> = paths
        .par_iter()
        .map_init(GlobCache::new, |cache, path| {
            match_document(path, changed_files, cache)
        })
        .collect::<Result<_>>()?;

    Ok(results.into_iter().flatten().collect())
}

fn match_document(
    path: &Path,
    changed_files: &[String],
    cache: &mut GlobCache,
) -> Result<Option<MatchedRule>> {
    let rule = RuleDocument::load(path)?;

    if rule.patterns().is_empty() {
        tracing::debug!("{}: no paths declared, skipping", path.display());
        return Ok(None);
    }

    let Some((pattern, file)) = rule.first_match(changed_files, cache) else {
        return Ok(None);
    };
    tracing::debug!("{}: '{}' matched {}", path.display(), pattern, file);

    Ok(Some(rule.into_matched()))
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
