// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Changed-file list input.
//!
//! The list is plain text, one path per line. Surrounding whitespace is
//! trimmed and blank lines are skipped.

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Parse a changed-file list from text.
pub fn parse_changed_files(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Read a changed-file list from `path`, or from stdin when `path` is `-`.
pub fn read_changed_files(path: &Path) -> Result<Vec<String>> {
    let content = if path == Path::new(STDIN_PATH) {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| Error::io(path, e))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?
    };

    let files = parse_changed_files(&content);
    tracing::debug!("read {} changed files from {}", files.len(), path.display());
    Ok(files)
}

#[cfg(test)]
#[path = "changes_tests.rs"]
mod tests;
