// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Glob-to-regex compilation for rule path patterns.
//!
//! Supported syntax:
//! - `**/` -> `(?:.+/)?` (zero or more directories)
//! - `**`  -> `.*` (anything, including separators)
//! - `*`   -> `[^/]*` (anything within one segment)
//! - `?`   -> `[^/]` (one character within one segment)
//!
//! Everything else is literal. The compiled regex is anchored at both ends.

use std::collections::HashMap;

use regex::Regex;

/// Characters that carry meaning in the regex dialect and must be escaped.
const REGEX_META: &[char] = &[
    '.', '+', '^', '$', '{', '}', '(', ')', '|', '\\', '[', ']',
];

/// Error during glob compilation.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("glob '{glob}' could not be compiled: {source}")]
    Compile {
        glob: String,
        #[source]
        source: regex::Error,
    },
}

/// Translate a glob pattern into an anchored regex source string.
///
/// Never fails: unknown or malformed input degrades to literal characters.
pub fn glob_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut regex = String::with_capacity(pattern.len() * 2 + 2);
    regex.push('^');

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' if chars.get(i + 1) == Some(&'*') => {
                if chars.get(i + 2) == Some(&'/') {
                    regex.push_str("(?:.+/)?");
                    i += 3;
                } else {
                    regex.push_str(".*");
                    i += 2;
                }
            }
            '*' => {
                regex.push_str("[^/]*");
                i += 1;
            }
            '?' => {
                regex.push_str("[^/]");
                i += 1;
            }
            c if REGEX_META.contains(&c) => {
                regex.push('\\');
                regex.push(c);
                i += 1;
            }
            c => {
                regex.push(c);
                i += 1;
            }
        }
    }

    regex.push('$');
    regex
}

/// A glob pattern compiled to an exact-match predicate over path strings.
#[derive(Debug, Clone)]
pub struct GlobMatcher {
    glob: String,
    regex: Regex,
}

impl GlobMatcher {
    /// Compile a glob pattern.
    ///
    /// The translation always produces valid regex syntax; an error is only
    /// possible when the compiled program exceeds the regex size limit.
    pub fn new(glob: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(&glob_to_regex(glob)).map_err(|source| PatternError::Compile {
            glob: glob.to_string(),
            source,
        })?;
        Ok(Self {
            glob: glob.to_string(),
            regex,
        })
    }

    /// Returns true if the whole of `path` matches the glob.
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// The glob this matcher was compiled from.
    pub fn glob(&self) -> &str {
        &self.glob
    }

    /// The anchored regex source backing this matcher.
    pub fn as_regex_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Memoizes compiled globs, since rule files often repeat the same pattern.
#[derive(Debug, Default)]
pub struct GlobCache {
    compiled: HashMap<String, Option<GlobMatcher>>,
}

impl GlobCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the compiled matcher for `glob`, compiling it on first use.
    ///
    /// A glob that fails to compile is logged once and cached as `None`,
    /// which callers treat as matching nothing.
    pub fn get_or_compile(&mut self, glob: &str) -> Option<&GlobMatcher> {
        self.compiled
            .entry(glob.to_string())
            .or_insert_with(|| match GlobMatcher::new(glob) {
                Ok(matcher) => Some(matcher),
                Err(e) => {
                    tracing::warn!("{}", e);
                    None
                }
            })
            .as_ref()
    }

    /// Number of distinct globs seen so far.
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }
}

#[cfg(test)]
#[path = "glob_tests.rs"]
mod tests;
