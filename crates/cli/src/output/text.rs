// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! Produces Markdown meant to be pasted into a review prompt:
//! ```text
//! マッチしたルール: 2 件
//!
//! - `.claude/rules/go.md`
//! - `.claude/rules/rust.md`
//!
//! ### .claude/rules/go.md
//!
//! <body>
//!
//! ### .claude/rules/rust.md
//! ...
//! ```
//!
//! When nothing matched, only the sentinel line is printed.

use std::io::Write;

use crate::rules::MatchedRule;

/// Sentinel printed when no rule matched (or there were no changed files).
pub const NO_MATCHING_RULES: &str = "<!-- no-matching-rules -->";

/// Text output formatter.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the summary and bodies of `matched`, or the sentinel if empty.
    pub fn write(&mut self, matched: &[MatchedRule]) -> std::io::Result<()> {
        if matched.is_empty() {
            return writeln!(self.writer, "{}", NO_MATCHING_RULES);
        }

        writeln!(self.writer, "マッチしたルール: {} 件", matched.len())?;
        writeln!(self.writer)?;
        for rule in matched {
            writeln!(self.writer, "- `{}`", rule.path)?;
        }
        writeln!(self.writer)?;

        for rule in matched {
            writeln!(self.writer, "### {}", rule.path)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", rule.body)?;
            writeln!(self.writer)?;
        }

        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
