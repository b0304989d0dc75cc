// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! ```json
//! { "matched": [ { "path": ".claude/rules/go.md", "body": "..." } ] }
//! ```

use std::io::Write;

use serde::Serialize;

use crate::rules::MatchedRule;

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    matched: &'a [MatchedRule],
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, matched: &[MatchedRule]) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&JsonOutput { matched })
            .map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
