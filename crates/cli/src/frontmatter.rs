// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Frontmatter parsing for rule documents.
//!
//! Rule documents carry a `paths:` list in a leading block between `---`
//! delimiters:
//! ```markdown
//! ---
//! paths:
//!   - "src/**/*.rs"
//!   - "Cargo.toml"
//! ---
//!
//! ## Rust conventions
//! ...
//! ```
//!
//! Only the flat `paths:` list is understood. Anything else degrades to
//! "no patterns" or "body unchanged"; parsing never fails.

/// Frontmatter block delimiter.
const DELIMITER: &str = "---";

/// Key that opens the pattern list.
const PATHS_KEY: &str = "paths:";

/// List item marker.
const ITEM_MARKER: &str = "- ";

/// Extract the glob patterns declared under `paths:` in the frontmatter.
///
/// Returns an empty list when the document has no opening delimiter or no
/// `paths:` key. The scan stops at the closing delimiter, or at the first
/// non-empty line that is not a list item once collection has started.
pub fn parse_paths(content: &str) -> Vec<String> {
    let mut lines = content.split('\n');

    match lines.next() {
        Some(first) if first.trim() == DELIMITER => {}
        _ => return Vec::new(),
    }

    let mut paths = Vec::new();
    let mut collecting = false;

    for line in lines {
        let trimmed = line.trim();

        if trimmed == DELIMITER {
            break;
        }
        if trimmed == PATHS_KEY {
            collecting = true;
            continue;
        }
        if !collecting {
            continue;
        }

        if let Some(item) = trimmed.strip_prefix(ITEM_MARKER) {
            paths.push(unquote(item.trim()).to_string());
        } else if !trimmed.is_empty() {
            // Another key: the list is over.
            break;
        }
    }

    paths
}

/// Return the document body with the frontmatter block removed.
///
/// Newlines directly after the closing delimiter are dropped too. Without
/// both an opening and a closing delimiter the content is returned as is.
pub fn strip_frontmatter(content: &str) -> &str {
    let mut lines = content.split_inclusive('\n');

    let mut offset = match lines.next() {
        Some(first) if first.trim() == DELIMITER => first.len(),
        _ => return content,
    };

    for line in lines {
        offset += line.len();
        if line.trim() == DELIMITER {
            return content[offset..].trim_start_matches('\n');
        }
    }

    content
}

/// Trim one leading and one trailing quote character.
///
/// The two ends are trimmed independently, so mismatched quotes such as
/// `"src/**'` are removed as well.
pub fn unquote(value: &str) -> &str {
    let value = value
        .strip_prefix('"')
        .or_else(|| value.strip_prefix('\''))
        .unwrap_or(value);
    value
        .strip_suffix('"')
        .or_else(|| value.strip_suffix('\''))
        .unwrap_or(value)
}

#[cfg(test)]
#[path = "frontmatter_tests.rs"]
mod tests;
