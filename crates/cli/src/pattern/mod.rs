// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Path pattern compilation.

pub mod glob;

pub use glob::{GlobCache, GlobMatcher, PatternError, glob_to_regex};
