// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for matched rules.

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::{NO_MATCHING_RULES, TextFormatter};
