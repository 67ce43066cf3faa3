// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commit message model: parsing and ignore rules.

pub mod ignore;
pub mod parse;

pub use ignore::IgnoreMatcher;
pub use parse::{Commit, parse_commit, split_scopes, strip_comments};
