// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Header rules.

use super::{Rule, ValueKind};
use crate::config::{Applicability, RuleValue};
use crate::message::Commit;

/// Header length in characters (not bytes).
pub struct HeaderMaxLength;

impl Rule for HeaderMaxLength {
    fn name(&self) -> &'static str {
        "header-max-length"
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::Number
    }

    fn validate(&self, commit: &Commit, when: Applicability, value: &RuleValue) -> Option<String> {
        let max = value.as_number()?;
        let length = commit.header.chars().count();
        let within = length <= max;
        let passed = if when.is_never() { !within } else { within };

        if passed {
            None
        } else if when.is_never() {
            Some(format!(
                "header must be longer than {} characters, current length is {}",
                max, length
            ))
        } else {
            Some(format!(
                "header must not be longer than {} characters, current length is {}",
                max, length
            ))
        }
    }
}

pub struct HeaderTrim;

impl Rule for HeaderTrim {
    fn name(&self) -> &'static str {
        "header-trim"
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::None
    }

    fn validate(&self, commit: &Commit, when: Applicability, _value: &RuleValue) -> Option<String> {
        if when.is_never() {
            return None;
        }

        let header = commit.header.as_str();
        let leading = header.starts_with(char::is_whitespace);
        let trailing = header.ends_with(char::is_whitespace);

        match (leading, trailing) {
            (true, true) => Some("header must not be surrounded by whitespace".to_string()),
            (true, false) => Some("header must not start with whitespace".to_string()),
            (false, true) => Some("header must not end with whitespace".to_string()),
            (false, false) => None,
        }
    }
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
