// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Body and footer rules.

use std::sync::LazyLock;

use regex::Regex;

use super::{Rule, ValueKind};
use crate::config::{Applicability, RuleValue};
use crate::message::Commit;

/// A line that is only a URL; exempt from line-length limits.
#[allow(clippy::expect_used)]
static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-*]\s+)?<?[a-z][a-z0-9+.-]*://\S+>?\s*$").expect("valid regex"));

pub struct BodyLeadingBlank;

impl Rule for BodyLeadingBlank {
    fn name(&self) -> &'static str {
        "body-leading-blank"
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::None
    }

    fn validate(&self, commit: &Commit, when: Applicability, _value: &RuleValue) -> Option<String> {
        commit.body.as_ref()?;
        leading_blank("body", commit.body_leading_blank, when)
    }
}

pub struct FooterLeadingBlank;

impl Rule for FooterLeadingBlank {
    fn name(&self) -> &'static str {
        "footer-leading-blank"
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::None
    }

    fn validate(&self, commit: &Commit, when: Applicability, _value: &RuleValue) -> Option<String> {
        commit.footer.as_ref()?;
        leading_blank("footer", commit.footer_leading_blank, when)
    }
}

pub struct BodyMaxLineLength;

impl Rule for BodyMaxLineLength {
    fn name(&self) -> &'static str {
        "body-max-line-length"
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::Number
    }

    fn validate(&self, commit: &Commit, _when: Applicability, value: &RuleValue) -> Option<String> {
        max_line_length("body", commit.body.as_deref()?, value.as_number()?)
    }
}

pub struct FooterMaxLineLength;

impl Rule for FooterMaxLineLength {
    fn name(&self) -> &'static str {
        "footer-max-line-length"
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::Number
    }

    fn validate(&self, commit: &Commit, _when: Applicability, value: &RuleValue) -> Option<String> {
        max_line_length("footer", commit.footer.as_deref()?, value.as_number()?)
    }
}

fn leading_blank(field: &str, has_blank: bool, when: Applicability) -> Option<String> {
    match (when, has_blank) {
        (Applicability::Always, false) => Some(format!("{} must have leading blank line", field)),
        (Applicability::Never, true) => Some(format!("{} may not have leading blank line", field)),
        _ => None,
    }
}

fn max_line_length(field: &str, text: &str, max: usize) -> Option<String> {
    let too_long = text
        .lines()
        .any(|line| line.chars().count() > max && !BARE_URL.is_match(line));

    too_long.then(|| {
        format!(
            "{}'s lines must not be longer than {} characters",
            field, max
        )
    })
}

#[cfg(test)]
#[path = "body_tests.rs"]
mod tests;
