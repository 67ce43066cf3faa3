// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subject rules.

use super::{Rule, ValueKind, check_case, check_empty};
use crate::config::{Applicability, RuleValue};
use crate::message::Commit;

pub struct SubjectEmpty;

impl Rule for SubjectEmpty {
    fn name(&self) -> &'static str {
        "subject-empty"
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::None
    }

    fn validate(&self, commit: &Commit, when: Applicability, _value: &RuleValue) -> Option<String> {
        check_empty("subject", commit.subject.is_some(), when)
    }
}

pub struct SubjectCase;

impl Rule for SubjectCase {
    fn name(&self) -> &'static str {
        "subject-case"
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::Cases
    }

    fn validate(&self, commit: &Commit, when: Applicability, value: &RuleValue) -> Option<String> {
        let subject = commit.subject.as_deref()?;
        check_case("subject", subject, when, value)
    }
}

/// Trailing punctuation on the subject. An ellipsis is not a full stop.
pub struct SubjectFullStop;

impl Rule for SubjectFullStop {
    fn name(&self) -> &'static str {
        "subject-full-stop"
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::Text
    }

    fn validate(&self, commit: &Commit, when: Applicability, value: &RuleValue) -> Option<String> {
        let subject = commit.subject.as_deref()?;
        let stop = value.as_text()?;

        let ends = subject.ends_with(stop) && !(stop == "." && subject.ends_with("..."));
        let passed = if when.is_never() { !ends } else { ends };

        match (passed, when) {
            (true, _) => None,
            (false, Applicability::Never) => Some("subject may not end with full stop".to_string()),
            (false, Applicability::Always) => Some("subject must end with full stop".to_string()),
        }
    }
}

#[cfg(test)]
#[path = "subject_tests.rs"]
mod tests;
