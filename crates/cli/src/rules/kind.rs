// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commit type rules.

use super::{Rule, ValueKind, check_case, check_empty, check_enum};
use crate::config::{Applicability, RuleValue};
use crate::message::Commit;

pub struct TypeEnum;

impl Rule for TypeEnum {
    fn name(&self) -> &'static str {
        "type-enum"
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::List
    }

    fn validate(&self, commit: &Commit, when: Applicability, value: &RuleValue) -> Option<String> {
        let allowed = value.as_list()?;
        check_enum("type", commit.commit_type.as_deref(), when, allowed)
    }
}

pub struct TypeEmpty;

impl Rule for TypeEmpty {
    fn name(&self) -> &'static str {
        "type-empty"
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::None
    }

    fn validate(&self, commit: &Commit, when: Applicability, _value: &RuleValue) -> Option<String> {
        check_empty("type", commit.commit_type.is_some(), when)
    }
}

pub struct TypeCase;

impl Rule for TypeCase {
    fn name(&self) -> &'static str {
        "type-case"
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::Cases
    }

    fn validate(&self, commit: &Commit, when: Applicability, value: &RuleValue) -> Option<String> {
        let commit_type = commit.commit_type.as_deref()?;
        check_case("type", commit_type, when, value)
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
