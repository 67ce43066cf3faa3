// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scope rules.
//!
//! `scope-enum` is the workspace allow-list: every scope named in the header
//! must (or, with `never`, must not) be listed. A header without a scope is
//! not this rule's concern; `scope-empty` decides whether one is required.

use super::{Rule, ValueKind, check_case, check_empty, check_enum};
use crate::config::{Applicability, RuleValue};
use crate::message::Commit;

/// Scope membership in an allow-list.
pub struct ScopeEnum;

impl Rule for ScopeEnum {
    fn name(&self) -> &'static str {
        "scope-enum"
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::List
    }

    fn validate(&self, commit: &Commit, when: Applicability, value: &RuleValue) -> Option<String> {
        let allowed = value.as_list()?;
        check_enum("scope", commit.scopes(), when, allowed)
    }
}

/// Scope presence.
pub struct ScopeEmpty;

impl Rule for ScopeEmpty {
    fn name(&self) -> &'static str {
        "scope-empty"
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::None
    }

    fn validate(&self, commit: &Commit, when: Applicability, _value: &RuleValue) -> Option<String> {
        check_empty("scope", commit.scope.is_some(), when)
    }
}

/// Scope letter case, checked per scope.
pub struct ScopeCase;

impl Rule for ScopeCase {
    fn name(&self) -> &'static str {
        "scope-case"
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::Cases
    }

    fn validate(&self, commit: &Commit, when: Applicability, value: &RuleValue) -> Option<String> {
        commit
            .scopes()
            .into_iter()
            .find_map(|scope| check_case("scope", scope, when, value))
    }
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
