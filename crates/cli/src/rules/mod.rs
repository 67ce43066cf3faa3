// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule registry.
//!
//! Built-in rules, grouped by the part of the message they inspect:
//! - header: `header-max-length`, `header-trim`
//! - type: `type-enum`, `type-empty`, `type-case`
//! - scope: `scope-enum`, `scope-empty`, `scope-case`
//! - subject: `subject-empty`, `subject-case`, `subject-full-stop`
//! - body/footer: `body-leading-blank`, `body-max-line-length`,
//!   `footer-leading-blank`, `footer-max-line-length`

pub mod body;
pub mod case;
pub mod header;
pub mod kind;
pub mod scope;
pub mod subject;

use std::sync::Arc;

use crate::config::{Applicability, RuleValue};
use crate::message::Commit;
use case::{CASE_NAMES, Case};

/// All registered rule names in canonical order.
pub const RULE_NAMES: &[&str] = &[
    "body-leading-blank",
    "body-max-line-length",
    "footer-leading-blank",
    "footer-max-line-length",
    "header-max-length",
    "header-trim",
    "scope-case",
    "scope-empty",
    "scope-enum",
    "subject-case",
    "subject-empty",
    "subject-full-stop",
    "type-case",
    "type-empty",
    "type-enum",
];

/// The argument a rule expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// No argument.
    None,
    /// A single string.
    Text,
    /// A non-negative integer.
    Number,
    /// A list of strings.
    List,
    /// One case name or a list of case names.
    Cases,
}

impl ValueKind {
    /// Validate a configured value against this kind.
    pub fn check(self, rule: &str, value: &RuleValue) -> Result<(), String> {
        let ok = match (self, value) {
            (ValueKind::None, RuleValue::None) => true,
            (ValueKind::Text, RuleValue::Text(_)) => true,
            (ValueKind::Number, RuleValue::Number(_)) => true,
            (ValueKind::List, RuleValue::List(_)) => true,
            (ValueKind::Cases, RuleValue::Text(_) | RuleValue::List(_)) => {
                if let Some(unknown) = value
                    .as_strings()
                    .into_iter()
                    .find(|name| Case::from_name(name).is_none())
                {
                    return Err(format!(
                        "rule `{}`: unknown case `{}` (valid: {})",
                        rule,
                        unknown,
                        CASE_NAMES.join(", ")
                    ));
                }
                true
            }
            _ => false,
        };

        if ok {
            Ok(())
        } else {
            Err(format!("rule `{}` expects {}", rule, self.describe()))
        }
    }

    fn describe(self) -> &'static str {
        match self {
            ValueKind::None => "no value",
            ValueKind::Text => "a string value",
            ValueKind::Number => "a number value",
            ValueKind::List => "a list of strings",
            ValueKind::Cases => "a case name or a list of case names",
        }
    }
}

/// A single commit message rule.
///
/// Object-safe to allow dynamic dispatch via `Arc<dyn Rule>`.
pub trait Rule: Send + Sync {
    /// Unique identifier (e.g., "scope-enum").
    fn name(&self) -> &'static str;

    /// Argument this rule accepts.
    fn value_kind(&self) -> ValueKind;

    /// Check the commit. Returns the diagnostic message on violation.
    ///
    /// `when` selects between requiring (`always`) and forbidding (`never`)
    /// the condition. Implementations treat absent fields as passing unless
    /// the rule is about presence itself.
    fn validate(&self, commit: &Commit, when: Applicability, value: &RuleValue) -> Option<String>;
}

/// Create all registered rules.
pub fn all_rules() -> Vec<Arc<dyn Rule>> {
    vec![
        Arc::new(body::BodyLeadingBlank),
        Arc::new(body::BodyMaxLineLength),
        Arc::new(body::FooterLeadingBlank),
        Arc::new(body::FooterMaxLineLength),
        Arc::new(header::HeaderMaxLength),
        Arc::new(header::HeaderTrim),
        Arc::new(scope::ScopeCase),
        Arc::new(scope::ScopeEmpty),
        Arc::new(scope::ScopeEnum),
        Arc::new(subject::SubjectCase),
        Arc::new(subject::SubjectEmpty),
        Arc::new(subject::SubjectFullStop),
        Arc::new(kind::TypeCase),
        Arc::new(kind::TypeEmpty),
        Arc::new(kind::TypeEnum),
    ]
}

/// Get a rule by name.
pub fn get_rule(name: &str) -> Option<Arc<dyn Rule>> {
    all_rules().into_iter().find(|r| r.name() == name)
}

/// `"not "` when negated, for message building.
pub(crate) fn not(when: Applicability) -> &'static str {
    if when.is_never() { "not " } else { "" }
}

/// Shared implementation of the `*-case` rules.
///
/// Text without letters passes either way.
pub(crate) fn check_case(
    field: &str,
    input: &str,
    when: Applicability,
    value: &RuleValue,
) -> Option<String> {
    if !input.chars().any(char::is_alphabetic) {
        return None;
    }

    let names = value.as_strings();
    let any = names
        .iter()
        .filter_map(|name| Case::from_name(name))
        .any(|case| case.matches(input));
    let passed = if when.is_never() { !any } else { any };

    if passed {
        None
    } else if when.is_never() {
        Some(format!("{} must not be {}", field, names.join(", ")))
    } else {
        Some(format!("{} must be {}", field, names.join(" or ")))
    }
}

/// Shared implementation of the `*-enum` rules.
pub(crate) fn check_enum<'a>(
    field: &str,
    candidates: impl IntoIterator<Item = &'a str>,
    when: Applicability,
    allowed: &[String],
) -> Option<String> {
    let mut candidates = candidates.into_iter().peekable();
    if candidates.peek().is_none() {
        return None;
    }

    let is_member = |c: &str| allowed.iter().any(|a| a == c);
    let passed = if when.is_never() {
        !candidates.any(is_member)
    } else {
        candidates.all(is_member)
    };

    if passed {
        None
    } else {
        Some(format!(
            "{} must {}be one of [{}]",
            field,
            not(when),
            allowed.join(", ")
        ))
    }
}

/// Shared implementation of the `*-empty` rules.
pub(crate) fn check_empty(field: &str, present: bool, when: Applicability) -> Option<String> {
    match (when, present) {
        (Applicability::Always, true) => Some(format!("{} must be empty", field)),
        (Applicability::Never, false) => Some(format!("{} may not be empty", field)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
