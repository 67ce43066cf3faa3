// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in rule presets.

use std::collections::BTreeMap;

use super::rule::{Applicability, RuleConfig, RuleValue, Severity};

/// Name of the conventional-commits preset.
pub const CONVENTIONAL: &str = "config-conventional";

/// Names accepted in `extends` for built-in presets.
pub const PRESET_NAMES: &[&str] = &[CONVENTIONAL, "@commitlint/config-conventional"];

/// Default conventional commit types.
pub const DEFAULT_TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// Look up a built-in preset's rules by name.
pub fn preset(name: &str) -> Option<BTreeMap<String, RuleConfig>> {
    match name {
        CONVENTIONAL | "@commitlint/config-conventional" => Some(conventional()),
        _ => None,
    }
}

fn conventional() -> BTreeMap<String, RuleConfig> {
    use Applicability::{Always, Never};
    use Severity::{Error, Warn};

    let list = |items: &[&str]| RuleValue::List(items.iter().map(|s| s.to_string()).collect());

    [
        ("body-leading-blank", Warn, Always, RuleValue::None),
        ("body-max-line-length", Error, Always, RuleValue::Number(100)),
        ("footer-leading-blank", Warn, Always, RuleValue::None),
        ("footer-max-line-length", Error, Always, RuleValue::Number(100)),
        ("header-max-length", Error, Always, RuleValue::Number(100)),
        ("header-trim", Error, Always, RuleValue::None),
        (
            "subject-case",
            Error,
            Never,
            list(&["sentence-case", "start-case", "pascal-case", "upper-case"]),
        ),
        ("subject-empty", Error, Never, RuleValue::None),
        ("subject-full-stop", Error, Never, RuleValue::Text(".".to_string())),
        ("type-case", Error, Always, RuleValue::Text("lower-case".to_string())),
        ("type-empty", Error, Never, RuleValue::None),
        ("type-enum", Error, Always, list(DEFAULT_TYPES)),
    ]
    .into_iter()
    .map(|(name, level, when, value)| (name.to_string(), RuleConfig::new(level, when, value)))
    .collect()
}

#[cfg(test)]
#[path = "preset_tests.rs"]
mod tests;
