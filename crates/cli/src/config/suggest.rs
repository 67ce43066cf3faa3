// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule name suggestions for config validation.

use std::path::Path;

use crate::rules::RULE_NAMES;

/// Suggest a rule name for a typo.
pub fn suggest_rule_name(unknown: &str) -> Option<&'static str> {
    // Empty strings can't be typos
    if unknown.is_empty() {
        return None;
    }

    // Common variations
    let suggestion = match unknown {
        "scopes" | "scope" | "scope-enums" | "allowed-scopes" => Some("scope-enum"),
        "types" | "type" | "type-enums" => Some("type-enum"),
        "header-length" | "max-length" | "subject-max-length" => Some("header-max-length"),
        "full-stop" | "subject-period" => Some("subject-full-stop"),
        _ => None,
    };

    if suggestion.is_some() {
        return suggestion;
    }

    // Same words in another order or with `_` separators
    let normalized = unknown.replace('_', "-").to_lowercase();
    if let Some(name) = RULE_NAMES.iter().find(|n| **n == normalized) {
        return Some(name);
    }

    // Try prefix matching (require at least 4 chars to avoid false positives)
    if unknown.len() >= 4 {
        for &name in RULE_NAMES {
            if name.starts_with(unknown) || unknown.starts_with(name) {
                return Some(name);
            }
        }
    }

    None
}

/// Warn about an unknown rule with a suggestion.
pub fn warn_unknown_rule(path: &Path, key: &str) {
    tracing::debug!("dropping unknown rule {}", key);
    if let Some(suggested) = suggest_rule_name(key) {
        eprintln!(
            "scopelint: warning: {}: unknown rule `{}`. Did you mean `{}`?",
            path.display(),
            key,
            suggested
        );
    } else {
        eprintln!(
            "scopelint: warning: {}: unknown rule `{}` (ignored)",
            path.display(),
            key
        );
    }
}

/// Warn about an unrecognized config key.
pub fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "scopelint: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
