// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Messages that are never linted.
//!
//! Git generates merge, revert and autosquash messages that do not follow
//! the conventional format. These are skipped by default; projects can add
//! their own patterns with `ignores`.

use std::sync::LazyLock;

use regex::Regex;

/// Built-in ignore patterns, matched against the whole message.
const DEFAULT_PATTERNS: &[&str] = &[
    r"^Merge pull request .*",
    r"^Merge (?:remote-tracking )?branch .*",
    r"^Merge tag .*",
    r"^Merge .+ into .+",
    r"^Merged .+ (?:in|into) .+",
    r"^Automatic merge.*",
    r"^Auto-merged .+ into .+",
    r"^[Rr]evert .+",
    r"^(?:fixup|squash|amend)! .*",
];

#[allow(clippy::expect_used)]
static DEFAULT_IGNORES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DEFAULT_PATTERNS
        .iter()
        .map(|p| Regex::new(&format!("(?s){}", p)).expect("valid regex"))
        .collect()
});

/// Compiled ignore matcher.
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    use_defaults: bool,
    custom: Vec<Regex>,
}

impl IgnoreMatcher {
    /// Compile configured patterns. Invalid regexes are reported by pattern.
    pub fn new(use_defaults: bool, patterns: &[String]) -> Result<Self, String> {
        let custom = patterns
            .iter()
            .map(|p| Regex::new(p).map_err(|e| format!("invalid ignore pattern `{}`: {}", p, e)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            use_defaults,
            custom,
        })
    }

    /// Whether the message should be skipped.
    pub fn is_ignored(&self, message: &str) -> bool {
        let message = message.trim();
        (self.use_defaults && DEFAULT_IGNORES.iter().any(|re| re.is_match(message)))
            || self.custom.iter().any(|re| re.is_match(message))
    }
}

#[cfg(test)]
#[path = "ignore_tests.rs"]
mod tests;
