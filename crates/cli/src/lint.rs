//! Lint engine and result types for output formatting.

use std::sync::Arc;

use serde::Serialize;

use crate::config::{Config, RuleConfig, Severity};
use crate::error::{Error, Result};
use crate::message::{IgnoreMatcher, parse_commit};
use crate::rules::{Rule, get_rule};

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    /// Severity of the violated rule.
    pub level: Severity,

    /// Rule name (e.g., "scope-enum").
    pub name: String,

    /// Diagnostic message.
    pub message: String,
}

/// Result of linting one commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintOutcome {
    /// The message header, as shown in reports.
    pub input: String,

    /// Short commit hash when the message came from git history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,

    /// False iff at least one error-level problem was found.
    pub valid: bool,

    /// True when an ignore pattern matched and no rules ran.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub ignored: bool,

    pub errors: Vec<Problem>,

    pub warnings: Vec<Problem>,
}

impl LintOutcome {
    /// Attach the short hash of the commit the message came from.
    pub fn with_commit(mut self, hash: impl Into<String>) -> Self {
        self.commit = Some(hash.into());
        self
    }

    /// Whether the outcome has nothing to report.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// A configured rule, resolved once per linter.
struct ActiveRule {
    rule: Arc<dyn Rule>,
    config: RuleConfig,
}

/// Applies a resolved rule set to commit messages.
///
/// Holds no state between messages, so linting is repeatable.
pub struct Linter {
    rules: Vec<ActiveRule>,
    ignores: IgnoreMatcher,
}

impl Linter {
    /// Build a linter from a resolved config.
    ///
    /// Disabled rules are dropped here. Unknown rule names are a config error.
    pub fn new(config: &Config) -> Result<Self> {
        let mut rules = Vec::new();
        for (name, rule_config) in &config.rules {
            if !rule_config.is_enabled() {
                tracing::trace!("rule {} is off", name);
                continue;
            }
            let rule = get_rule(name).ok_or_else(|| {
                Error::Config {
                    message: format!("unknown rule `{}`", name),
                    path: None,
                }
            })?;
            rules.push(ActiveRule {
                rule,
                config: rule_config.clone(),
            });
        }

        let ignores = IgnoreMatcher::new(config.default_ignores, &config.ignores).map_err(|e| {
            Error::Config {
                message: e,
                path: None,
            }
        })?;

        Ok(Self { rules, ignores })
    }

    /// Lint one raw commit message.
    pub fn lint(&self, message: &str) -> LintOutcome {
        let commit = parse_commit(message);
        let input = commit.header.clone();

        if self.ignores.is_ignored(&commit.raw) {
            tracing::debug!("ignored message: {}", input);
            return LintOutcome {
                input,
                commit: None,
                valid: true,
                ignored: true,
                errors: Vec::new(),
                warnings: Vec::new(),
            };
        }

        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        // Rules are stored in name order, so problems come out sorted.
        for active in &self.rules {
            let Some(message) =
                active
                    .rule
                    .validate(&commit, active.config.when, &active.config.value)
            else {
                continue;
            };
            tracing::trace!("{} failed: {}", active.rule.name(), message);
            let problem = Problem {
                level: active.config.level,
                name: active.rule.name().to_string(),
                message,
            };
            match active.config.level {
                Severity::Error => errors.push(problem),
                Severity::Warn => warnings.push(problem),
                Severity::Off => {}
            }
        }

        LintOutcome {
            input,
            commit: None,
            valid: errors.is_empty(),
            ignored: false,
            errors,
            warnings,
        }
    }
}

/// Lint a single message against a config.
pub fn lint(message: &str, config: &Config) -> Result<LintOutcome> {
    Ok(Linter::new(config)?.lint(message))
}

/// Aggregated outcomes from one run.
#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    /// ISO 8601 timestamp.
    pub timestamp: String,

    /// Whether every message passed.
    pub valid: bool,

    pub error_count: usize,

    pub warning_count: usize,

    pub results: Vec<LintOutcome>,
}

impl LintReport {
    /// Create a report from outcomes.
    pub fn new(timestamp: String, results: Vec<LintOutcome>) -> Self {
        let valid = results.iter().all(|r| r.valid);
        let error_count = results.iter().map(|r| r.errors.len()).sum();
        let warning_count = results.iter().map(|r| r.warnings.len()).sum();
        Self {
            timestamp,
            valid,
            error_count,
            warning_count,
            results,
        }
    }
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;
