// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule definitions: `(severity, applicability, value)` tuples.
//!
//! A rule can be written in three TOML shapes:
//!
//! ```toml
//! [rules]
//! scope-enum = [2, "always", ["repo", "backend-python", "pwa"]]
//! header-max-length = { level = "error", when = "always", value = 72 }
//! body-leading-blank = 0
//! ```

use serde::Serialize;

/// Rule severity: off, warn, or error.
///
/// Integers `0`, `1`, `2` and the strings `"off"`, `"warn"`, `"error"` are
/// accepted in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Off,
    Warn,
    Error,
}

impl Severity {
    /// Numeric level as written in tuple form.
    pub fn as_level(self) -> i64 {
        match self {
            Severity::Off => 0,
            Severity::Warn => 1,
            Severity::Error => 2,
        }
    }

    pub fn from_toml(value: &toml::Value) -> Result<Self, String> {
        match value {
            toml::Value::Integer(0) => Ok(Severity::Off),
            toml::Value::Integer(1) => Ok(Severity::Warn),
            toml::Value::Integer(2) => Ok(Severity::Error),
            toml::Value::String(s) => match s.as_str() {
                "off" => Ok(Severity::Off),
                "warn" | "warning" => Ok(Severity::Warn),
                "error" => Ok(Severity::Error),
                other => Err(invalid_severity(other)),
            },
            other => Err(invalid_severity(&other.to_string())),
        }
    }
}

fn invalid_severity(found: &str) -> String {
    format!(
        "invalid severity {} (expected 0, 1, 2, \"off\", \"warn\" or \"error\")",
        found
    )
}

/// Whether the rule condition is required (`always`) or forbidden (`never`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    #[default]
    Always,
    Never,
}

impl Applicability {
    pub fn as_str(self) -> &'static str {
        match self {
            Applicability::Always => "always",
            Applicability::Never => "never",
        }
    }

    pub fn is_never(self) -> bool {
        self == Applicability::Never
    }

    fn from_toml(value: &toml::Value) -> Result<Self, String> {
        match value.as_str() {
            Some("always") => Ok(Applicability::Always),
            Some("never") => Ok(Applicability::Never),
            _ => Err(format!(
                "invalid applicability {} (expected \"always\" or \"never\")",
                value
            )),
        }
    }
}

/// Rule argument.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(untagged)]
pub enum RuleValue {
    #[default]
    None,
    Text(String),
    Number(usize),
    List(Vec<String>),
}

impl RuleValue {
    pub fn is_none(&self) -> bool {
        matches!(self, RuleValue::None)
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            RuleValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<usize> {
        match self {
            RuleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RuleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Text or list items, for rules accepting either.
    pub fn as_strings(&self) -> Vec<&str> {
        match self {
            RuleValue::Text(s) => vec![s.as_str()],
            RuleValue::List(items) => items.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    fn from_toml(value: &toml::Value) -> Result<Self, String> {
        match value {
            toml::Value::String(s) => Ok(RuleValue::Text(s.clone())),
            toml::Value::Integer(n) => usize::try_from(*n)
                .map(RuleValue::Number)
                .map_err(|_| format!("rule value must not be negative (found {})", n)),
            toml::Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| format!("list values must be strings (found {})", item))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(RuleValue::List),
            other => Err(format!("unsupported rule value {}", other)),
        }
    }

    fn to_toml(&self) -> Option<toml::Value> {
        match self {
            RuleValue::None => None,
            RuleValue::Text(s) => Some(toml::Value::String(s.clone())),
            RuleValue::Number(n) => Some(toml::Value::Integer(*n as i64)),
            RuleValue::List(items) => Some(toml::Value::Array(
                items.iter().cloned().map(toml::Value::String).collect(),
            )),
        }
    }
}

/// A fully parsed rule definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleConfig {
    pub level: Severity,
    pub when: Applicability,
    #[serde(skip_serializing_if = "RuleValue::is_none")]
    pub value: RuleValue,
}

impl RuleConfig {
    pub fn new(level: Severity, when: Applicability, value: RuleValue) -> Self {
        Self { level, when, value }
    }

    pub fn is_enabled(&self) -> bool {
        self.level != Severity::Off
    }

    /// Parse any of the accepted TOML shapes.
    pub fn from_toml(value: &toml::Value) -> Result<Self, String> {
        match value {
            toml::Value::Array(items) => Self::from_tuple(items),
            toml::Value::Table(table) => Self::from_table(table),
            toml::Value::Integer(_) | toml::Value::String(_) => Ok(Self::new(
                Severity::from_toml(value)?,
                Applicability::Always,
                RuleValue::None,
            )),
            other => Err(format!(
                "rule must be an array or a table (found {})",
                other.type_str()
            )),
        }
    }

    fn from_tuple(items: &[toml::Value]) -> Result<Self, String> {
        let [level, rest @ ..] = items else {
            return Err("rule array must start with a severity".to_string());
        };
        if rest.len() > 2 {
            return Err(format!(
                "rule array has {} entries (expected at most 3)",
                items.len()
            ));
        }

        let level = Severity::from_toml(level)?;
        let when = match rest.first() {
            Some(v) => Applicability::from_toml(v)?,
            None => Applicability::Always,
        };
        let value = match rest.get(1) {
            Some(v) => RuleValue::from_toml(v)?,
            None => RuleValue::None,
        };

        Ok(Self::new(level, when, value))
    }

    fn from_table(table: &toml::Table) -> Result<Self, String> {
        for key in table.keys() {
            if !matches!(key.as_str(), "level" | "when" | "value") {
                return Err(format!("unknown rule field `{}`", key));
            }
        }

        let level = table
            .get("level")
            .ok_or_else(|| "missing required field: level".to_string())
            .and_then(Severity::from_toml)?;
        let when = match table.get("when") {
            Some(v) => Applicability::from_toml(v)?,
            None => Applicability::Always,
        };
        let value = match table.get("value") {
            Some(v) => RuleValue::from_toml(v)?,
            None => RuleValue::None,
        };

        Ok(Self::new(level, when, value))
    }

    /// Tuple-form TOML value, as printed by `scopelint config`.
    pub fn to_toml(&self) -> toml::Value {
        let mut items = vec![
            toml::Value::Integer(self.level.as_level()),
            toml::Value::String(self.when.as_str().to_string()),
        ];
        if let Some(value) = self.value.to_toml() {
            items.push(value);
        }
        toml::Value::Array(items)
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
