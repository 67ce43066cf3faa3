// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles `scopelint.toml` parsing, `extends` resolution and unknown key
//! warnings. Layers merge depth-first in `extends` order; a file's own
//! `rules` are applied last, so they override everything it extends.

pub mod preset;
pub mod rule;
mod suggest;

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use preset::{CONVENTIONAL, DEFAULT_TYPES, PRESET_NAMES};
pub use rule::{Applicability, RuleConfig, RuleValue, Severity};
pub use suggest::suggest_rule_name;

use crate::error::{Error, Result};
use crate::message::IgnoreMatcher;
use crate::rules::get_rule;
use suggest::{warn_unknown_key, warn_unknown_rule};

/// Config file name looked up by discovery.
pub const CONFIG_FILE_NAME: &str = "scopelint.toml";

/// Default location of the workspace scope documentation.
pub const DEFAULT_DOCS_PATH: &str = ".cursor/rules/conventional-commits-workspace.mdc";

/// Rules whose list value is an allow-list that must be non-empty and unique.
const ALLOW_LIST_RULES: &[&str] = &["scope-enum", "type-enum"];

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &[
    "extends",
    "rules",
    "ignores",
    "default-ignores",
    "help-url",
    "docs",
];

/// Known keys of the `[docs]` table.
const KNOWN_DOCS_KEYS: &[&str] = &["path", "level"];

/// One config file, before `extends` resolution.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(default)]
    extends: Vec<String>,

    #[serde(default)]
    rules: toml::Table,

    #[serde(default)]
    ignores: Vec<String>,

    #[serde(default, rename = "default-ignores")]
    default_ignores: Option<bool>,

    #[serde(default, rename = "help-url")]
    help_url: Option<String>,

    #[serde(default)]
    docs: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// `extends` entries of the root config file.
    pub extends: Vec<String>,

    /// Merged rule set, ordered by rule name.
    pub rules: BTreeMap<String, RuleConfig>,

    /// Extra ignore patterns (regexes).
    pub ignores: Vec<String>,

    /// Whether built-in ignore patterns apply.
    pub default_ignores: bool,

    /// Link printed after failing reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,

    /// Workspace documentation sync settings.
    pub docs: DocsConfig,
}

impl Default for Config {
    /// The conventional preset alone, used when no config file exists.
    fn default() -> Self {
        Layer::preset(CONVENTIONAL)
            .map(|layer| layer.into_config(vec![CONVENTIONAL.to_string()]))
            .unwrap_or_else(|| Layer::default().into_config(Vec::new()))
    }
}

impl Config {
    /// The enabled `scope-enum` allow-list, if any.
    pub fn scope_allow_list(&self) -> Option<&[String]> {
        self.enabled_list("scope-enum")
    }

    /// The enabled `type-enum` list, if any.
    pub fn type_list(&self) -> Option<&[String]> {
        self.enabled_list("type-enum")
    }

    fn enabled_list(&self, rule: &str) -> Option<&[String]> {
        self.rules
            .get(rule)
            .filter(|r| r.is_enabled() && r.when == Applicability::Always)
            .and_then(|r| r.value.as_list())
    }

    /// Render as TOML in tuple form.
    pub fn to_toml_string(&self) -> Result<String> {
        let mut root = toml::Table::new();
        root.insert(
            "extends".to_string(),
            toml::Value::Array(
                self.extends
                    .iter()
                    .cloned()
                    .map(toml::Value::String)
                    .collect(),
            ),
        );
        root.insert(
            "default-ignores".to_string(),
            toml::Value::Boolean(self.default_ignores),
        );
        if !self.ignores.is_empty() {
            root.insert(
                "ignores".to_string(),
                toml::Value::Array(
                    self.ignores
                        .iter()
                        .cloned()
                        .map(toml::Value::String)
                        .collect(),
                ),
            );
        }
        if let Some(url) = &self.help_url {
            root.insert("help-url".to_string(), toml::Value::String(url.clone()));
        }

        let mut docs = toml::Table::new();
        docs.insert(
            "path".to_string(),
            toml::Value::String(self.docs.path.display().to_string()),
        );
        docs.insert(
            "level".to_string(),
            toml::Value::String(
                match self.docs.level {
                    Severity::Off => "off",
                    Severity::Warn => "warn",
                    Severity::Error => "error",
                }
                .to_string(),
            ),
        );
        root.insert("docs".to_string(), toml::Value::Table(docs));

        let rules: toml::Table = self
            .rules
            .iter()
            .map(|(name, rule)| (name.clone(), rule.to_toml()))
            .collect();
        root.insert("rules".to_string(), toml::Value::Table(rules));

        toml::to_string(&root).map_err(|e| Error::Internal(e.to_string()))
    }
}

/// Workspace documentation sync configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocsConfig {
    /// Rule file listing documented workspace scopes.
    pub path: PathBuf,

    /// Severity of drift between the allow-list and the docs.
    pub level: Severity,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DOCS_PATH),
            level: Severity::Error,
        }
    }
}

/// Partially merged configuration.
#[derive(Debug, Default)]
struct Layer {
    rules: BTreeMap<String, RuleConfig>,
    ignores: Vec<String>,
    default_ignores: Option<bool>,
    help_url: Option<String>,
    docs: Option<DocsConfig>,
}

impl Layer {
    fn preset(name: &str) -> Option<Self> {
        preset::preset(name).map(|rules| Layer {
            rules,
            ..Layer::default()
        })
    }

    /// Overlay `other` on top of `self`.
    fn apply(&mut self, other: Layer) {
        self.rules.extend(other.rules);
        self.ignores.extend(other.ignores);
        if other.default_ignores.is_some() {
            self.default_ignores = other.default_ignores;
        }
        if other.help_url.is_some() {
            self.help_url = other.help_url;
        }
        if other.docs.is_some() {
            self.docs = other.docs;
        }
    }

    fn into_config(self, extends: Vec<String>) -> Config {
        Config {
            extends,
            rules: self.rules,
            ignores: self.ignores,
            default_ignores: self.default_ignores.unwrap_or(true),
            help_url: self.help_url,
            docs: self.docs.unwrap_or_default(),
        }
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse(&content, path)
}

/// Parse config from string content.
///
/// `path` names the file for diagnostics; relative `extends` entries are
/// resolved against its directory.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let mut stack = vec![path.to_path_buf()];
    let (extends, layer) = resolve(content, path, &mut stack)?;
    let config = layer.into_config(extends);
    validate(&config, path)?;
    Ok(config)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resolve one file: its `extends` chain first, then its own settings.
fn resolve(content: &str, path: &Path, stack: &mut Vec<PathBuf>) -> Result<(Vec<String>, Layer)> {
    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| Error::config(e.to_string(), path))?;

    // Collect unknown keys
    let unknown_keys: BTreeSet<&String> = flexible
        .unknown
        .keys()
        .filter(|k| !KNOWN_KEYS.contains(&k.as_str()))
        .collect();
    for key in unknown_keys {
        warn_unknown_key(path, key);
    }

    let mut merged = Layer::default();

    for entry in &flexible.extends {
        tracing::debug!("{}: extending {}", path.display(), entry);
        if let Some(layer) = Layer::preset(entry) {
            merged.apply(layer);
        } else if entry.ends_with(".toml") {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            let target = base.join(entry);
            if stack.iter().any(|p| same_file(p, &target)) {
                return Err(Error::config(
                    format!("circular extends: {} is already being loaded", entry),
                    path,
                ));
            }
            if !target.is_file() {
                return Err(Error::config(format!("extends `{}` not found", entry), path));
            }
            let nested = read(&target)?;
            stack.push(target.clone());
            let (_, layer) = resolve(&nested, &target, stack)?;
            stack.pop();
            merged.apply(layer);
        } else {
            return Err(Error::config(
                format!(
                    "unknown preset `{}` (available: {}, or a relative path to a .toml file)",
                    entry,
                    PRESET_NAMES.join(", ")
                ),
                path,
            ));
        }
    }

    let mut own = Layer {
        ignores: flexible.ignores,
        default_ignores: flexible.default_ignores,
        help_url: flexible.help_url,
        docs: flexible
            .docs
            .as_ref()
            .map(|v| parse_docs_config(v, path))
            .transpose()?,
        ..Layer::default()
    };

    for (name, value) in &flexible.rules {
        let Some(rule) = get_rule(name) else {
            warn_unknown_rule(path, name);
            continue;
        };
        let config = RuleConfig::from_toml(value)
            .map_err(|e| Error::config(format!("rules.{}: {}", name, e), path))?;
        if config.is_enabled() {
            rule.value_kind()
                .check(name, &config.value)
                .map_err(|e| Error::config(e, path))?;
        }
        own.rules.insert(name.clone(), config);
    }

    merged.apply(own);
    Ok((flexible.extends, merged))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Parse the `[docs]` table.
fn parse_docs_config(value: &toml::Value, path: &Path) -> Result<DocsConfig> {
    let toml::Value::Table(t) = value else {
        return Err(Error::config("docs must be a table", path));
    };

    for key in t.keys() {
        if !KNOWN_DOCS_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("docs.{}", key));
        }
    }

    let mut docs = DocsConfig::default();
    if let Some(p) = t.get("path") {
        let p = p
            .as_str()
            .ok_or_else(|| Error::config("docs.path must be a string", path))?;
        docs.path = PathBuf::from(p);
    }
    if let Some(level) = t.get("level") {
        docs.level =
            Severity::from_toml(level).map_err(|e| Error::config(format!("docs.level: {}", e), path))?;
    }
    Ok(docs)
}

/// Check invariants of the merged config.
fn validate(config: &Config, path: &Path) -> Result<()> {
    for name in ALLOW_LIST_RULES {
        let Some(rule) = config.rules.get(*name).filter(|r| r.is_enabled()) else {
            continue;
        };
        let Some(items) = rule.value.as_list() else {
            continue;
        };
        if items.is_empty() {
            return Err(Error::config(
                format!("rules.{}: allow-list must not be empty", name),
                path,
            ));
        }
        let mut seen = BTreeSet::new();
        for item in items {
            if !seen.insert(item.as_str()) {
                return Err(Error::config(
                    format!("rules.{}: duplicate entry `{}`", name, item),
                    path,
                ));
            }
        }
    }

    IgnoreMatcher::new(config.default_ignores, &config.ignores)
        .map_err(|e| Error::config(e, path))?;

    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
