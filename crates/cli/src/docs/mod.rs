// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace documentation sync.
//!
//! Compares the `scope-enum` allow-list with the scopes documented in the
//! workspace rule file. `fix` only ever touches the documentation.

pub mod mdc;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{Config, Severity};
use crate::error::{Error, Result};

/// A single drift between allow-list and docs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocsViolation {
    /// `missing_docs`, `missing_scope` or `undocumented_scope`.
    #[serde(rename = "type")]
    pub kind: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Actionable guidance on how to fix.
    pub advice: String,
}

/// Result of comparing the allow-list with the docs file.
#[derive(Debug, Clone, Serialize)]
pub struct DocsReport {
    /// Docs file, relative to the project root as configured.
    pub path: PathBuf,

    pub level: Severity,

    /// False when the docs file does not exist.
    pub exists: bool,

    /// In the allow-list but not documented.
    pub missing: Vec<String>,

    /// Documented but not in the allow-list.
    pub undocumented: Vec<String>,
}

impl DocsReport {
    pub fn in_sync(&self) -> bool {
        self.exists && self.missing.is_empty() && self.undocumented.is_empty()
    }

    /// Whether drift should fail the run.
    pub fn failed(&self) -> bool {
        !self.in_sync() && self.level == Severity::Error
    }

    pub fn violations(&self) -> Vec<DocsViolation> {
        if !self.exists {
            return vec![DocsViolation {
                kind: "missing_docs",
                scope: None,
                advice: "Create it with `scopelint docs --fix`.".to_string(),
            }];
        }

        let missing = self.missing.iter().map(|scope| DocsViolation {
            kind: "missing_scope",
            scope: Some(scope.clone()),
            advice: format!("Add a bullet \"- `{}`\" or run `scopelint docs --fix`.", scope),
        });
        let undocumented = self.undocumented.iter().map(|scope| DocsViolation {
            kind: "undocumented_scope",
            scope: Some(scope.clone()),
            advice: format!(
                "Remove the bullet or add `{}` to scope-enum in scopelint.toml.",
                scope
            ),
        });
        missing.chain(undocumented).collect()
    }
}

/// What `check` found out before any comparison.
#[derive(Debug)]
pub enum DocsCheck {
    /// `docs.level` is `off`.
    Disabled,
    /// No enabled `scope-enum` allow-list.
    NoAllowList,
    Checked(DocsReport),
}

/// Compare the allow-list with the docs file under `root`.
pub fn check(root: &Path, config: &Config) -> Result<DocsCheck> {
    if config.docs.level == Severity::Off {
        return Ok(DocsCheck::Disabled);
    }
    let Some(allowed) = config.scope_allow_list() else {
        return Ok(DocsCheck::NoAllowList);
    };

    let full_path = root.join(&config.docs.path);
    let documented = match read_optional(&full_path)? {
        Some(content) => Some(mdc::parse_mdc(&content, &full_path)?.scopes()),
        None => None,
    };
    tracing::debug!("documented scopes: {:?}", documented);

    let report = match documented {
        None => DocsReport {
            path: config.docs.path.clone(),
            level: config.docs.level,
            exists: false,
            missing: allowed.to_vec(),
            undocumented: Vec::new(),
        },
        Some(documented) => DocsReport {
            path: config.docs.path.clone(),
            level: config.docs.level,
            exists: true,
            missing: allowed
                .iter()
                .filter(|s| !documented.contains(s))
                .cloned()
                .collect(),
            undocumented: documented
                .into_iter()
                .filter(|s| !allowed.contains(s))
                .collect(),
        },
    };
    Ok(DocsCheck::Checked(report))
}

/// Document every missing scope. Returns the scopes that were added.
///
/// Creates the file (and its directory) when absent.
pub fn fix(root: &Path, report: &DocsReport) -> Result<Vec<String>> {
    if report.exists && report.missing.is_empty() {
        return Ok(Vec::new());
    }

    let full_path = root.join(&report.path);
    let content = match read_optional(&full_path)? {
        Some(existing) => mdc::append_scopes(&existing, &report.missing),
        None => {
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| Error::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
            mdc::render_new(&report.missing)
        }
    };

    std::fs::write(&full_path, content).map_err(|e| Error::Io {
        path: full_path.clone(),
        source: e,
    })?;
    Ok(report.missing.clone())
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
