// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reader for `.mdc` (Cursor rule) files that document workspace scopes.
//!
//! A scope is documented by a bullet that opens with an inline code span:
//!
//! ```markdown
//! ---
//! description: Conventional commit scopes
//! alwaysApply: true
//! ---
//!
//! - `repo`: root tooling and CI
//! - `backend-python`: Python API service
//! ```

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Bullet whose text starts with a single-token code span.
#[allow(clippy::expect_used)]
static SCOPE_BULLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[-*+]\s+`([A-Za-z0-9][A-Za-z0-9._/-]*)`").expect("valid regex")
});

/// Parsed scope documentation file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScopeDoc {
    pub description: Option<String>,
    pub globs: Vec<String>,
    pub always_apply: bool,
    /// Markdown after the frontmatter.
    pub body: String,
}

impl ScopeDoc {
    /// Documented scope tokens in file order, without duplicates.
    pub fn scopes(&self) -> Vec<String> {
        let mut scopes: Vec<String> = Vec::new();
        for caps in self.body.lines().filter_map(|l| SCOPE_BULLET.captures(l)) {
            let scope = &caps[1];
            if !scopes.iter().any(|s| s == scope) {
                scopes.push(scope.to_string());
            }
        }
        scopes
    }
}

/// Parse an `.mdc` file. Frontmatter is optional; an unterminated block is
/// an error.
pub fn parse_mdc(content: &str, path: &Path) -> Result<ScopeDoc> {
    let mut lines = content.lines();
    let mut doc = ScopeDoc::default();

    if content.lines().next().map(str::trim) != Some("---") {
        doc.body = content.to_string();
        return Ok(doc);
    }
    lines.next();

    let mut closed = false;
    for line in lines.by_ref() {
        if line.trim() == "---" {
            closed = true;
            break;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "description" => doc.description = Some(unquote(value).to_string()),
            "globs" => doc.globs = parse_globs(value),
            "alwaysApply" => doc.always_apply = value == "true",
            _ => {}
        }
    }

    if !closed {
        return Err(Error::config(
            "unterminated frontmatter (missing closing ---)",
            path,
        ));
    }

    doc.body = lines.collect::<Vec<_>>().join("\n");
    Ok(doc)
}

fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| s.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(s)
}

/// `globs` may be a single value or a YAML flow array.
fn parse_globs(value: &str) -> Vec<String> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);
    inner
        .split(',')
        .map(|s| unquote(s.trim()).to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Content for a new scope documentation file.
pub fn render_new(scopes: &[String]) -> String {
    let mut out = String::from(
        "---\n\
         description: Conventional commit scopes for this workspace\n\
         alwaysApply: true\n\
         ---\n\
         \n\
         # Commit scopes\n\
         \n\
         Use one of these scopes in `type(scope): subject` headers:\n\
         \n",
    );
    for scope in scopes {
        out.push_str(&bullet(scope));
    }
    out
}

/// Append bullets for `scopes` to existing content.
pub fn append_scopes(content: &str, scopes: &[String]) -> String {
    let mut out = content.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    for scope in scopes {
        out.push_str(&bullet(scope));
    }
    out
}

fn bullet(scope: &str) -> String {
    format!("- `{}`\n", scope)
}

#[cfg(test)]
#[path = "mdc_tests.rs"]
mod tests;
