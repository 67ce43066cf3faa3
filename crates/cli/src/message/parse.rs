// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conventional commit message parsing.
//!
//! Parses commit messages in the format:
//!
//! ```text
//! <type>(<scope>)!: <subject>
//!
//! <body>
//!
//! <footer>
//! ```
//!
//! where scope, `!`, body and footer are optional. Headers that do not match
//! still parse; the type, scope and subject are left empty so the `*-empty`
//! rules can report them.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Pattern for the conventional commit header.
///
/// Captures:
/// - Group 1: type
/// - Group 2: scope without parens (optional, may be empty)
/// - Group 3: breaking marker `!` (optional)
/// - Group 4: subject (may be empty)
#[allow(clippy::expect_used)]
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)(?:\(([^()\r\n]*)\))?(!)?:[ \t]*(.*)$").expect("valid regex")
});

/// Scope separators: `/`, `\` and `,` followed by at most one space.
#[allow(clippy::expect_used)]
static SCOPE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/|\\|, ?").expect("valid regex"));

/// Pattern for a line that opens the footer.
///
/// Matches breaking-change notes, issue references (`Closes #12`,
/// `Refs: #42`) and hyphenated git trailers (`Signed-off-by: ...`).
/// A plain `Word: text` line is body text.
#[allow(clippy::expect_used)]
static TRAILER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:BREAKING[ -]CHANGE: |[A-Za-z]+(?:-[A-Za-z]+)+: |(?i:close[sd]?|fix(?:e[sd])?|resolve[sd]?|refs?)(?:: | #))\S",
    )
    .expect("valid regex")
});

/// Git's scissors line; everything below it is discarded.
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

/// A parsed commit message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Commit {
    /// Message with comments and scissors content removed.
    pub raw: String,
    /// First line.
    pub header: String,
    /// Commit type (e.g., "feat", "fix").
    pub commit_type: Option<String>,
    /// Scope (e.g., "backend-python"). Empty parentheses yield `None`.
    pub scope: Option<String>,
    /// True when the header carries `!` or a footer has `BREAKING CHANGE`.
    pub breaking: bool,
    /// Subject after the colon.
    pub subject: Option<String>,
    /// Body lines between header and footer.
    pub body: Option<String>,
    /// Trailer block.
    pub footer: Option<String>,
    /// Whether a blank line separates header from body.
    pub body_leading_blank: bool,
    /// Whether a blank line precedes the footer.
    pub footer_leading_blank: bool,
}

impl Commit {
    /// Individual scopes, split on `/`, `\` and `,`.
    pub fn scopes(&self) -> Vec<&str> {
        match &self.scope {
            Some(scope) => split_scopes(scope),
            None => Vec::new(),
        }
    }
}

/// Split a multi-scope token (`api/cli`, `api, cli`) into its parts.
///
/// Parts are not trimmed, and empty parts are kept.
pub fn split_scopes(scope: &str) -> Vec<&str> {
    SCOPE_SEPARATOR.split(scope).collect()
}

/// Remove `#` comment lines and everything after the scissors line.
pub fn strip_comments(message: &str) -> String {
    let mut lines = Vec::new();
    for line in message.lines() {
        if line == SCISSORS {
            break;
        }
        if line.starts_with('#') {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// Parse a commit message.
///
/// # Examples
///
/// ```
/// use scopelint::message::parse_commit;
///
/// let commit = parse_commit("feat(repo): add config");
/// assert_eq!(commit.commit_type.as_deref(), Some("feat"));
/// assert_eq!(commit.scope.as_deref(), Some("repo"));
///
/// let commit = parse_commit("update stuff");
/// assert_eq!(commit.commit_type, None);
/// ```
pub fn parse_commit(message: &str) -> Commit {
    let raw = strip_comments(message);
    let lines: Vec<&str> = raw.lines().collect();
    let header = lines.first().copied().unwrap_or("").to_string();

    let mut commit = Commit {
        header: header.clone(),
        ..Commit::default()
    };

    if let Some(caps) = HEADER.captures(header.trim()) {
        commit.commit_type = caps.get(1).map(|m| m.as_str().to_string());
        commit.scope = caps
            .get(2)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        commit.breaking = caps.get(3).is_some();
        commit.subject = caps
            .get(4)
            .map(|m| m.as_str().trim_end())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
    }

    let rest = lines.get(1..).unwrap_or(&[]);
    let footer_start = find_footer(rest);
    let (body_lines, footer_lines) = rest.split_at(footer_start.unwrap_or(rest.len()));

    commit.body_leading_blank = rest.first().is_none_or(|l| l.trim().is_empty());
    commit.body = join_block(body_lines);

    if footer_start.is_some() {
        commit.footer_leading_blank = body_lines.last().is_none_or(|l| l.trim().is_empty())
            && !body_lines.is_empty();
        commit.footer = join_block(footer_lines);
        if footer_lines
            .iter()
            .any(|l| l.starts_with("BREAKING CHANGE") || l.starts_with("BREAKING-CHANGE"))
        {
            commit.breaking = true;
        }
    }

    commit.raw = raw;
    commit
}

/// Index of the first trailer line that follows a blank line.
fn find_footer(lines: &[&str]) -> Option<usize> {
    (0..lines.len()).find(|&i| {
        let preceded_by_blank = i == 0 || lines[i - 1].trim().is_empty();
        preceded_by_blank && TRAILER.is_match(lines[i])
    })
}

/// Join lines, dropping leading and trailing blank lines.
fn join_block(lines: &[&str]) -> Option<String> {
    let start = lines.iter().position(|l| !l.trim().is_empty())?;
    let end = lines.iter().rposition(|l| !l.trim().is_empty())?;
    Some(lines[start..=end].join("\n"))
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
