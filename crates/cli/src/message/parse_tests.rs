// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for conventional commit parsing.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use yare::parameterized;

use super::*;

// =============================================================================
// HEADER PARSING
// =============================================================================

#[test]
fn parses_type_and_subject() {
    let commit = parse_commit("fix: handle empty input");
    assert_eq!(commit.commit_type.as_deref(), Some("fix"));
    assert_eq!(commit.scope, None);
    assert_eq!(commit.subject.as_deref(), Some("handle empty input"));
}

#[test]
fn parses_type_scope_and_subject() {
    let commit = parse_commit("fix(backend-python): handle timeout");
    assert_eq!(commit.commit_type.as_deref(), Some("fix"));
    assert_eq!(commit.scope.as_deref(), Some("backend-python"));
    assert_eq!(commit.subject.as_deref(), Some("handle timeout"));
}

#[test]
fn parses_breaking_marker() {
    let commit = parse_commit("feat(pwa)!: drop legacy service worker");
    assert!(commit.breaking);
    assert_eq!(commit.scope.as_deref(), Some("pwa"));
}

#[test]
fn non_conventional_header_leaves_fields_empty() {
    let commit = parse_commit("update stuff");
    assert_eq!(commit.header, "update stuff");
    assert_eq!(commit.commit_type, None);
    assert_eq!(commit.scope, None);
    assert_eq!(commit.subject, None);
}

#[test]
fn missing_colon_is_not_conventional() {
    let commit = parse_commit("feat add feature");
    assert_eq!(commit.commit_type, None);
}

#[test]
fn uppercase_type_is_captured_for_case_rules() {
    let commit = parse_commit("FEAT: add feature");
    assert_eq!(commit.commit_type.as_deref(), Some("FEAT"));
}

#[test]
fn empty_scope_parentheses_yield_no_scope() {
    let commit = parse_commit("feat(): add feature");
    assert_eq!(commit.commit_type.as_deref(), Some("feat"));
    assert_eq!(commit.scope, None);
}

#[test]
fn empty_subject_is_none() {
    let commit = parse_commit("feat(repo):");
    assert_eq!(commit.scope.as_deref(), Some("repo"));
    assert_eq!(commit.subject, None);
}

#[test]
fn subject_keeps_later_colons() {
    let commit = parse_commit("docs: update README: add examples");
    assert_eq!(commit.subject.as_deref(), Some("update README: add examples"));
}

#[test]
fn scope_with_underscore() {
    let commit = parse_commit("feat(user_settings): add theme option");
    assert_eq!(commit.scope.as_deref(), Some("user_settings"));
}

// =============================================================================
// MULTIPLE SCOPES
// =============================================================================

#[test]
fn splits_scopes_on_delimiters() {
    assert_eq!(split_scopes("repo/pwa"), vec!["repo", "pwa"]);
    assert_eq!(split_scopes("repo\\pwa"), vec!["repo", "pwa"]);
    assert_eq!(split_scopes("repo, pwa"), vec!["repo", "pwa"]);
    assert_eq!(split_scopes("repo,pwa"), vec!["repo", "pwa"]);
}

#[test]
fn split_keeps_whitespace_and_empty_parts() {
    assert_eq!(split_scopes(" repo "), vec![" repo "]);
    assert_eq!(split_scopes("repo,"), vec!["repo", ""]);
    assert_eq!(split_scopes("repo ,pwa"), vec!["repo ", "pwa"]);
    assert_eq!(split_scopes("/"), vec!["", ""]);
}

#[test]
fn scopes_empty_without_scope() {
    assert!(parse_commit("docs: update readme").scopes().is_empty());
}

// =============================================================================
// BODY AND FOOTER
// =============================================================================

#[test]
fn parses_body_and_footer() {
    let commit = parse_commit(
        "fix(repo): correct lockfile\n\nThe lockfile drifted.\nRegenerated it.\n\nRefs: #42\nReviewed-by: Sam",
    );
    assert_eq!(
        commit.body.as_deref(),
        Some("The lockfile drifted.\nRegenerated it.")
    );
    assert_eq!(commit.footer.as_deref(), Some("Refs: #42\nReviewed-by: Sam"));
    assert!(commit.body_leading_blank);
    assert!(commit.footer_leading_blank);
}

#[test]
fn body_without_leading_blank() {
    let commit = parse_commit("fix(repo): correct lockfile\nno blank line here");
    assert_eq!(commit.body.as_deref(), Some("no blank line here"));
    assert!(!commit.body_leading_blank);
}

#[test]
fn footer_directly_after_header_has_no_leading_blank() {
    let commit = parse_commit("fix(repo): correct lockfile\nCloses #12");
    assert_eq!(commit.body, None);
    assert_eq!(commit.footer.as_deref(), Some("Closes #12"));
    assert!(!commit.footer_leading_blank);
}

#[test]
fn breaking_change_footer_marks_breaking() {
    let commit = parse_commit("feat(repo): new layout\n\nBREAKING CHANGE: moved packages");
    assert!(commit.breaking);
    assert_eq!(commit.body, None);
}

#[test]
fn colon_paragraph_stays_in_body() {
    let commit = parse_commit("fix(pwa): cache icons\n\nNote: icons were stale.\nNow cached.");
    assert_eq!(
        commit.body.as_deref(),
        Some("Note: icons were stale.\nNow cached.")
    );
    assert_eq!(commit.footer, None);
}

#[parameterized(
    signed_off = { "Signed-off-by: Sam <sam@example.com>" },
    co_authored = { "Co-authored-by: Lee <lee@example.com>" },
    closes = { "Closes #12" },
    fixes = { "fixes #7" },
    refs = { "Refs: #42" },
    breaking = { "BREAKING CHANGE: moved packages" },
    breaking_hyphen = { "BREAKING-CHANGE: moved packages" },
)]
fn trailer_lines_open_footer(trailer: &str) {
    let commit = parse_commit(&format!("fix(repo): x\n\nSome context.\n\n{}", trailer));
    assert_eq!(commit.body.as_deref(), Some("Some context."));
    assert_eq!(commit.footer.as_deref(), Some(trailer));
}

#[test]
fn header_only_has_no_body_or_footer() {
    let commit = parse_commit("chore(pwa): bump deps");
    assert_eq!(commit.body, None);
    assert_eq!(commit.footer, None);
    assert!(commit.body_leading_blank);
}

// =============================================================================
// COMMENTS
// =============================================================================

#[test]
fn strips_comment_lines() {
    let commit = parse_commit(
        "feat(repo): add config\n# Please enter the commit message\n# Lines starting with '#' are ignored",
    );
    assert_eq!(commit.raw, "feat(repo): add config");
    assert_eq!(commit.body, None);
}

#[test]
fn drops_everything_below_scissors() {
    let message = "feat(repo): add config\n\nbody\n# ------------------------ >8 ------------------------\ndiff --git a/x b/x\n";
    let commit = parse_commit(message);
    assert_eq!(commit.body.as_deref(), Some("body"));
    assert!(!commit.raw.contains("diff --git"));
}

#[test]
fn strips_trailing_whitespace_lines() {
    assert_eq!(strip_comments("fix: x\n\n\n"), "fix: x");
}
