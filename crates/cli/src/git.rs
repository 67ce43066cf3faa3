// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git access for commit message sources.
//!
//! Uses git2 (libgit2) for all git operations to avoid subprocess overhead.

use std::path::{Path, PathBuf};

use git2::{Oid, Repository, Sort};

use crate::error::{Error, Result};

/// A commit with its hash and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Short commit hash (7 characters).
    pub hash: String,
    /// Full commit message, body and trailers included.
    pub message: String,
}

/// Open the repository containing `root`.
pub fn open(root: &Path) -> Result<Repository> {
    Repository::discover(root).map_err(|e| Error::Git {
        message: format!("{}: not a git repository ({})", root.display(), e.message()),
    })
}

fn short_hash(oid: Oid) -> String {
    oid.to_string().chars().take(7).collect()
}

fn resolve(repo: &Repository, rev: &str) -> Result<Oid> {
    let object = repo.revparse_single(rev).map_err(|e| Error::Git {
        message: format!("failed to resolve `{}`: {}", rev, e.message()),
    })?;
    let commit = object.peel_to_commit().map_err(|e| Error::Git {
        message: format!("`{}` does not name a commit: {}", rev, e.message()),
    })?;
    Ok(commit.id())
}

/// Collect commits from a revwalk iterator into a Vec.
fn collect_commits(repo: &Repository, revwalk: git2::Revwalk) -> Result<Vec<Commit>> {
    let mut commits = Vec::new();
    for oid in revwalk {
        let oid = oid?;
        let commit = repo.find_commit(oid)?;
        commits.push(Commit {
            hash: short_hash(oid),
            message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
        });
    }
    Ok(commits)
}

/// Commits reachable from `to` (default `HEAD`) but not from `from`.
///
/// Returns commits from oldest to newest.
pub fn commits_in_range(root: &Path, from: &str, to: Option<&str>) -> Result<Vec<Commit>> {
    let repo = open(root)?;
    let to = to.unwrap_or("HEAD");
    let from_oid = resolve(&repo, from)?;
    let to_oid = resolve(&repo, to)?;
    tracing::debug!("walking {}..{}", from, to);

    let mut revwalk = repo.revwalk()?;
    revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;
    revwalk.push(to_oid)?;
    revwalk.hide(from_oid)?;

    collect_commits(&repo, revwalk)
}

/// The `HEAD` commit.
pub fn last_commit(root: &Path) -> Result<Commit> {
    let repo = open(root)?;
    let oid = resolve(&repo, "HEAD")?;
    let commit = repo.find_commit(oid)?;
    Ok(Commit {
        hash: short_hash(oid),
        message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
    })
}

/// Path of the message file git hands to `commit-msg` hooks.
pub fn commit_editmsg_path(root: &Path) -> Result<PathBuf> {
    Ok(open(root)?.path().join("COMMIT_EDITMSG"))
}

/// Directory holding the repository's hooks.
pub fn hooks_dir(root: &Path) -> Result<PathBuf> {
    Ok(open(root)?.path().join("hooks"))
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
