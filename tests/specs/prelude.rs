//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing scopelint CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the scopelint binary.
///
/// Environment that changes behavior is cleared so specs are hermetic.
pub fn scopelint_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("scopelint"));
    cmd.env_remove("SCOPELINT_CONFIG")
        .env_remove("SCOPELINT_LOG")
        .env_remove("COLOR")
        .env_remove("NO_COLOR");
    cmd
}

/// Config with the workspace allow-list.
pub const WORKSPACE_CONFIG: &str = r#"extends = ["@commitlint/config-conventional"]

[rules]
scope-enum = [2, "always", ["repo", "backend-python", "pwa"]]
"#;

// =============================================================================
// Run builder
// =============================================================================

/// Builder for a single scopelint invocation.
///
/// ```ignore
/// cli().pwd(temp.path()).args(&["lint", "-m", "feat: x"]).passes();
/// cli().pwd(temp.path()).args(&["lint"]).stdin("fix(pwa): y").exits(0);
/// ```
pub struct RunBuilder {
    cmd: Command,
    stdin: Option<String>,
}

/// Start building a scopelint invocation.
pub fn cli() -> RunBuilder {
    RunBuilder {
        cmd: scopelint_cmd(),
        stdin: None,
    }
}

#[allow(dead_code)]
impl RunBuilder {
    /// Set working directory
    pub fn pwd(mut self, path: impl AsRef<Path>) -> Self {
        self.cmd.current_dir(path.as_ref());
        self
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    /// Set an environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Pipe content to stdin
    pub fn stdin(mut self, content: &str) -> Self {
        self.stdin = Some(content.to_string());
        self
    }

    /// Run and assert success (exit 0)
    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// Run and assert lint failure (exit 1)
    pub fn fails(self) -> RunAssert {
        self.exits(1)
    }

    /// Run and assert a specific exit code
    pub fn exits(self, code: i32) -> RunAssert {
        let output = self.output();
        assert_eq!(
            output.status.code(),
            Some(code),
            "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
            code,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    fn output(mut self) -> std::process::Output {
        self.cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        match self.stdin {
            None => {
                self.cmd.stdin(Stdio::null());
                self.cmd.output().expect("command should run")
            }
            Some(input) => {
                self.cmd.stdin(Stdio::piped());
                let mut child = self.cmd.spawn().expect("command should spawn");
                child
                    .stdin
                    .take()
                    .expect("stdin should be piped")
                    .write_all(input.as_bytes())
                    .expect("stdin write should succeed");
                child.wait_with_output().expect("command should run")
            }
        }
    }
}

// =============================================================================
// Run assertions
// =============================================================================

/// Result of a run with assertion helpers.
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON ({}):\n{}",
                e,
                String::from_utf8_lossy(&self.output.stdout)
            )
        })
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    /// Prefer `stdout_eq` for strict matching.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }

    /// Assert stderr does not match predicate.
    pub fn stderr_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            !predicate.into_predicate().eval(&stderr),
            "stderr should NOT match predicate:\n{}",
            stderr
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary project directory with helper methods.
///
/// ```ignore
/// let temp = Project::workspace();
/// temp.file(".cursor/rules/conventional-commits-workspace.mdc", "...");
/// cli().pwd(temp.path()).args(&["docs"]).passes();
/// ```
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Create a project with the workspace scopelint.toml
    pub fn workspace() -> Self {
        let temp = Self::empty();
        temp.config(WORKSPACE_CONFIG);
        temp
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write scopelint.toml
    pub fn config(&self, content: &str) {
        std::fs::write(self.dir.path().join("scopelint.toml"), content).unwrap();
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// Read a file relative to the project root
    pub fn read(&self, path: impl AsRef<Path>) -> String {
        std::fs::read_to_string(self.dir.path().join(path.as_ref())).unwrap()
    }
}

// =============================================================================
// GIT TEST HELPERS
// =============================================================================

fn git(project: &Project, args: &[&str]) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(project.path())
        .output()
        .expect("git should run");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Initialize a git repo with minimal config
pub fn git_init(project: &Project) {
    git(project, &["init", "-b", "main"]);
    git(project, &["config", "user.email", "test@example.com"]);
    git(project, &["config", "user.name", "Test User"]);
    git(project, &["config", "commit.gpgsign", "false"]);
}

/// Add an empty commit with the given message
pub fn git_commit(project: &Project, message: &str) {
    git(project, &["commit", "--allow-empty", "-m", message]);
}

/// Tag HEAD
pub fn git_tag(project: &Project, name: &str) {
    git(project, &["tag", name]);
}
