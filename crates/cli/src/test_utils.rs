//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::config::{self, Config};

/// Config with the workspace allow-list used across tests.
pub const WORKSPACE_CONFIG: &str = r#"extends = ["@commitlint/config-conventional"]

[rules]
scope-enum = [2, "always", ["repo", "backend-python", "pwa"]]
"#;

/// Creates a temp directory with the workspace scopelint.toml.
pub fn temp_project() -> TempDir {
    temp_project_with_config(WORKSPACE_CONFIG)
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(config::CONFIG_FILE_NAME), content).unwrap();
    dir
}

/// Load the config written by `temp_project*`.
pub fn load_config(root: &Path) -> Config {
    config::load(&root.join(config::CONFIG_FILE_NAME)).unwrap()
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}
