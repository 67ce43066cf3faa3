// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Init command detection and output.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Scope naming the repository root.
pub const ROOT_SCOPE: &str = "repo";

/// Files that mark a directory as a workspace package.
pub const MANIFESTS: &[&str] = &[
    "Cargo.toml",
    "package.json",
    "pyproject.toml",
    "requirements.txt",
    "go.mod",
];

/// Directories never treated as workspaces.
const SKIP_DIRS: &[&str] = &["node_modules", "target", "vendor", "dist", "build"];

/// `commit-msg` hook body.
pub const HOOK_SCRIPT: &str = "#!/bin/sh\n\
# Installed by scopelint init\n\
exec scopelint lint --edit \"$1\"\n";

/// Detect workspace scopes: the root plus each top-level directory holding a
/// package manifest, sorted by name.
pub fn detect_workspaces(root: &Path) -> Vec<String> {
    let mut found: Vec<String> = root
        .read_dir()
        .ok()
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().into_string().ok())
                .filter(|name| !name.starts_with('.') && !SKIP_DIRS.contains(&name.as_str()))
                .filter(|name| has_manifest(&root.join(name)))
                .collect()
        })
        .unwrap_or_default();

    found.sort();
    found.retain(|name| name != ROOT_SCOPE);
    tracing::debug!("detected workspaces: {:?}", found);

    let mut scopes = vec![ROOT_SCOPE.to_string()];
    scopes.extend(found);
    scopes
}

fn has_manifest(dir: &Path) -> bool {
    MANIFESTS.iter().any(|m| dir.join(m).is_file())
}

/// Parse a `--scopes a,b,c` value into a valid allow-list.
pub fn parse_scope_list(value: &str) -> Result<Vec<String>> {
    let mut scopes: Vec<String> = Vec::new();
    for scope in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if scopes.iter().any(|s| s == scope) {
            return Err(Error::Argument(format!("duplicate scope `{}`", scope)));
        }
        scopes.push(scope.to_string());
    }
    if scopes.is_empty() {
        return Err(Error::Argument("--scopes must name at least one scope".to_string()));
    }
    Ok(scopes)
}

/// Render a `scopelint.toml` extending the conventional preset.
pub fn render_config(scopes: &[String]) -> String {
    let list = scopes
        .iter()
        .map(|s| toml::Value::String(s.clone()).to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "# Conventional commits with a fixed set of workspace scopes.\n\
         # Run `scopelint config` to see the resolved rules.\n\
         extends = [\"@commitlint/config-conventional\"]\n\
         \n\
         [rules]\n\
         scope-enum = [2, \"always\", [{}]]\n",
        list
    )
}

/// Write the `commit-msg` hook into `hooks_dir`.
pub fn install_hook(hooks_dir: &Path) -> Result<PathBuf> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| Error::Io { path, source }
    };

    std::fs::create_dir_all(hooks_dir).map_err(io_err(hooks_dir))?;
    let hook = hooks_dir.join("commit-msg");
    std::fs::write(&hook, HOOK_SCRIPT).map_err(io_err(&hook))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&hook, std::fs::Permissions::from_mode(0o755))
            .map_err(io_err(&hook))?;
    }

    Ok(hook)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
