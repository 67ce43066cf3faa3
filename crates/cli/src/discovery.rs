//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for
//! scopelint.toml.

use std::path::{Path, PathBuf};

use crate::config::{self, CONFIG_FILE_NAME, Config};
use crate::error::{Error, Result};

/// Find scopelint.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "SCOPELINT_CONFIG")
/// 2. Discovery from current directory up to git root
/// 3. None (use the conventional preset)
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            let path = cwd.join(path);
            if path.is_file() {
                Ok(Some(path))
            } else {
                Err(Error::Config {
                    message: "config file not found".to_string(),
                    path: Some(path),
                })
            }
        }
        None => Ok(find_config(cwd)),
    }
}

/// A loaded config together with the directory it governs.
#[derive(Debug)]
pub struct Project {
    pub config: Config,
    /// Config file used, if any.
    pub config_path: Option<PathBuf>,
    /// Directory that relative paths (docs, template) resolve against.
    pub root: PathBuf,
}

/// Resolve and load the config for `cwd`.
pub fn load_project(explicit: Option<&Path>, cwd: &Path) -> Result<Project> {
    let config_path = resolve_config(explicit, cwd)?;
    let config = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load(path)?
        }
        None => {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Config::default()
        }
    };
    let root = project_root(config_path.as_deref(), cwd);
    Ok(Project {
        config,
        config_path,
        root,
    })
}

/// The config file's directory, else the enclosing git root, else `cwd`.
pub fn project_root(config_path: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(parent) = config_path.and_then(Path::parent) {
        return parent.to_path_buf();
    }
    cwd.ancestors()
        .find(|dir| dir.join(".git").exists())
        .unwrap_or(cwd)
        .to_path_buf()
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
