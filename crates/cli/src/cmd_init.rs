// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `scopelint init` command.

use std::path::Path;

use anyhow::Result;

use crate::cli::InitArgs;
use crate::config::CONFIG_FILE_NAME;
use crate::error::{Error, ExitCode};
use crate::git;
use crate::init::{detect_workspaces, install_hook, parse_scope_list, render_config};

/// Run the `init` command in the current directory.
pub fn run(args: &InitArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    run_in(args, &cwd)
}

/// Create scopelint.toml (and optionally the hook) under `root`.
pub fn run_in(args: &InitArgs, root: &Path) -> Result<ExitCode> {
    let config_path = root.join(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        eprintln!("{} already exists. Use --force to overwrite.", CONFIG_FILE_NAME);
        return Ok(ExitCode::ConfigError);
    }

    let (scopes, detected) = match &args.scopes {
        Some(list) => (parse_scope_list(list)?, false),
        None => (detect_workspaces(root), true),
    };

    std::fs::write(&config_path, render_config(&scopes)).map_err(|e| Error::Io {
        path: config_path.clone(),
        source: e,
    })?;

    if detected {
        println!(
            "Created {} (detected scopes: {})",
            CONFIG_FILE_NAME,
            scopes.join(", ")
        );
    } else {
        println!("Created {} (scopes: {})", CONFIG_FILE_NAME, scopes.join(", "));
    }

    if args.hook {
        let hook = install_hook(&git::hooks_dir(root)?)?;
        println!("Installed commit-msg hook at {}", hook.display());
    }

    Ok(ExitCode::Success)
}

#[cfg(test)]
#[path = "cmd_init_tests.rs"]
mod tests;
