// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `scopelint config` command.

use anyhow::Result;

use scopelint::cli::{Cli, ConfigArgs};
use scopelint::discovery::load_project;
use scopelint::error::ExitCode;

pub fn run(cli: &Cli, args: &ConfigArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let project = load_project(cli.config.as_deref(), &cwd)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&project.config)?);
    } else {
        if let Some(path) = &project.config_path {
            println!("# resolved from {}", path.display());
        }
        print!("{}", project.config.to_toml_string()?);
    }
    Ok(ExitCode::Success)
}
