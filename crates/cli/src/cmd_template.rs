// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `scopelint template` command.

use anyhow::Result;

use scopelint::cli::{Cli, TemplateArgs};
use scopelint::discovery::load_project;
use scopelint::error::{Error, ExitCode};
use scopelint::template::{TEMPLATE_PATH, generate_template};

pub fn run(cli: &Cli, args: &TemplateArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let project = load_project(cli.config.as_deref(), &cwd)?;
    let template = generate_template(&project.config);

    if !args.write {
        print!("{}", template);
        return Ok(ExitCode::Success);
    }

    let path = project.root.join(TEMPLATE_PATH);
    std::fs::write(&path, template).map_err(|e| Error::Io {
        path: path.clone(),
        source: e,
    })?;
    println!("Wrote {}", path.display());
    println!("Enable it with: git config commit.template {}", TEMPLATE_PATH);
    Ok(ExitCode::Success)
}
