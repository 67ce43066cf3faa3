// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scopelint CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use scopelint::cli::{Cli, Command};
use scopelint::error::ExitCode;

mod cmd_config;
mod cmd_docs;
mod cmd_lint;
mod cmd_template;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("SCOPELINT_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("scopelint: {}", e);
            match e.downcast_ref::<scopelint::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Lint(args)) => cmd_lint::run(&cli, args),
        Some(Command::Config(args)) => cmd_config::run(&cli, args),
        Some(Command::Docs(args)) => cmd_docs::run(&cli, args),
        Some(Command::Template(args)) => cmd_template::run(&cli, args),
        Some(Command::Init(args)) => scopelint::cmd_init::run(args),
    }
}
