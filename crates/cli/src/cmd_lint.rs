// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `scopelint lint` command.

use std::io::Read;
use std::path::Path;

use anyhow::Result;

use scopelint::cli::{Cli, LintArgs, MessageSource, OutputFormat};
use scopelint::color::resolve_color;
use scopelint::discovery::load_project;
use scopelint::error::{Error, ExitCode};
use scopelint::git;
use scopelint::lint::{LintOutcome, Linter};
use scopelint::output::FormatOptions;
use scopelint::output::json::{JsonFormatter, create_report};
use scopelint::output::text::TextFormatter;

/// A message to lint and, for history, the commit it came from.
struct Input {
    message: String,
    hash: Option<String>,
}

pub fn run(cli: &Cli, args: &LintArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let project = load_project(cli.config.as_deref(), &cwd)?;
    let linter = Linter::new(&project.config)?;

    let inputs = read_inputs(&args.source(), &cwd)?;
    tracing::debug!("linting {} message(s)", inputs.len());

    let results: Vec<LintOutcome> = inputs
        .iter()
        .map(|input| {
            let outcome = linter.lint(&input.message);
            match &input.hash {
                Some(hash) => outcome.with_commit(hash.clone()),
                None => outcome,
            }
        })
        .collect();
    let report = create_report(results);

    match args.output {
        OutputFormat::Text => {
            let options = FormatOptions::default()
                .verbose(args.verbose)
                .with_help_url(args.help_url.clone().or(project.config.help_url.clone()));
            let mut formatter =
                TextFormatter::stdout(resolve_color(args.color, args.no_color), options);
            formatter.write_report(&report)?;
        }
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            JsonFormatter::new(stdout.lock()).write(&report)?;
        }
    }

    Ok(if report.valid {
        ExitCode::Success
    } else {
        ExitCode::LintFailed
    })
}

fn read_inputs(source: &MessageSource, cwd: &Path) -> Result<Vec<Input>> {
    let inputs = match source {
        MessageSource::Stdin => {
            let mut message = String::new();
            std::io::stdin().read_to_string(&mut message)?;
            if message.trim().is_empty() {
                return Err(Error::Argument(
                    "no commit message on stdin (use -m, --edit, --from or --last)".to_string(),
                )
                .into());
            }
            vec![Input {
                message,
                hash: None,
            }]
        }
        MessageSource::Message(message) => vec![Input {
            message: message.clone(),
            hash: None,
        }],
        MessageSource::Edit(path) => {
            let path = match path {
                Some(path) => cwd.join(path),
                None => git::commit_editmsg_path(cwd)?,
            };
            tracing::debug!("reading message from {}", path.display());
            let message = std::fs::read_to_string(&path).map_err(|e| Error::Io {
                path: path.clone(),
                source: e,
            })?;
            vec![Input {
                message,
                hash: None,
            }]
        }
        MessageSource::Range { from, to } => git::commits_in_range(cwd, from, to.as_deref())?
            .into_iter()
            .map(|c| Input {
                message: c.message,
                hash: Some(c.hash),
            })
            .collect(),
        MessageSource::Last => {
            let commit = git::last_commit(cwd)?;
            vec![Input {
                message: commit.message,
                hash: Some(commit.hash),
            }]
        }
    };
    Ok(inputs)
}
