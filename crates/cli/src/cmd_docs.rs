// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `scopelint docs` command.
//!
//! Text format:
//! ```text
//! docs: FAIL
//!   <path>: <violation> `<scope>`
//!     <advice>
//! ```

use std::io::Write;

use anyhow::Result;
use termcolor::{ColorSpec, StandardStream, WriteColor};

use scopelint::cli::{Cli, DocsArgs, OutputFormat};
use scopelint::color::{resolve_color, scheme};
use scopelint::config::Severity;
use scopelint::discovery::load_project;
use scopelint::docs::{self, DocsCheck, DocsReport};
use scopelint::error::ExitCode;

pub fn run(cli: &Cli, args: &DocsArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let project = load_project(cli.config.as_deref(), &cwd)?;

    let skipped = |reason: &str| -> Result<ExitCode> {
        match args.output {
            OutputFormat::Text => println!("docs: skipped ({})", reason),
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({ "skipped": true, "reason": reason })
            ),
        }
        Ok(ExitCode::Success)
    };

    let mut report = match docs::check(&project.root, &project.config)? {
        DocsCheck::Disabled => return skipped("docs.level is off"),
        DocsCheck::NoAllowList => return skipped("no scope-enum allow-list"),
        DocsCheck::Checked(report) => report,
    };

    let mut fixed = Vec::new();
    if args.fix {
        fixed = docs::fix(&project.root, &report)?;
        if !fixed.is_empty()
            && let DocsCheck::Checked(rechecked) = docs::check(&project.root, &project.config)?
        {
            report = rechecked;
        }
    }

    match args.output {
        OutputFormat::Text => write_text(&report, &fixed)?,
        OutputFormat::Json => {
            let json = serde_json::json!({
                "passed": !report.failed(),
                "report": &report,
                "violations": report.violations(),
                "fixed": &fixed,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(if report.failed() {
        ExitCode::LintFailed
    } else {
        ExitCode::Success
    })
}

fn write_text(report: &DocsReport, fixed: &[String]) -> std::io::Result<()> {
    let mut out = StandardStream::stdout(resolve_color(false, false));

    if !fixed.is_empty() {
        status(&mut out, "FIXED", &scheme::pass())?;
        writeln!(out, "  added {}", fixed.join(", "))?;
    }

    if report.in_sync() {
        if fixed.is_empty() {
            status(&mut out, "PASS", &scheme::pass())?;
        }
        return Ok(());
    }

    let (label, spec) = match report.level {
        Severity::Error => ("FAIL", scheme::error()),
        _ => ("WARN", scheme::warning()),
    };
    status(&mut out, label, &spec)?;

    for violation in report.violations() {
        write!(out, "  ")?;
        out.set_color(&scheme::link())?;
        write!(out, "{}", report.path.display())?;
        out.reset()?;
        match &violation.scope {
            Some(scope) => writeln!(out, ": {} `{}`", violation.kind, scope)?,
            None => writeln!(out, ": {}", violation.kind)?,
        }
        writeln!(out, "    {}", violation.advice)?;
    }
    Ok(())
}

fn status(out: &mut StandardStream, label: &str, spec: &ColorSpec) -> std::io::Result<()> {
    write!(out, "docs: ")?;
    out.set_color(spec)?;
    write!(out, "{}", label)?;
    out.reset()?;
    writeln!(out)
}
