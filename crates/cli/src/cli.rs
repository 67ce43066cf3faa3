// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Lint conventional commit messages against a workspace scope allow-list
#[derive(Parser)]
#[command(name = "scopelint")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SCOPELINT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Lint commit messages
    Lint(LintArgs),
    /// Print the resolved configuration
    Config(ConfigArgs),
    /// Check that workspace docs list every allowed scope
    Docs(DocsArgs),
    /// Print or write a commit message template
    Template(TemplateArgs),
    /// Create scopelint.toml for this workspace
    Init(InitArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct LintArgs {
    /// Message to lint (instead of stdin)
    #[arg(short, long, value_name = "MSG", conflicts_with_all = ["edit", "from", "last"])]
    pub message: Option<String>,

    /// Read the message from a file (default: .git/COMMIT_EDITMSG)
    #[arg(
        short,
        long,
        value_name = "FILE",
        num_args = 0..=1,
        conflicts_with_all = ["from", "last"]
    )]
    pub edit: Option<Option<PathBuf>>,

    /// Lint commits after this ref
    #[arg(long, value_name = "REF", conflicts_with = "last")]
    pub from: Option<String>,

    /// End of the commit range (default: HEAD)
    #[arg(long, value_name = "REF", requires = "from")]
    pub to: Option<String>,

    /// Lint the HEAD commit
    #[arg(long)]
    pub last: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Report passing messages too
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Link printed after failing reports (overrides help-url)
    #[arg(long, value_name = "URL")]
    pub help_url: Option<String>,
}

/// Where `lint` reads messages from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    Stdin,
    Message(String),
    /// `None` means the repository's COMMIT_EDITMSG.
    Edit(Option<PathBuf>),
    Range { from: String, to: Option<String> },
    Last,
}

impl LintArgs {
    pub fn source(&self) -> MessageSource {
        if let Some(message) = &self.message {
            MessageSource::Message(message.clone())
        } else if let Some(edit) = &self.edit {
            MessageSource::Edit(edit.clone())
        } else if let Some(from) = &self.from {
            MessageSource::Range {
                from: from.clone(),
                to: self.to.clone(),
            }
        } else if self.last {
            MessageSource::Last
        } else {
            MessageSource::Stdin
        }
    }
}

#[derive(clap::Args, Debug, Default)]
pub struct ConfigArgs {
    /// Print as JSON instead of TOML
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug, Default)]
pub struct DocsArgs {
    /// Append missing scopes to the docs file
    #[arg(long)]
    pub fix: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args, Debug, Default)]
pub struct TemplateArgs {
    /// Write .gitmessage instead of printing
    #[arg(long)]
    pub write: bool,
}

#[derive(clap::Args, Debug, Default)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,

    /// Comma-separated scopes (default: detect workspaces)
    #[arg(long, value_name = "LIST")]
    pub scopes: Option<String>,

    /// Also install a commit-msg hook
    #[arg(long)]
    pub hook: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
