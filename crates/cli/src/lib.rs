pub mod cli;
pub mod cmd_init;
pub mod color;
pub mod config;
pub mod discovery;
pub mod docs;
pub mod error;
pub mod git;
pub mod init;
pub mod lint;
pub mod message;
pub mod output;
pub mod rules;
pub mod template;

pub use cli::{Cli, Command, InitArgs, LintArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use lint::{LintOutcome, LintReport, Linter, Problem, lint};

#[cfg(test)]
pub mod test_utils;
