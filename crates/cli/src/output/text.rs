//! Text output formatter.
//!
//! One block per reported message:
//! ```text
//! ⧗   input: <header>
//! ✖   <message> [<rule>]
//! ⚠   <message> [<rule>]
//!
//! ✖   found <errors> problems, <warnings> warnings
//! ⓘ   Get help: <url>
//! ```

use std::io::Write;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::FormatOptions;
use crate::color::scheme;
use crate::lint::{LintOutcome, LintReport, Problem};

const INPUT: &str = "⧗";
const ERROR: &str = "✖";
const WARNING: &str = "⚠";
const PASS: &str = "✔";
const HELP: &str = "ⓘ";

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    options: FormatOptions,
    reported: usize,
}

impl TextFormatter<StandardStream> {
    /// Create a formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, options: FormatOptions) -> Self {
        Self {
            out,
            options,
            reported: 0,
        }
    }

    /// Write every outcome of a report.
    pub fn write_report(&mut self, report: &LintReport) -> std::io::Result<()> {
        for outcome in &report.results {
            self.write_outcome(outcome)?;
        }
        Ok(())
    }

    /// Write a single outcome.
    ///
    /// Clean outcomes are silent unless verbose.
    pub fn write_outcome(&mut self, outcome: &LintOutcome) -> std::io::Result<()> {
        if outcome.is_clean() && !self.options.verbose {
            return Ok(());
        }

        if self.reported > 0 {
            writeln!(self.out)?;
        }
        self.reported += 1;

        self.marker(INPUT, &scheme::input())?;
        write!(self.out, "input: ")?;
        if let Some(hash) = &outcome.commit {
            self.out.set_color(&scheme::link())?;
            write!(self.out, "{} ", hash)?;
            self.out.reset()?;
        }
        self.out.set_color(&scheme::header())?;
        write!(self.out, "{}", outcome.input)?;
        self.out.reset()?;
        writeln!(self.out)?;

        if outcome.ignored {
            self.marker(PASS, &scheme::pass())?;
            writeln!(self.out, "ignored")?;
            return Ok(());
        }

        for problem in &outcome.errors {
            self.write_problem(ERROR, &scheme::error(), problem)?;
        }
        for problem in &outcome.warnings {
            self.write_problem(WARNING, &scheme::warning(), problem)?;
        }
        if !outcome.is_clean() {
            writeln!(self.out)?;
        }

        let (symbol, spec) = if !outcome.errors.is_empty() {
            (ERROR, scheme::error())
        } else if !outcome.warnings.is_empty() {
            (WARNING, scheme::warning())
        } else {
            (PASS, scheme::pass())
        };
        self.marker(symbol, &spec)?;
        writeln!(
            self.out,
            "found {} problems, {} warnings",
            outcome.errors.len(),
            outcome.warnings.len()
        )?;

        if !outcome.is_clean()
            && let Some(url) = self.options.help_url.clone()
        {
            self.marker(HELP, &scheme::link())?;
            write!(self.out, "Get help: ")?;
            self.out.set_color(&scheme::link())?;
            write!(self.out, "{}", url)?;
            self.out.reset()?;
            writeln!(self.out)?;
        }

        Ok(())
    }

    fn write_problem(
        &mut self,
        symbol: &str,
        spec: &ColorSpec,
        problem: &Problem,
    ) -> std::io::Result<()> {
        self.marker(symbol, spec)?;
        write!(self.out, "{} ", problem.message)?;
        self.out.set_color(&scheme::rule_name())?;
        write!(self.out, "[{}]", problem.name)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    /// Colored symbol followed by the column gap.
    fn marker(&mut self, symbol: &str, spec: &ColorSpec) -> std::io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{}", symbol)?;
        self.out.reset()?;
        write!(self.out, "   ")
    }

    /// Number of outcomes written so far.
    pub fn reported(&self) -> usize {
        self.reported
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
