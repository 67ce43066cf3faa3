// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use chrono::Utc;

use crate::lint::{LintOutcome, LintReport};

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON report.
    pub fn write(&mut self, report: &LintReport) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

/// Create a LintReport with the current timestamp.
pub fn create_report(results: Vec<LintOutcome>) -> LintReport {
    LintReport::new(
        Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        results,
    )
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
