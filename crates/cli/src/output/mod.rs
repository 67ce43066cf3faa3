//! Output formatting for lint reports.

pub mod json;
pub mod text;

/// Output formatting options.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Print passing and ignored messages too.
    pub verbose: bool,

    /// Link printed after reports with problems.
    pub help_url: Option<String>,
}

impl FormatOptions {
    /// Set the help link.
    pub fn with_help_url(mut self, url: Option<String>) -> Self {
        self.help_url = url;
        self
    }

    /// Report passing messages too.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
