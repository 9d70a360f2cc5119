//! Output formatting

use calc_widget::widget::{StatusLine, StatusStyle};
use console::style;

/// Writes display and status lines to stdout and errors to stderr
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    /// Whether to color stdout
    pub use_color: bool,
    /// Whether to color stderr
    pub stderr_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Reporter {
    /// Create a new reporter, coloring both streams alike
    #[must_use]
    pub const fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            use_color,
            stderr_color: use_color,
            quiet,
        }
    }

    /// Set stderr coloring separately
    #[must_use]
    pub const fn with_stderr_color(mut self, stderr_color: bool) -> Self {
        self.stderr_color = stderr_color;
        self
    }

    /// Formats the display line
    #[must_use]
    pub fn format_display(&self, display: &str) -> String {
        if self.use_color {
            format!("{}", style(display).bold().force_styling(true))
        } else {
            display.to_string()
        }
    }

    /// Formats a status line in its style's color
    #[must_use]
    pub fn format_status(&self, status: &StatusLine) -> String {
        if !self.use_color {
            return status.text.clone();
        }
        match status.style {
            StatusStyle::Success => format!("{}", style(&status.text).green().force_styling(true)),
            StatusStyle::Error => {
                format!("{}", style(&status.text).red().bold().force_styling(true))
            }
        }
    }

    /// Formats an error message for stderr
    #[must_use]
    pub fn format_error(&self, message: &str) -> String {
        if self.stderr_color {
            format!("{}", style(message).red().bold().force_styling(true))
        } else {
            message.to_string()
        }
    }

    /// Prints the display value. Always printed, even in quiet mode.
    pub fn display(&self, display: &str) {
        println!("{}", self.format_display(display));
    }

    /// Prints a status line unless quiet
    pub fn status(&self, status: &StatusLine) {
        if self.quiet {
            return;
        }
        println!("{}", self.format_status(status));
    }

    /// Prints an error to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.format_error(message));
    }
}
