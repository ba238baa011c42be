//! Diagnostic formatting for better error messages
//!
//! Renders a [`LangError`] with the surrounding source lines and a caret
//! under the column where lexing or parsing stopped.

use super::{LangError, SourceLocation};
use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic {
    error: LangError,
    source: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic from an error
    pub fn new(error: LangError) -> Self {
        Self {
            error,
            source: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(error: LangError, source: &str) -> Self {
        Self {
            error,
            source: Some(source.to_string()),
        }
    }

    pub fn error(&self) -> &LangError {
        &self.error
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        let kind = self.error.kind().red().bold();
        output.push_str(&format!("{}: ", kind));
        output.push_str(self.error.message());
        output.push('\n');

        let location = self.error.location();
        output.push_str(&format!("  {} {}\n", "-->".blue().bold(), location));

        if let Some(ref source) = self.source {
            output.push_str(&self.format_source_context(source, location));
        }

        output
    }

    /// Format source code context around the error location
    fn format_source_context(&self, source: &str, location: &SourceLocation) -> String {
        let mut output = String::new();
        let lines: Vec<&str> = source.split('\n').collect();

        if location.line == 0 || location.line > lines.len() {
            return output;
        }

        let line_idx = location.line - 1;
        let line_num_width = (location.line + 1).to_string().len();

        if line_idx > 0 {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx, width = line_num_width).blue(),
                lines[line_idx - 1]
            ));
        }

        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", location.line, width = line_num_width)
                .blue()
                .bold(),
            lines[line_idx]
        ));

        // Columns are 0-based, so the caret sits directly after the gutter.
        let indicator_padding = " ".repeat(line_num_width + 3 + location.column);
        output.push_str(&format!("{}{}\n", indicator_padding, "^".red().bold()));

        if line_idx + 1 < lines.len() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx + 2, width = line_num_width).blue(),
                lines[line_idx + 1]
            ));
        }

        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
