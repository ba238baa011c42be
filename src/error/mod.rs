//! Error handling and diagnostics for the front end
//!
//! Every failure in the lexer or parser is fatal and carries the position
//! the character source was about to read when it happened.

use std::fmt;
use thiserror::Error;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for front-end operations
pub type LangResult<T> = Result<T, LangError>;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (0-based)
    pub column: usize,
    /// Optional filename
    pub filename: Option<String>,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize, filename: Option<String>) -> Self {
        Self {
            line,
            column,
            filename,
        }
    }

    /// Create a source location without a filename
    pub fn at(line: usize, column: usize) -> Self {
        Self::new(line, column, None)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref filename) = self.filename {
            write!(f, "{}:{}:{}", filename, self.line, self.column)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// Error raised by the lexer or the parser.
///
/// Both variants render the same way, `"<message> (<line>:<column>)"`, so
/// callers that only show the message never need to match on the kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LangError {
    /// Lexical analysis error
    #[error("{message} ({location})")]
    LexerError {
        message: String,
        location: SourceLocation,
    },
    /// Parsing error
    #[error("{message} ({location})")]
    ParseError {
        message: String,
        location: SourceLocation,
    },
}

impl LangError {
    /// Create a new lexer error
    pub fn lexer_error(message: impl Into<String>, location: SourceLocation) -> Self {
        Self::LexerError {
            message: message.into(),
            location,
        }
    }

    /// Create a new parse error
    pub fn parse_error(message: impl Into<String>, location: SourceLocation) -> Self {
        Self::ParseError {
            message: message.into(),
            location,
        }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::LexerError { .. } => "Lexer Error",
            Self::ParseError { .. } => "Parse Error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        match self {
            Self::LexerError { message, .. } | Self::ParseError { message, .. } => message,
        }
    }

    /// Get the source location
    pub fn location(&self) -> &SourceLocation {
        match self {
            Self::LexerError { location, .. } | Self::ParseError { location, .. } => location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_location_display() {
        let loc = SourceLocation::at(10, 5);
        assert_eq!(loc.to_string(), "10:5");

        let loc_with_file = SourceLocation::new(10, 5, Some("fib.lambda".to_string()));
        assert_eq!(loc_with_file.to_string(), "fib.lambda:10:5");
    }

    #[test]
    fn test_error_creation() {
        let loc = SourceLocation::at(1, 0);
        let err = LangError::lexer_error("Can't handle character: @", loc.clone());

        assert_eq!(err.kind(), "Lexer Error");
        assert_eq!(err.message(), "Can't handle character: @");
        assert_eq!(err.location(), &loc);
    }

    #[test]
    fn test_error_display() {
        let err = LangError::parse_error("Expecting punctuation: )", SourceLocation::at(5, 10));
        assert_eq!(err.to_string(), "Expecting punctuation: ) (5:10)");

        let err = LangError::lexer_error("Can't handle character: @", SourceLocation::at(2, 3));
        assert_eq!(err.to_string(), "Can't handle character: @ (2:3)");
    }
}
