//! Lexer and parser configuration
//!
//! The defaults reproduce the permissive behaviour existing programs were
//! written against; each stricter or alternative mode is opt-in.

/// Default bound on atom nesting (parentheses, blocks, calls, lambdas).
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options shared by a [`Lexer`](crate::Lexer) and [`Parser`](crate::Parser) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Filename attached to every error location
    pub filename: Option<String>,
    /// Reject string literals that reach end of input without a closing quote
    pub strict_strings: bool,
    /// Accept a separator directly before the closing punctuation, e.g. `f(a,)` or `{ x; }`
    pub allow_trailing_separator: bool,
    /// Parse `a = b = c` as `a = (b = c)` instead of `(a = b) = c`
    pub right_associative_assignment: bool,
    /// Maximum atom nesting before the parser gives up
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            filename: None,
            strict_strings: false,
            allow_trailing_separator: false,
            right_associative_assignment: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_strict_strings(mut self, strict: bool) -> Self {
        self.strict_strings = strict;
        self
    }

    pub fn with_trailing_separator(mut self, allow: bool) -> Self {
        self.allow_trailing_separator = allow;
        self
    }

    pub fn with_right_associative_assignment(mut self, right: bool) -> Self {
        self.right_associative_assignment = right;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
