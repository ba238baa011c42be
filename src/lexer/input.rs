//! Character source for the lexer
//!
//! A cursor over the source text that tracks line and column as characters
//! are consumed. Errors raised anywhere in the front end are anchored to the
//! position this cursor is about to read.

use std::iter::FusedIterator;

use crate::error::{LangError, SourceLocation};

/// Cursor position: character offset, 1-based line, 0-based column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 0,
        }
    }
}

/// Source text exposed one character at a time
#[derive(Debug, Clone)]
pub struct InputStream {
    source: Vec<char>,
    position: Position,
    filename: Option<String>,
}

impl InputStream {
    /// Create a new input stream
    pub fn new(source: &str) -> Self {
        Self::with_filename(source, None)
    }

    /// Create an input stream whose errors name `filename`
    pub fn with_filename(source: &str, filename: Option<&str>) -> Self {
        Self {
            source: source.chars().collect(),
            position: Position::start(),
            filename: filename.map(|s| s.to_string()),
        }
    }

    /// Look at the next character without consuming it
    pub fn peek(&self) -> Option<char> {
        self.source.get(self.position.offset).copied()
    }

    /// Check if we've reached the end of the source
    pub fn eof(&self) -> bool {
        self.peek().is_none()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn offset(&self) -> usize {
        self.position.offset
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// Location of the character about to be read
    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(
            self.position.line,
            self.position.column,
            self.filename.clone(),
        )
    }

    /// Create a lexer error at the current location
    pub fn error(&self, message: impl Into<String>) -> LangError {
        LangError::lexer_error(message, self.location())
    }
}

impl Iterator for InputStream {
    type Item = char;

    /// Consume one character. At end of input this returns `None` on every
    /// call and the position stays put.
    fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position.offset += 1;
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 0;
        } else {
            self.position.column += 1;
        }
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.len() - self.position.offset;
        (remaining, Some(remaining))
    }
}

impl FusedIterator for InputStream {}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_STRING: &str = "Hello there!\nGeneral Kenobi!";
    const TEST_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

    #[test]
    fn test_peek_does_not_consume() {
        let stream = InputStream::new(TEST_STRING);
        assert_eq!(stream.peek(), Some('H'));
        assert_eq!(stream.peek(), Some('H'));
        assert_eq!(stream.offset(), 0);
    }

    #[test]
    fn test_next_advances() {
        let mut stream = InputStream::new(TEST_ALPHABET);
        assert_eq!(stream.next(), Some('a'));
        let first = (stream.peek(), stream.offset());
        stream.next();
        let second = (stream.peek(), stream.offset());

        assert_eq!(first, (Some('b'), 1));
        assert_eq!(second, (Some('c'), 2));
    }

    #[test]
    fn test_newline_moves_to_next_line() {
        let mut stream = InputStream::new(TEST_STRING);
        for _ in 0..12 {
            stream.next();
        }
        assert_eq!((stream.line(), stream.column()), (1, 12));

        assert_eq!(stream.next(), Some('\n'));
        assert_eq!((stream.line(), stream.column()), (2, 0));

        stream.next();
        assert_eq!((stream.line(), stream.column()), (2, 1));
    }

    #[test]
    fn test_position_is_monotonic() {
        let mut stream = InputStream::new("a\nbc\n\nd");
        let mut previous = stream.position();
        while let Some(c) = stream.next() {
            let current = stream.position();
            assert!(current.offset > previous.offset);
            assert!(current.line >= previous.line);
            if c == '\n' {
                assert_eq!(current.column, 0);
            } else {
                assert_eq!(current.column, previous.column + 1);
            }
            previous = current;
        }
        assert_eq!(previous.line, 4);
    }

    #[test]
    fn test_end_of_input_sentinel() {
        let mut stream = InputStream::new("x");
        assert_eq!(stream.next(), Some('x'));
        assert!(stream.eof());

        let at_end = stream.position();
        for _ in 0..3 {
            assert_eq!(stream.next(), None);
            assert_eq!(stream.peek(), None);
        }
        assert_eq!(stream.position(), at_end);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let mut stream = InputStream::new("λx");
        assert_eq!(stream.next(), Some('λ'));
        assert_eq!(stream.offset(), 1);
        assert_eq!(stream.column(), 1);
        assert_eq!(stream.peek(), Some('x'));
    }

    #[test]
    fn test_error_embeds_position() {
        let mut stream = InputStream::new(TEST_STRING);
        for _ in 0..15 {
            stream.next();
        }
        let err = stream.error("TEST ERROR");
        assert_eq!(err.to_string(), "TEST ERROR (2:2)");
    }

    #[test]
    fn test_error_names_file() {
        let stream = InputStream::with_filename("", Some("empty.lambda"));
        assert_eq!(stream.error("boom").to_string(), "boom (empty.lambda:1:0)");
    }
}
