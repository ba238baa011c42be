//! Lexer/Scanner implementation
//!
//! Turns an [`InputStream`] into tokens on demand, holding at most one token
//! of lookahead. Whitespace and `#` comments are skipped.

use super::input::InputStream;
use super::token::{self, Keyword, Token};
use crate::error::{LangError, LangResult, SourceLocation};
use crate::options::Options;

/// Lexer over a single source text
pub struct Lexer {
    input: InputStream,
    current: Option<Token>,
    strict_strings: bool,
    finished: bool,
}

impl Lexer {
    /// Create a new lexer
    pub fn new(source: &str, filename: Option<&str>) -> Self {
        Self::from_input(InputStream::with_filename(source, filename))
    }

    /// Create a lexer configured by `options`
    pub fn with_options(source: &str, options: &Options) -> Self {
        let mut lexer = Self::new(source, options.filename.as_deref());
        lexer.strict_strings = options.strict_strings;
        lexer
    }

    /// Create a lexer reading from an existing character source
    pub fn from_input(input: InputStream) -> Self {
        Self {
            input,
            current: None,
            strict_strings: false,
            finished: false,
        }
    }

    /// Look at the next token without consuming it
    pub fn peek(&mut self) -> LangResult<Option<&Token>> {
        if self.current.is_none() {
            self.current = self.read_next()?;
        }
        Ok(self.current.as_ref())
    }

    /// Consume the next token
    pub fn next_token(&mut self) -> LangResult<Option<Token>> {
        match self.current.take() {
            Some(token) => Ok(Some(token)),
            None => self.read_next(),
        }
    }

    /// True once every token has been consumed
    pub fn eof(&mut self) -> LangResult<bool> {
        Ok(self.peek()?.is_none())
    }

    /// Location of the character the underlying input is about to read
    pub fn location(&self) -> SourceLocation {
        self.input.location()
    }

    /// Create a parse error at the current location
    pub fn error(&self, message: impl Into<String>) -> LangError {
        LangError::parse_error(message, self.input.location())
    }

    /// Tokenize the remaining source code
    pub fn tokenize(&mut self) -> LangResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn read_next(&mut self) -> LangResult<Option<Token>> {
        loop {
            self.read_while(token::is_whitespace);
            match self.input.peek() {
                None => return Ok(None),
                Some('#') => self.skip_comment(),
                Some(c) => return self.read_token(c).map(Some),
            }
        }
    }

    fn read_token(&mut self, c: char) -> LangResult<Token> {
        match c {
            '"' => self.read_string(),
            c if c.is_ascii_digit() || c == '.' => self.read_number(),
            c if token::is_identifier_start(c) => Ok(self.read_identifier()),
            c if token::is_punctuation(c) => {
                self.input.next();
                Ok(Token::Punctuation(c))
            }
            c if token::is_operator_char(c) => {
                Ok(Token::Operator(self.read_while(token::is_operator_char)))
            }
            c => Err(self.input.error(format!("Can't handle character: {}", c))),
        }
    }

    /// Consume characters while `predicate` holds
    fn read_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(c) = self.input.peek() {
            if !predicate(c) {
                break;
            }
            text.push(c);
            self.input.next();
        }
        text
    }

    /// Scan a number literal; a second `.` ends the number without being consumed
    fn read_number(&mut self) -> LangResult<Token> {
        let mut has_dot = false;
        let lexeme = self.read_while(|c| {
            if c == '.' {
                if has_dot {
                    return false;
                }
                has_dot = true;
                return true;
            }
            c.is_ascii_digit()
        });

        lexeme
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| self.input.error(format!("Invalid number literal '{}'", lexeme)))
    }

    /// Scan an identifier or keyword
    fn read_identifier(&mut self) -> Token {
        let name = self.read_while(token::is_identifier_char);
        match Keyword::from_str(&name) {
            Some(keyword) => Token::Keyword(keyword),
            None => Token::Identifier(name),
        }
    }

    /// Scan a string literal. Any character after a backslash is taken as-is.
    fn read_string(&mut self) -> LangResult<Token> {
        let start = self.input.location();
        self.input.next();

        let mut value = String::new();
        let mut escaped = false;
        let mut terminated = false;

        while let Some(c) = self.input.next() {
            if escaped {
                value.push(c);
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                terminated = true;
                break;
            } else {
                value.push(c);
            }
        }

        if !terminated && self.strict_strings {
            return Err(LangError::lexer_error(
                format!("Unterminated string literal starting at {}", start),
                self.input.location(),
            ));
        }

        Ok(Token::String(value))
    }

    /// Skip a `#` comment up to and including the newline that ends it
    fn skip_comment(&mut self) {
        self.read_while(|c| c != '\n');
        self.input.next();
    }
}

impl Iterator for Lexer {
    type Item = LangResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer {}
