//! Token definitions
//!
//! The character classes and keyword set are fixed for the language and
//! shared by every lexer instance.

use std::fmt;

/// Single-character punctuation tokens
pub const PUNCTUATION: &str = ",;(){}[]";

/// Characters that make up operator tokens; a maximal run forms one token
pub const OPERATOR_CHARS: &str = "<+-*%=&>|!";

/// Non-alphanumeric characters allowed after the first character of an identifier
pub const IDENTIFIER_CHARS: &str = "?!-<>=_";

/// Whitespace skipped between tokens
pub const WHITESPACE: &str = " \t\n";

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(c)
}

pub fn is_whitespace(c: char) -> bool {
    WHITESPACE.contains(c)
}

pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || IDENTIFIER_CHARS.contains(c)
}

/// A token produced by the lexer
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    /// String literal with escapes already decoded
    String(String),
    Keyword(Keyword),
    Identifier(String),
    Punctuation(char),
    Operator(String),
}

impl Token {
    /// Name of the token class, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Keyword(_) => "keyword",
            Self::Identifier(_) => "identifier",
            Self::Punctuation(_) => "punctuation",
            Self::Operator(_) => "operator",
        }
    }

    pub fn is_punctuation(&self, c: char) -> bool {
        matches!(self, Self::Punctuation(p) if *p == c)
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Self::Keyword(k) if *k == keyword)
    }

    pub fn is_operator(&self, op: &str) -> bool {
        matches!(self, Self::Operator(o) if o == op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {}", n),
            Self::String(s) => write!(f, "string {:?}", s),
            Self::Keyword(kw) => write!(f, "keyword '{}'", kw),
            Self::Identifier(name) => write!(f, "identifier '{}'", name),
            Self::Punctuation(c) => write!(f, "punctuation '{}'", c),
            Self::Operator(op) => write!(f, "operator '{}'", op),
        }
    }
}

/// Reserved words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    If,
    Then,
    Else,
    Lambda,
    True,
    False,
}

impl Keyword {
    /// Get keyword from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "if" => Some(Self::If),
            "then" => Some(Self::Then),
            "else" => Some(Self::Else),
            "lambda" => Some(Self::Lambda),
            "true" => Some(Self::True),
            "false" => Some(Self::False),
            _ => None,
        }
    }

    /// Get string representation of keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Then => "then",
            Self::Else => "else",
            Self::Lambda => "lambda",
            Self::True => "true",
            Self::False => "false",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
