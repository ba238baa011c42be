//! Lexical analysis module
//!
//! This module turns source text into tokens: [`InputStream`] is the
//! position-tracking character source, [`Lexer`] reads tokens from it.

pub mod input;
pub mod token;
pub mod scanner;

pub use input::{InputStream, Position};
pub use token::{Token, Keyword};
pub use scanner::Lexer;
