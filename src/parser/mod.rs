//! Parser module
//!
//! This module handles parsing tokens into an Abstract Syntax Tree (AST).

pub mod ast;
pub mod parser;

pub use ast::Ast;
pub use parser::{precedence, Parser};
