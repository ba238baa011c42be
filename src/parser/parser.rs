//! Parser implementation
//!
//! Recursive descent over the lexer's single-token lookahead. Binary
//! operators are handled by precedence climbing in [`Parser::maybe_binary`];
//! everything else is an atom.

use super::ast::Ast;
use crate::error::{LangError, LangResult};
use crate::lexer::{Keyword, Lexer, Token};
use crate::options::Options;

/// Binary operator precedence; higher binds tighter
const PRECEDENCE: &[(&str, u8)] = &[
    ("=", 1),
    ("||", 2),
    ("&&", 3),
    ("<", 7),
    (">", 7),
    ("<=", 7),
    (">=", 7),
    ("==", 7),
    ("!=", 7),
    ("+", 10),
    ("-", 10),
    ("*", 20),
    ("/", 20),
    ("%", 20),
];

/// Precedence of a binary operator, 0 for anything that isn't one
pub fn precedence(op: &str) -> u8 {
    PRECEDENCE
        .iter()
        .find(|(candidate, _)| *candidate == op)
        .map_or(0, |&(_, prec)| prec)
}

/// Parser for a single program
pub struct Parser {
    input: Lexer,
    options: Options,
    depth: usize,
}

impl Parser {
    /// Create a parser with default options
    pub fn new(input: Lexer) -> Self {
        Self::with_options(input, Options::default())
    }

    pub fn with_options(input: Lexer, options: Options) -> Self {
        Self {
            input,
            options,
            depth: 0,
        }
    }

    /// Parse every expression up to end of input into a `Program`.
    ///
    /// `;` between top-level expressions is optional and skipped.
    pub fn parse_toplevel(&mut self) -> LangResult<Ast> {
        let mut body = Vec::new();

        while !self.input.eof()? {
            if self.is_punc(';')? {
                self.input.next_token()?;
                continue;
            }
            body.push(self.parse_expression()?);
        }

        Ok(Ast::Program { body })
    }

    pub fn parse_expression(&mut self) -> LangResult<Ast> {
        let atom = self.parse_atom()?;
        let expr = self.maybe_binary(atom, 0)?;
        self.maybe_call(expr)
    }

    /// Parse a `{ ... }` block. An empty block is `false`, a single statement
    /// is returned as-is, anything longer becomes a `Program`.
    pub fn parse_prog(&mut self) -> LangResult<Ast> {
        let mut body = self.delimited('{', '}', ';', Self::parse_expression)?;
        if body.len() > 1 {
            return Ok(Ast::Program { body });
        }
        Ok(body.pop().unwrap_or(Ast::boolean(false)))
    }

    // ===== Expressions =====

    fn maybe_binary(&mut self, mut left: Ast, min_prec: u8) -> LangResult<Ast> {
        loop {
            let op = match self.input.peek()? {
                Some(Token::Operator(op)) => op.clone(),
                // An operand can't be followed directly by a number.
                Some(Token::Number(value)) => {
                    let token = Token::Number(*value);
                    return Err(self.unexpected(&token));
                }
                _ => return Ok(left),
            };

            let prec = precedence(&op);
            if prec <= min_prec {
                return Ok(left);
            }
            self.skip_op(&op)?;

            // Reusing `prec` as the bound makes every operator left-associative.
            let bound = if op == "=" && self.options.right_associative_assignment {
                prec - 1
            } else {
                prec
            };
            let atom = self.parse_atom()?;
            self.enter()?;
            let right = self.maybe_binary(atom, bound);
            self.leave();
            let right = right?;

            left = if op == "=" {
                Ast::assign(left, right)
            } else {
                Ast::binary(op, left, right)
            };
        }
    }

    fn maybe_call(&mut self, expr: Ast) -> LangResult<Ast> {
        if self.is_punc('(')? {
            let args = self.delimited('(', ')', ',', Self::parse_expression)?;
            Ok(Ast::call(expr, args))
        } else {
            Ok(expr)
        }
    }

    fn parse_atom(&mut self) -> LangResult<Ast> {
        self.enter()?;
        let result = self.parse_primary().and_then(|atom| self.maybe_call(atom));
        self.leave();
        result
    }

    /// Count one level of recursion against `max_depth`; pair with [`Self::leave`]
    fn enter(&mut self) -> LangResult<()> {
        if self.depth >= self.options.max_depth {
            return Err(self.input.error(format!(
                "Maximum nesting depth of {} exceeded",
                self.options.max_depth
            )));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_primary(&mut self) -> LangResult<Ast> {
        if self.is_punc('(')? {
            self.input.next_token()?;
            let expr = self.parse_expression()?;
            self.skip_punc(')')?;
            return Ok(expr);
        }
        if self.is_punc('{')? {
            return self.parse_prog();
        }
        if self.is_kw(Keyword::If)? {
            return self.parse_if();
        }
        if self.is_kw(Keyword::True)? || self.is_kw(Keyword::False)? {
            return self.parse_bool();
        }
        if self.is_kw(Keyword::Lambda)? {
            self.input.next_token()?;
            return self.parse_lambda();
        }

        match self.input.next_token()? {
            Some(Token::Number(value)) => Ok(Ast::Number { value }),
            Some(Token::String(value)) => Ok(Ast::String { value }),
            Some(Token::Identifier(name)) => Ok(Ast::Variable { name }),
            Some(Token::Operator(value)) => Ok(Ast::Operator { value }),
            Some(token) => Err(self.unexpected(&token)),
            None => Err(self.input.error("Unexpected end of input")),
        }
    }

    fn parse_if(&mut self) -> LangResult<Ast> {
        self.skip_kw(Keyword::If)?;
        let cond = self.parse_expression()?;
        if !self.is_punc('{')? {
            self.skip_kw(Keyword::Then)?;
        }
        let then = self.parse_expression()?;

        let otherwise = if self.is_kw(Keyword::Else)? {
            self.input.next_token()?;
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };

        Ok(Ast::If {
            cond: Box::new(cond),
            then: Box::new(then),
            otherwise,
        })
    }

    fn parse_lambda(&mut self) -> LangResult<Ast> {
        let params = self.delimited('(', ')', ',', Self::parse_varname)?;
        let body = self.parse_expression()?;
        Ok(Ast::Lambda {
            params,
            body: Box::new(body),
        })
    }

    fn parse_bool(&mut self) -> LangResult<Ast> {
        let value = matches!(self.input.next_token()?, Some(Token::Keyword(Keyword::True)));
        Ok(Ast::boolean(value))
    }

    fn parse_varname(&mut self) -> LangResult<String> {
        match self.input.next_token()? {
            Some(Token::Identifier(name)) => Ok(name),
            _ => Err(self.input.error("Expecting variable name")),
        }
    }

    /// Parse `open elem sep elem ... close`
    fn delimited<T>(
        &mut self,
        open: char,
        close: char,
        separator: char,
        mut element: impl FnMut(&mut Self) -> LangResult<T>,
    ) -> LangResult<Vec<T>> {
        let mut items = Vec::new();
        let mut first = true;

        self.skip_punc(open)?;
        while !self.input.eof()? {
            if self.is_punc(close)? {
                break;
            }
            if first {
                first = false;
            } else {
                self.skip_punc(separator)?;
                if self.options.allow_trailing_separator && self.is_punc(close)? {
                    break;
                }
            }
            items.push(element(self)?);
        }
        self.skip_punc(close)?;

        Ok(items)
    }

    // ===== Helper Methods =====

    fn is_punc(&mut self, c: char) -> LangResult<bool> {
        Ok(self.input.peek()?.is_some_and(|token| token.is_punctuation(c)))
    }

    fn is_kw(&mut self, keyword: Keyword) -> LangResult<bool> {
        Ok(self.input.peek()?.is_some_and(|token| token.is_keyword(keyword)))
    }

    fn is_op(&mut self, op: &str) -> LangResult<bool> {
        Ok(self.input.peek()?.is_some_and(|token| token.is_operator(op)))
    }

    fn skip_punc(&mut self, c: char) -> LangResult<()> {
        if self.is_punc(c)? {
            self.input.next_token()?;
            Ok(())
        } else {
            Err(self.input.error(format!("Expecting punctuation: {}", c)))
        }
    }

    fn skip_kw(&mut self, keyword: Keyword) -> LangResult<()> {
        if self.is_kw(keyword)? {
            self.input.next_token()?;
            Ok(())
        } else {
            Err(self.input.error(format!("Expecting keyword: {}", keyword)))
        }
    }

    fn skip_op(&mut self, op: &str) -> LangResult<()> {
        if self.is_op(op)? {
            self.input.next_token()?;
            Ok(())
        } else {
            Err(self.input.error(format!("Expecting operator: {}", op)))
        }
    }

    fn unexpected(&self, token: &Token) -> LangError {
        self.input.error(format!("Unexpected token: {}", token))
    }
}
