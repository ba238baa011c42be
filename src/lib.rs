//! # lambda-lang
//!
//! Front end for a small expression-oriented language where everything,
//! including blocks and conditionals, is an expression:
//!
//! ```text
//! fib = lambda (n) if n < 2 then n else fib(n - 1) + fib(n - 2);
//! ```
//!
//! ## Architecture
//!
//! Three layers, each pulling from the one below on demand:
//! - `lexer::input`: character source with line/column tracking
//! - `lexer::scanner`: tokens with a single token of lookahead
//! - `parser`: recursive descent with precedence climbing, producing an [`Ast`]
//!
//! Errors from any layer are fatal and carry the source position; see [`error`].

pub mod error;
pub mod lexer;
pub mod options;
pub mod parser;

// Re-export commonly used types
pub use error::{Diagnostic, LangError, LangResult, SourceLocation};
pub use lexer::{InputStream, Keyword, Lexer, Position, Token};
pub use options::Options;
pub use parser::{Ast, Parser};

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse a whole program with default options.
///
/// Returns the root `Program` node, or the first lexical or syntax error.
pub fn parse(source: &str) -> LangResult<Ast> {
    parse_with(source, &Options::default())
}

/// Parse a whole program with the given options
pub fn parse_with(source: &str, options: &Options) -> LangResult<Ast> {
    let lexer = Lexer::with_options(source, options);
    Parser::with_options(lexer, options.clone()).parse_toplevel()
}

/// Tokenize a source text with default options
pub fn tokenize(source: &str) -> LangResult<Vec<Token>> {
    Lexer::new(source, None).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_parse_pipeline() {
        let ast = parse("print(10);").unwrap();
        assert_eq!(
            ast,
            Ast::Program {
                body: vec![Ast::call(Ast::variable("print"), vec![Ast::number(10.0)])]
            }
        );
    }

    #[test]
    fn test_tokenize_pipeline() {
        let tokens = tokenize("x <= 1.2.3").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Identifier("x".to_string()),
                Token::Operator("<=".to_string()),
                Token::Number(1.2),
                Token::Number(0.3),
            ]
        );
    }

    #[test]
    fn test_parse_with_filename() {
        let options = Options::new().with_filename("main.lambda");
        let err = parse_with("x = (1", &options).unwrap_err();
        assert_eq!(err.to_string(), "Expecting punctuation: ) (main.lambda:1:6)");
    }

    #[test]
    fn test_independent_parses_across_threads() {
        let sources = ["a = 1", "f(x, y)", "if a then b else c", "{ 1; 2 }"];
        let handles: Vec<_> = sources
            .iter()
            .map(|source| {
                let source = source.to_string();
                std::thread::spawn(move || parse(&source))
            })
            .collect();

        for (handle, source) in handles.into_iter().zip(sources) {
            assert_eq!(handle.join().unwrap().unwrap(), parse(source).unwrap());
        }
    }

    #[test]
    fn test_error_diagnostic() {
        let source = "x = 1;\ny = @;";
        let err = parse(source).unwrap_err();
        let rendered = Diagnostic::with_source(err, source).to_string();
        assert!(rendered.contains("Can't handle character: @"));
        assert!(rendered.contains("y = @;"));
    }
}
