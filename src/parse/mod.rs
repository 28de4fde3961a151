pub mod ast;
mod lexer;
mod parser;
pub mod visit;

pub use lexer::TokenKind;
pub use parser::{ParseError, ParseErrorKind};

/// Parses a whole expression. Input left over after a complete expression is
/// an error.
pub fn parse(s: &str) -> Result<ast::Expression, ParseError> {
    parser::Parser::new(s).parse()
}
