use super::{ast::*, lexer::*};
use crate::common::*;
use crate::ops::{Add, Dice, Mul};
use logos_iter::LogosIter;
use std::fmt;
use std::ops::Range;

type PResult<T = Node> = Result<T, ParseError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    UnexpectedToken {
        found: Option<TokenKind>,
        expected: NonEmpty<TokenKind>,
    },
    UnexpectedString {
        expected: NonEmpty<TokenKind>,
    },
    InvalidNumber,
    TrailingInput(TokenKind),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken {
                found: Some(found),
                expected,
            } => {
                write!(f, "unexpected token: found {}, expected ", found)?;
                fmt_expected(expected, f)
            }
            Self::UnexpectedToken {
                found: None,
                expected,
            } => {
                write!(f, "unexpected end of input, expected ")?;
                fmt_expected(expected, f)
            }
            Self::UnexpectedString { expected } => {
                write!(f, "expected ")?;
                fmt_expected(expected, f)
            }
            Self::InvalidNumber => write!(f, "number out of range"),
            Self::TrailingInput(found) => {
                write!(f, "unexpected {} after the end of the expression", found)
            }
        }
    }
}

fn fmt_expected(expected: &[TokenKind], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expected {
        [] => Ok(()),
        [a] => f.write_str(a.to_str()),
        [a, b] => write!(f, "{} or {}", a.to_str(), b.to_str()),
        [rest @ .., last] => {
            for exp in rest {
                write!(f, "{}, ", exp.to_str())?;
            }
            write!(f, "or {}", last.to_str())
        }
    }
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { lexer: lexer(s) }
    }

    pub fn parse(mut self) -> Result<Expression, ParseError> {
        let root = self.parse_node()?;
        match self.advance() {
            None => Ok(Expression::new(root)),
            Some(TokenKind::Error) => self.error(ParseErrorKind::UnexpectedString {
                expected: vec1![TokenKind::Plus, TokenKind::Star, TokenKind::Dice],
            }),
            Some(found) => self.error(ParseErrorKind::TrailingInput(found)),
        }
    }

    fn advance(&mut self) -> Option<TokenKind> {
        self.lexer.next()
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn consume(&mut self, expected: TokenKind) -> PResult<()> {
        if self.matches(expected) {
            self.advance();
            Ok(())
        } else {
            self.unexpected_token(vec1![expected])
        }
    }

    fn consume_as<T: std::str::FromStr>(&mut self, expected: TokenKind) -> PResult<T> {
        self.consume(expected)?;
        match self.lexer.slice().parse() {
            Ok(x) => Ok(x),
            Err(_) => self.error(ParseErrorKind::InvalidNumber),
        }
    }

    fn error<T>(&mut self, kind: ParseErrorKind) -> PResult<T> {
        Err(ParseError {
            kind,
            span: self.lexer.span(),
            slice: self.lexer.slice().to_string(),
        })
    }

    fn unexpected_token<T>(&mut self, expected: NonEmpty<TokenKind>) -> PResult<T> {
        let found = self.advance();
        if matches!(found, Some(TokenKind::Error)) {
            self.error(ParseErrorKind::UnexpectedString { expected })
        } else {
            self.error(ParseErrorKind::UnexpectedToken { found, expected })
        }
    }

    fn parse_node(&mut self) -> PResult {
        self.parse_addition()
    }

    fn parse_addition(&mut self) -> PResult {
        let mut lhs = self.parse_multiplication()?;

        while self.matches(TokenKind::Plus) {
            self.advance();
            let rhs = self.parse_multiplication()?;

            lhs = Node::new_binary(Add, lhs, rhs);
        }

        Ok(lhs)
    }

    fn parse_multiplication(&mut self) -> PResult {
        let mut lhs = self.parse_dice()?;

        while self.matches(TokenKind::Star) {
            self.advance();
            let rhs = self.parse_dice()?;

            lhs = Node::new_binary(Mul, lhs, rhs);
        }

        Ok(lhs)
    }

    /// `NdM`, `dM` (one die) or a plain term, left associative.
    fn parse_dice(&mut self) -> PResult {
        let mut lhs = if self.matches(TokenKind::Dice) {
            self.advance();
            let rhs = self.parse_term()?;
            Node::new_binary(Dice, Node::LiteralInt(1), rhs)
        } else {
            self.parse_term()?
        };

        while self.matches(TokenKind::Dice) {
            self.advance();
            let rhs = self.parse_term()?;

            lhs = Node::new_binary(Dice, lhs, rhs);
        }

        Ok(lhs)
    }

    fn parse_term(&mut self) -> PResult {
        match self.lexer.peek().copied() {
            Some(TokenKind::Integer) => self.consume_as(TokenKind::Integer).map(Node::LiteralInt),
            Some(TokenKind::Decimal) => {
                self.consume_as(TokenKind::Decimal).map(Node::LiteralFloat)
            }
            Some(TokenKind::LeftParen) => self.parse_parens(),
            peeked => match peeked.and_then(|kind| kind.as_function()) {
                Some(func) => self.parse_call(func),
                None => self.unexpected_token(vec1![
                    TokenKind::Integer,
                    TokenKind::Decimal,
                    TokenKind::LeftParen,
                    TokenKind::Roll,
                    TokenKind::Avg,
                    TokenKind::Prob,
                ]),
            },
        }
    }

    fn parse_parens(&mut self) -> PResult {
        self.consume(TokenKind::LeftParen)?;
        let inner = self.parse_node()?;
        self.consume(TokenKind::RightParen)?;
        Ok(Node::new_parenthetical(inner))
    }

    fn parse_call(&mut self, func: Function) -> PResult {
        self.advance();
        self.consume(TokenKind::LeftParen)?;
        let first = Box::new(self.parse_node()?);
        let call = match func {
            Function::Roll => Call::Roll(first),
            Function::Avg => Call::Avg(first),
            Function::Prob => {
                self.consume(TokenKind::Comma)?;
                Call::Prob(first, Box::new(self.parse_node()?))
            }
        };
        self.consume(TokenKind::RightParen)?;
        Ok(Node::Call(call))
    }
}
