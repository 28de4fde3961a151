use crate::common::Function;
use logos::Logos;
use std::fmt;

pub(crate) type Lexer<'a> = logos_iter::PeekableLexer<'a, logos::Lexer<'a, TokenKind>, TokenKind>;

pub(crate) fn lexer(s: &str) -> Lexer {
    logos_iter::LogosIter::peekable_lexer(TokenKind::lexer(s))
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9]+")]
    Integer,
    #[regex(r"([0-9]+\.[0-9]*)|(\.[0-9]+)")]
    Decimal,

    #[token("d")]
    #[token("D")]
    Dice,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token(",")]
    Comma,

    #[token("+")]
    Plus,
    #[token("*")]
    Star,

    #[token("roll")]
    Roll,
    #[token("avg")]
    Avg,
    #[token("prob")]
    Prob,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    pub fn to_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Integer => "<integer>",
            Decimal => "<decimal>",
            Dice => "'d'",
            LeftParen => "'('",
            RightParen => "')'",
            Comma => "','",
            Plus => "'+'",
            Star => "'*'",
            Roll => "'roll'",
            Avg => "'avg'",
            Prob => "'prob'",
            Error => "<error>",
        }
    }

    pub fn as_function(&self) -> Option<Function> {
        Some(match self {
            Self::Roll => Function::Roll,
            Self::Avg => Function::Avg,
            Self::Prob => Function::Prob,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}
