use crate::common::*;
use crate::ops::BinaryOperator;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub(crate) root: Node,
}

impl Expression {
    pub(crate) fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    LiteralInt(Int),
    LiteralFloat(Float),
    Parenthetical(Box<Node>),
    Binary(Box<Node>, BinaryOperator, Box<Node>),
    Call(Call),
}

impl Node {
    pub(crate) fn new_binary(op: impl Into<BinaryOperator>, lhs: Node, rhs: Node) -> Self {
        Self::Binary(Box::new(lhs), op.into(), Box::new(rhs))
    }

    pub(crate) fn new_parenthetical(x: Node) -> Self {
        Self::Parenthetical(Box::new(x))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LiteralInt(x) => fmt::Display::fmt(x, f),
            Self::LiteralFloat(x) => fmt::Debug::fmt(x, f),
            Self::Parenthetical(x) => write!(f, "({})", x),
            Self::Binary(l, op @ BinaryOperator::Dice(_), r) => write!(f, "{}{}{}", l, op, r),
            Self::Binary(l, op, r) => write!(f, "{} {} {}", l, op, r),
            Self::Call(call) => fmt::Display::fmt(call, f),
        }
    }
}

/// A call to one of the built-in reductions.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Roll(Box<Node>),
    Avg(Box<Node>),
    /// `prob(target, value)`
    Prob(Box<Node>, Box<Node>),
}

impl Call {
    pub fn function(&self) -> Function {
        match self {
            Self::Roll(_) => Function::Roll,
            Self::Avg(_) => Function::Avg,
            Self::Prob(..) => Function::Prob,
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Roll(x) | Self::Avg(x) => write!(f, "{}({})", self.function(), x),
            Self::Prob(target, x) => write!(f, "{}({}, {})", self.function(), target, x),
        }
    }
}
