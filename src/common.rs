use std::fmt;
pub use vec1::vec1;

pub type Int = i64;

pub type Float = f64;

/// A relative, not necessarily normalized, weight of one outcome.
pub type Weight = f64;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// The reductions callable by name in an expression.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Function {
    Roll,
    Avg,
    Prob,
}

impl Function {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Roll => "roll",
            Self::Avg => "avg",
            Self::Prob => "prob",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    pub use super::*;
    pub(crate) use crate::ops::{Add, BinaryOperator, Dice, Mul};
    pub(crate) use crate::parse::ast::{self, Node};

    pub trait NodeExt: Sized {
        fn int(x: Int) -> Self;

        fn float(x: Float) -> Self;

        fn parens(x: Self) -> Self;

        fn bin(l: Self, op: impl Into<BinaryOperator>, r: Self) -> Self;

        fn roll(x: Self) -> Self;

        fn avg(x: Self) -> Self;

        fn prob(target: Self, x: Self) -> Self;
    }

    impl NodeExt for ast::Node {
        fn int(x: Int) -> Self {
            Self::LiteralInt(x)
        }

        fn float(x: Float) -> Self {
            Self::LiteralFloat(x)
        }

        fn parens(x: Self) -> Self {
            Self::Parenthetical(Box::new(x))
        }

        fn bin(l: Self, op: impl Into<BinaryOperator>, r: Self) -> Self {
            Self::Binary(Box::new(l), op.into(), Box::new(r))
        }

        fn roll(x: Self) -> Self {
            Self::Call(ast::Call::Roll(Box::new(x)))
        }

        fn avg(x: Self) -> Self {
            Self::Call(ast::Call::Avg(Box::new(x)))
        }

        fn prob(target: Self, x: Self) -> Self {
            Self::Call(ast::Call::Prob(Box::new(target), Box::new(x)))
        }
    }

    /// Asserts two floats agree to within `1e-9`.
    #[track_caller]
    pub fn assert_close(actual: Float, expected: Float) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }
}
