mod ctx;
mod error;
pub(crate) mod roller;

use crate::common::Float;
use crate::dist::Distribution;
use std::fmt;

pub type RResult<T> = Result<T, RollError>;

pub use ctx::RollContext;
pub use error::RollError;
pub use roller::Roller;

/// A fully evaluated expression: its distribution and the value it resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub distribution: Distribution,
    pub value: Float,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
