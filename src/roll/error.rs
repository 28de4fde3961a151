use crate::common::Float;
use crate::dist::DistError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RollError {
    #[error("dice counts and face counts must be non-negative integers, found {0}")]
    InvalidDice(Float),
    #[error("too many dice rolled: {count} (limit {max})")]
    TooManyDice { count: usize, max: usize },
    #[error("distribution too large: {outcomes} outcomes (limit {max})")]
    TooManyOutcomes { outcomes: Float, max: usize },
    #[error("{0}")]
    Distribution(#[from] DistError),
}
