use crate::common::Float;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistError {
    #[error("distribution has no weight to normalize or sample from (total weight {total})")]
    ZeroWeight { total: Float },
    #[error("product outcome {value} does not fit a table of {size} outcomes")]
    ProductOutOfRange { value: Float, size: usize },
    #[error("a table of {outcomes} outcomes cannot be allocated")]
    TableTooLarge { outcomes: Float },
}
