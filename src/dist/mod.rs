//! The discrete distribution value type and its algebra.
//!
//! A [`Distribution`] is a constant offset plus a table of relative weights
//! over the contiguous outcomes `constant + 1 ..= constant + size`. An empty
//! table makes the distribution *certain*: it always resolves to `constant`.

mod combine;
mod error;
mod live;
mod reduce;
mod sample;

pub(crate) use combine::product_size;
pub use combine::{add, times, uniform_sum};
pub use error::DistError;
pub use live::{live_count, report_leaks};
pub use reduce::{avg, probability_of, sample};
pub use sample::{sample_index, PrefixSums};

use crate::common::{Float, Weight};
use std::fmt;

pub(crate) type DResult<T> = Result<T, DistError>;

#[derive(Debug, PartialEq)]
pub struct Distribution {
    constant: Float,
    weights: Vec<Weight>,
}

impl Distribution {
    /// Creates a distribution with `size` outcomes, each weighted `init_value`.
    pub fn new(size: usize, init_value: Weight, constant: Float) -> Self {
        Self::from_weights(vec![init_value; size], constant)
    }

    pub fn certain(constant: Float) -> Self {
        Self::from_weights(Vec::new(), constant)
    }

    /// Creates a distribution where `weights[i]` is the weight of the outcome
    /// `constant + i + 1`.
    pub fn from_weights(weights: Vec<Weight>, constant: Float) -> Self {
        live::created();
        tracing::trace!(size = weights.len(), constant, "distribution created");
        Self { constant, weights }
    }

    /// Consumes the distribution. Equivalent to dropping it.
    pub fn release(self) {}

    pub fn constant(&self) -> Float {
        self.constant
    }

    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    pub fn size(&self) -> usize {
        self.weights.len()
    }

    pub fn is_uncertain(&self) -> bool {
        !self.weights.is_empty()
    }

    pub fn is_certain(&self) -> bool {
        self.weights.is_empty()
    }

    /// The largest outcome the distribution can represent.
    pub fn max_value(&self) -> Float {
        self.size() as Float + self.constant
    }

    pub fn total_weight(&self) -> Weight {
        self.weights.iter().sum()
    }

    /// The outcome stored at `index` in the weight table.
    pub fn outcome(&self, index: usize) -> Float {
        self.constant + index as Float + 1.0
    }

    /// Iterates `(outcome, weight)` pairs in ascending outcome order.
    pub fn outcomes(&self) -> impl Iterator<Item = (Float, Weight)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .map(move |(i, &w)| (self.outcome(i), w))
    }

    /// The normalized probability of the outcome at `index`, or `None` if the
    /// index is outside the table or the table carries no weight.
    pub fn probability(&self, index: usize) -> Option<Float> {
        let weight = *self.weights.get(index)?;
        let total = self.total_weight();
        if total > 0.0 {
            Some(weight / total)
        } else {
            None
        }
    }
}

impl Clone for Distribution {
    fn clone(&self) -> Self {
        Self::from_weights(self.weights.clone(), self.constant)
    }
}

impl Drop for Distribution {
    fn drop(&mut self) {
        live::released();
        tracing::trace!(size = self.weights.len(), "distribution released");
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_certain() {
            return write!(f, "constant: {}", self.constant);
        }
        let total = self.total_weight();
        let mut first = true;
        for (value, weight) in self.outcomes() {
            if !first {
                f.write_str("\n")?;
            }
            first = false;
            let p = if total == 0.0 { 0.0 } else { weight / total };
            write!(f, "{}: {:.6}", value, p)?;
        }
        Ok(())
    }
}
