//! Weighted index selection with a finite-resolution random source.
//!
//! A single draw scaled by the cumulative weights cannot express outcome
//! probabilities below one part in the source's range. Instead the table is
//! bisected repeatedly at its weighted midpoint and each draw only decides
//! between two halves, so every comparison involves a single ratio.

use super::{DResult, DistError};
use crate::common::{Float, Weight};
use crate::roll::Roller;

/// Size of the range a [`Roller`] draws from (`u32::MAX + 1`).
const RESOLUTION: Float = 4_294_967_296.0;

/// Running sums of a weight table; `sums[k]` is the weight of `weights[..k]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixSums(Vec<Weight>);

impl PrefixSums {
    pub fn new(weights: &[Weight]) -> Self {
        let mut sums = Vec::with_capacity(weights.len() + 1);
        let mut acc = 0.0;
        sums.push(acc);
        for &w in weights {
            acc += w;
            sums.push(acc);
        }
        Self(sums)
    }

    pub fn total(&self) -> Weight {
        self.0[self.0.len() - 1]
    }

    /// Weight of the inclusive index range `[start, end]`.
    pub fn section(&self, start: usize, end: usize) -> Weight {
        self.0[end + 1] - self.0[start]
    }

    /// Splits `[start, end]` (with `start < end`) into `[start, divider]` and
    /// `[divider + 1, end]`.
    ///
    /// `divider` is the first index whose running sum exceeds half of
    /// `section_weight`. When that leaves the second half empty, the boundary
    /// element moves into it.
    pub fn divider(&self, start: usize, end: usize, section_weight: Weight) -> usize {
        let base = self.0[start];
        let half = 0.5 * section_weight;
        let offset = self.0[start + 1..=end + 1].partition_point(|&s| s - base <= half);
        let divider = (start + offset).min(end);
        if divider == end {
            end - 1
        } else {
            divider
        }
    }
}

/// Draws an index of `weights` with probability proportional to its weight.
pub fn sample_index<R: Roller + ?Sized>(weights: &[Weight], roller: &mut R) -> DResult<usize> {
    let sums = PrefixSums::new(weights);
    let total = sums.total();
    if !(total > 0.0 && total.is_finite()) {
        return Err(DistError::ZeroWeight { total });
    }

    let (mut start, mut end) = (0, weights.len() - 1);
    let mut section_weight = total;
    while start < end {
        let divider = sums.divider(start, end, section_weight);
        let weight1 = sums.section(start, divider);
        let threshold = weight1 / section_weight * RESOLUTION;
        if Float::from(roller.draw()) < threshold {
            end = divider;
            section_weight = weight1;
        } else {
            start = divider + 1;
            section_weight = sums.section(start, end);
        }
    }
    Ok(start)
}
