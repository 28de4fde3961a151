use super::{sample_index, DResult, DistError, Distribution};
use crate::common::Float;
use crate::roll::Roller;

/// The expectation of `d` as a certain distribution.
///
/// Index `i` contributes the outcome `constant + i + 1`, the same mapping
/// sampling and [`probability_of`] use.
pub fn avg(d: Distribution) -> DResult<Distribution> {
    if d.is_certain() {
        return Ok(d);
    }
    let total = d.total_weight();
    if !(total > 0.0 && total.is_finite()) {
        return Err(DistError::ZeroWeight { total });
    }
    let sum: Float = d.outcomes().map(|(v, w)| v * w).sum();
    Ok(Distribution::certain(sum / total))
}

/// Draws one outcome of `d`. A certain distribution yields its constant.
pub fn sample<R: Roller + ?Sized>(d: &Distribution, roller: &mut R) -> DResult<Float> {
    if d.is_certain() {
        return Ok(d.constant());
    }
    let index = sample_index(d.weights(), roller)?;
    Ok(d.outcome(index))
}

/// The probability that `d` resolves to exactly `value`.
///
/// Values between outcomes or outside `(constant, max_value]` have
/// probability 0.
pub fn probability_of(value: Float, d: &Distribution) -> DResult<Float> {
    if d.is_certain() {
        return Ok(if value == d.constant() { 1.0 } else { 0.0 });
    }
    let offset = value - d.constant();
    if !(offset > 0.0 && value <= d.max_value()) || offset.fract() != 0.0 {
        return Ok(0.0);
    }
    let total = d.total_weight();
    if !(total > 0.0 && total.is_finite()) {
        return Err(DistError::ZeroWeight { total });
    }
    Ok(d.weights()[offset as usize - 1] / total)
}
