use super::{DResult, DistError, Distribution};
use crate::common::{Float, Weight};

fn normalizer(d: &Distribution) -> DResult<Weight> {
    let total = d.total_weight();
    if total > 0.0 && total.is_finite() {
        Ok(total)
    } else {
        Err(DistError::ZeroWeight { total })
    }
}

/// Outcome values paired with their normalized probabilities. A certain
/// distribution yields its constant with probability 1.
fn normalized_outcomes(d: &Distribution) -> DResult<Vec<(Float, Weight)>> {
    if d.is_certain() {
        return Ok(vec![(d.constant(), 1.0)]);
    }
    let total = normalizer(d)?;
    Ok(d.outcomes().map(|(v, w)| (v, w / total)).collect())
}

/// A zeroed weight table of `size` slots, or an error if it cannot be
/// allocated.
fn zeroed_table(size: usize) -> DResult<Vec<Weight>> {
    let mut weights = Vec::new();
    if weights.try_reserve_exact(size).is_err() {
        return Err(DistError::TableTooLarge {
            outcomes: size as Float,
        });
    }
    weights.resize(size, 0.0);
    Ok(weights)
}

/// The distribution of `X1 + X2` for independent `X1` and `X2`.
///
/// When both operands are uncertain the result is their normalized
/// convolution and sums to 1. A single uncertain operand keeps its weights;
/// the other only shifts the constant.
pub fn add(d1: Distribution, d2: Distribution) -> DResult<Distribution> {
    let constant = d1.constant() + d2.constant();
    let weights = match (d1.is_uncertain(), d2.is_uncertain()) {
        (true, true) => {
            let (total1, total2) = (normalizer(&d1)?, normalizer(&d2)?);
            let mut weights = zeroed_table(d1.size() + d2.size())?;
            for (i, &w1) in d1.weights().iter().enumerate() {
                let p1 = w1 / total1;
                for (j, &w2) in d2.weights().iter().enumerate() {
                    // outcome (i + 1) + (j + 1) lives at index i + j + 1
                    weights[i + j + 1] += p1 * (w2 / total2);
                }
            }
            weights
        }
        (true, false) => d1.weights().to_vec(),
        (false, true) => d2.weights().to_vec(),
        (false, false) => Vec::new(),
    };
    Ok(Distribution::from_weights(weights, constant))
}

/// Upper bound on the number of outcomes of `times(d1, d2)`.
pub(crate) fn product_size(d1: &Distribution, d2: &Distribution) -> Float {
    (d1.max_value() * d2.max_value()).trunc()
}

/// The distribution of `X1 * X2` for independent `X1` and `X2`.
///
/// The result has constant 0 and `trunc(max1 * max2)` slots. Every outcome
/// pair adds its joint probability at index `trunc(v1 * v2) - 1`, so
/// non-integral constants are truncated toward zero. Products that land
/// outside the table fail with [`DistError::ProductOutOfRange`]. That
/// includes every product below 1, so scaling a die by a factor below 1
/// (`1d6 * 0.5`) or by a probability is rejected, while `1d6 * 1.5` is not.
///
/// A table too large to allocate fails with [`DistError::TableTooLarge`].
pub fn times(d1: Distribution, d2: Distribution) -> DResult<Distribution> {
    if d1.is_certain() && d2.is_certain() {
        return Ok(Distribution::certain(d1.constant() * d2.constant()));
    }
    if [&d1, &d2]
        .iter()
        .any(|d| d.is_certain() && d.constant() == 0.0)
    {
        return Ok(Distribution::certain(0.0));
    }

    let bound = product_size(&d1, &d2);
    if !(bound < usize::MAX as Float) {
        return Err(DistError::TableTooLarge { outcomes: bound });
    }
    let size = if bound > 0.0 { bound as usize } else { 0 };
    let mut weights = zeroed_table(size)?;
    let rhs = normalized_outcomes(&d2)?;
    for (v1, p1) in normalized_outcomes(&d1)? {
        for &(v2, p2) in &rhs {
            let value = v1 * v2;
            let index = value.trunc() - 1.0;
            if !(index >= 0.0 && index < size as Float) {
                return Err(DistError::ProductOutOfRange { value, size });
            }
            weights[index as usize] += p1 * p2;
        }
    }
    Ok(Distribution::from_weights(weights, 0.0))
}

/// The distribution of the sum of `count` dice with `faces` faces each,
/// built by repeated convolution of a single uniform die.
pub fn uniform_sum(count: usize, faces: usize) -> DResult<Distribution> {
    if count == 0 || faces == 0 {
        return Ok(Distribution::certain(0.0));
    }
    if count.checked_mul(faces).is_none() {
        return Err(DistError::TableTooLarge {
            outcomes: count as Float * faces as Float,
        });
    }
    let die = Distribution::new(faces, 1.0, 0.0);
    let mut acc = die.clone();
    for _ in 1..count {
        acc = add(acc, die.clone())?;
    }
    Ok(acc)
}
