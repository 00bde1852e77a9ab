//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data
use crate::{Result, StageError};


/// Check whether the pair `(x, y)` forms a valid training sample.
#[inline(always)]
pub(crate) fn check_sample(x: &[f64], y: &[f64]) -> Result<()> {
    // `x` and `y` must have the same length greater than `0`.
    if x.is_empty() || y.is_empty() {
        return Err(StageError::invalid(format!(
            "sample must be non-empty. got {} features and {} targets",
            x.len(), y.len(),
        )));
    }
    check_length(y, x.len(), "target")?;

    if let Some(i) = x.iter().position(|v| !v.is_finite()) {
        return Err(StageError::invalid(format!(
            "feature value at row {i} is not finite ({})", x[i],
        )));
    }
    if let Some(i) = y.iter().position(|v| !v.is_finite()) {
        return Err(StageError::invalid(format!(
            "target value at row {i} is not finite ({})", y[i],
        )));
    }
    Ok(())
}


/// Check whether `slice` has exactly `n_sample` entries.
#[inline(always)]
pub(crate) fn check_length(slice: &[f64], n_sample: usize, what: &str)
    -> Result<()>
{
    if slice.len() != n_sample {
        return Err(StageError::invalid(format!(
            "{what} length mismatch. expected {n_sample}, got {}",
            slice.len(),
        )));
    }
    Ok(())
}


/// Check the number of boosting rounds.
#[inline(always)]
pub(crate) fn check_rounds(rounds: usize) -> Result<()> {
    if rounds == 0 {
        return Err(StageError::invalid(
            "the number of rounds must be positive. got 0"
        ));
    }
    Ok(())
}


/// Check the maximal depth of a weak learner.
#[inline(always)]
pub(crate) fn check_max_depth(depth: usize) -> Result<()> {
    if depth < 1 {
        return Err(StageError::invalid(format!(
            "max depth must be at least 1. got {depth}"
        )));
    }
    Ok(())
}
