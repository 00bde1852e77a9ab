//! Loss values of a prediction vector against the targets.

/// Squared loss of a single prediction.
#[inline]
pub fn squared_loss(target: f64, prediction: f64) -> f64 {
    (target - prediction).powi(2)
}


/// Absolute loss of a single prediction.
#[inline]
pub fn absolute_loss(target: f64, prediction: f64) -> f64 {
    (target - prediction).abs()
}


/// Arithmetic mean of `values`.
/// Falls back to summing `v / n` when the plain sum overflows,
/// so the mean of finite values stays finite.
pub fn mean<I>(values: I) -> f64
    where I: Iterator<Item = f64> + Clone,
{
    let n_sample = values.clone().count() as f64;
    let sum = values.clone().sum::<f64>();
    if sum.is_finite() {
        return sum / n_sample;
    }
    values.map(|v| v / n_sample).sum::<f64>()
}


/// Sum of squared residuals.
/// The sum runs sequentially so that the value is reproducible.
pub fn sum_of_squares(residuals: &[f64]) -> f64 {
    residuals.iter()
        .map(|r| r.powi(2))
        .sum::<f64>()
}


/// Mean squared error of `predictions` against `targets`.
pub fn mean_squared_error(targets: &[f64], predictions: &[f64]) -> f64 {
    let n_sample = targets.len() as f64;
    targets.iter()
        .zip(predictions)
        .map(|(&y, &p)| squared_loss(y, p))
        .sum::<f64>()
        / n_sample
}


/// Mean absolute error of `predictions` against `targets`.
pub fn mean_absolute_error(targets: &[f64], predictions: &[f64]) -> f64 {
    let n_sample = targets.len() as f64;
    targets.iter()
        .zip(predictions)
        .map(|(&y, &p)| absolute_loss(y, p))
        .sum::<f64>()
        / n_sample
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_large_values_is_finite() {
        let values = [1e308, 1e308];
        assert_eq!(mean(values.iter().copied()), 1e308);

        let values = [1.0, 2.0, 4.0, 9.0];
        assert_eq!(mean(values.iter().copied()), 4.0);
    }
}
