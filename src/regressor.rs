//! Defines the behavior of a fitted regression function.
//!
//! The weak learner returns a [`Regressor`] at each round,
//! and the boosting procedure combines them into
//! an [`AdditiveRegressor`].
use serde::{Serialize, Deserialize};


/// A trait that defines the behavor of regressor.
/// You only need to implement `predict` method.
pub trait Regressor {
    /// Predicts the target value of a feature value `x`.
    fn predict(&self, x: f64) -> f64;


    /// Predicts the target values of `xs`.
    fn predict_all(&self, xs: &[f64]) -> Vec<f64>
    {
        xs.iter()
            .map(|&x| self.predict(x))
            .collect::<Vec<_>>()
    }
}


/// A struct that the boosting algorithms in this library return.
/// The prediction is the constant `intercept`
/// plus the sum of the stage predictions.
/// You can read/write this struct by `Serde` trait.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AdditiveRegressor<R> {
    /// The initial constant model.
    pub intercept: f64,
    /// Regressors in the order they were fitted.
    pub stages: Vec<R>,
}


impl<R> AdditiveRegressor<R> {
    /// Construct a new instance from its parts.
    pub fn new(intercept: f64, stages: Vec<R>) -> Self {
        Self { intercept, stages }
    }


    /// Returns the number of stages.
    pub fn n_stages(&self) -> usize {
        self.stages.len()
    }
}


impl<R> Regressor for AdditiveRegressor<R>
    where R: Regressor,
{
    // Accumulates left to right, matching the fitting loop.
    fn predict(&self, x: f64) -> f64 {
        self.stages.iter()
            .fold(self.intercept, |acc, h| acc + h.predict(x))
    }
}
