//! The core library for the weak learner in the boosting protocol.
//!
//! In stage-wise boosting with the squared loss,
//! the weak learner receives the current residual
//! `y - prediction` (the negative gradient of the loss)
//! and returns a hypothesis that approximates it.
use crate::Sample;


/// A trait that defines the behavor of a weak learner.
/// You only need to implement `name` and `produce`.
pub trait WeakLearner {
    /// The hypothesis type produced by this weak learner.
    type Hypothesis;


    /// Returns the name of the weak learner.
    fn name(&self) -> &str;


    /// Returns the parameters of the weak learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Fits a hypothesis to `residual`.
    /// `residual[i]` is paired with `sample.feature()[i]`,
    /// so `residual.len()` must equal the number of examples.
    fn produce(&self, sample: &Sample, residual: &[f64])
        -> Self::Hypothesis;
}
