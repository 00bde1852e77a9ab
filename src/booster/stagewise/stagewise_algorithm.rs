//! Provides the stage-wise additive fitter ([`StagewiseFitter`]).
use rayon::prelude::*;

use crate::common::checker;
use crate::common::constants::DEFAULT_ROUNDS;
use crate::{
    Booster,
    WeakLearner,
    Regressor,
    Sample,
    Result,
    RegressionTreeBuilder,
    RegressionTreeRegressor,
};
use super::snapshot::{Snapshot, History};

use std::mem;
use std::ops::ControlFlow;


/// Stage-wise least-squares boosting,
/// the special case of the Gradient Boosting Machine in the paper:
///
/// [Jerome H. Friedman, 2001 - Greedy Function Approximation: A Gradient Boosting Machine](https://projecteuclid.org/journals/annals-of-statistics/volume-29/issue-5/Greedy-function-approximation-A-gradient-boostingmachine/10.1214/aos/1013203451.full)
///
/// The fitter starts from the constant model `mean(y)`.
/// In each round, the weak learner is fitted to the residual
/// `y - prediction`, and its whole output is added to the prediction.
/// There is no shrinkage, no early stopping.
///
/// # Example
/// ```no_run
/// use stageboost::prelude::*;
///
/// let x = (0..10).map(|i| i as f64).collect::<Vec<_>>();
/// let y = vec![0.0, 0.0, 0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 10.0];
/// let sample = Sample::new(x, y).unwrap();
///
/// let tree = RegressionTreeBuilder::new()
///     .max_depth(1)
///     .build()
///     .unwrap();
///
/// let history = StagewiseFitter::init(&sample)
///     .rounds(1)
///     .run(&tree)
///     .unwrap();
///
/// let last = history.last().unwrap();
/// assert_eq!(last.prediction(), sample.target());
/// ```
pub struct StagewiseFitter<'a, H> {
    // Training data
    sample: &'a Sample,


    // Number of rounds after the mean model
    rounds: usize,


    // `mean(y)`
    intercept: f64,


    // A prediction vector at a state.
    predictions: Vec<f64>,


    // `y - predictions`
    residuals: Vec<f64>,


    snapshots: Vec<Snapshot<H>>,
}


impl<'a, H> StagewiseFitter<'a, H> {
    /// Initialize the `StagewiseFitter`.
    /// The number of rounds is set to `DEFAULT_ROUNDS == 30`.
    pub fn init(sample: &'a Sample) -> Self {
        Self {
            sample,
            rounds: DEFAULT_ROUNDS,
            intercept: 0.0,
            predictions: Vec::new(),
            residuals: Vec::new(),
            snapshots: Vec::new(),
        }
    }


    /// Set the number of boosting rounds.
    /// `run` fails if `rounds == 0`.
    pub fn rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }


    /// Returns the configured number of rounds.
    pub fn max_rounds(&self) -> usize {
        self.rounds
    }


    /// Returns the prediction at the current state.
    pub fn current_prediction(&self) -> &[f64] {
        &self.predictions[..]
    }


    /// Returns the residual at the current state.
    pub fn current_residual(&self) -> &[f64] {
        &self.residuals[..]
    }


    /// Returns the snapshots recorded so far.
    pub fn snapshots(&self) -> &[Snapshot<H>] {
        &self.snapshots[..]
    }


    /// Set the state to the constant mean model.
    fn reset(&mut self) {
        let n_sample = self.sample.shape().0;
        self.intercept = self.sample.target_mean();
        self.predictions = vec![self.intercept; n_sample];
        self.residuals = residuals(self.sample.target(), &self.predictions);

        self.snapshots = Vec::with_capacity(self.rounds + 1);
        self.snapshots.push(Snapshot::new(
            0, None, self.predictions.clone(), self.residuals.clone(),
        ));
    }
}


impl<H> Booster<H> for StagewiseFitter<'_, H>
    where H: Regressor + Clone,
{
    type Output = History<H>;


    fn name(&self) -> &str {
        "Stage-wise Gradient Boosting"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, n_feature) = self.sample.shape();
        let info = Vec::from([
            ("# of examples", format!("{n_sample}")),
            ("# of features", format!("{n_feature}")),
            ("Rounds", format!("{}", self.rounds)),
            ("Loss", "Squared loss".to_string()),
            ("Initial model", format!("mean = {:.4}", self.sample.target_mean())),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) -> Result<()> {
        checker::check_rounds(self.rounds)?;
        self.reset();
        Ok(())
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = H>,
    {
        if self.rounds < iteration {
            return ControlFlow::Break(self.rounds);
        }


        // Get a new hypothesis
        let h = weak_learner.produce(self.sample, &self.residuals[..]);
        let output = h.predict_all(self.sample.feature());


        self.predictions.par_iter_mut()
            .zip(output)
            .for_each(|(p, q)| { *p += q; });

        self.residuals.par_iter_mut()
            .zip(self.sample.target())
            .zip(&self.predictions[..])
            .for_each(|((r, y), p)| { *r = y - p; });


        self.snapshots.push(Snapshot::new(
            iteration,
            Some(h),
            self.predictions.clone(),
            self.residuals.clone(),
        ));

        ControlFlow::Continue(())
    }


    fn postprocess(&mut self) -> Self::Output {
        let snapshots = mem::take(&mut self.snapshots);
        History::new(self.intercept, snapshots)
    }
}


#[inline]
fn residuals(target: &[f64], predictions: &[f64]) -> Vec<f64> {
    target.iter()
        .zip(predictions)
        .map(|(y, p)| y - p)
        .collect()
}


/// Returns the snapshot of round `0`:
/// the prediction `mean(y)` broadcast to every example
/// and the residual `y - mean(y)`.
///
/// Returns `StageError::InvalidInput` if
/// `x` or `y` is empty or their lengths differ.
pub fn initialize(x: &[f64], y: &[f64])
    -> Result<Snapshot<RegressionTreeRegressor>>
{
    let sample = Sample::new(x.to_vec(), y.to_vec())?;

    let mean = sample.target_mean();
    let predictions = vec![mean; x.len()];
    let residual = residuals(y, &predictions[..]);

    Ok(Snapshot::new(0, None, predictions, residual))
}


/// Fits a regression tree of depth at most `max_depth`
/// to `(x, residual)`
/// and returns it together with its output on `x`.
///
/// Returns `StageError::InvalidInput` if
/// the inputs are empty, their lengths differ, or `max_depth == 0`.
pub fn step(x: &[f64], residual: &[f64], max_depth: usize)
    -> Result<(RegressionTreeRegressor, Vec<f64>)>
{
    let tree = RegressionTreeBuilder::new()
        .max_depth(max_depth)
        .build()?;
    let sample = Sample::new(x.to_vec(), residual.to_vec())?;

    let h = tree.produce(&sample, sample.target());
    let output = h.predict_all(x);
    Ok((h, output))
}


/// Runs `rounds` rounds of stage-wise boosting
/// with regression trees of depth at most `max_depth`.
/// The returned history holds `rounds + 1` snapshots,
/// the first of which is the mean model.
///
/// Every input is validated before any computation.
pub fn run(x: &[f64], y: &[f64], rounds: usize, max_depth: usize)
    -> Result<History<RegressionTreeRegressor>>
{
    checker::check_rounds(rounds)?;
    let tree = RegressionTreeBuilder::new()
        .max_depth(max_depth)
        .build()?;
    let sample = Sample::new(x.to_vec(), y.to_vec())?;

    StagewiseFitter::init(&sample)
        .rounds(rounds)
        .run(&tree)
}
