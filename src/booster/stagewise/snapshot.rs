//! Records of the boosting rounds.
use serde::{Serialize, Deserialize};

use crate::common::loss_functions::sum_of_squares;
use crate::{AdditiveRegressor, Result};

use std::path::Path;
use std::fs::File;
use std::io::{BufWriter, Write};


/// The state of the additive model right after a round.
///
/// Rounds are numbered from `0`.
/// The snapshot of round `0` is the constant mean model
/// and holds no learner.
/// The snapshot of round `t >= 1` holds the learner fitted at round `t`
/// together with the prediction and residual after adding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<H> {
    round: usize,
    learner: Option<H>,
    prediction: Vec<f64>,
    residual: Vec<f64>,
}


impl<H> Snapshot<H> {
    #[inline]
    pub(crate) fn new(
        round: usize,
        learner: Option<H>,
        prediction: Vec<f64>,
        residual: Vec<f64>,
    ) -> Self
    {
        Self { round, learner, prediction, residual, }
    }


    /// Returns the round index.
    #[inline]
    pub fn round(&self) -> usize {
        self.round
    }


    /// Returns the learner fitted at this round.
    /// `None` for round `0`.
    #[inline]
    pub fn learner(&self) -> Option<&H> {
        self.learner.as_ref()
    }


    /// Returns the prediction of the additive model after this round.
    #[inline]
    pub fn prediction(&self) -> &[f64] {
        &self.prediction[..]
    }


    /// Returns `y - prediction` after this round.
    #[inline]
    pub fn residual(&self) -> &[f64] {
        &self.residual[..]
    }


    /// Returns `true` if this is the constant mean model.
    #[inline]
    pub fn is_initial(&self) -> bool {
        self.round == 0
    }


    /// Returns the sum of squared residuals.
    pub fn squared_loss(&self) -> f64 {
        sum_of_squares(&self.residual[..])
    }


    /// Returns the mean squared residual.
    pub fn mean_squared_error(&self) -> f64 {
        self.squared_loss() / self.residual.len() as f64
    }
}


/// The sequence of snapshots produced by a run.
/// `snapshots()[t]` is the snapshot of round `t`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History<H> {
    intercept: f64,
    snapshots: Vec<Snapshot<H>>,
}


impl<H> History<H> {
    #[inline]
    pub(crate) fn new(intercept: f64, snapshots: Vec<Snapshot<H>>) -> Self {
        Self { intercept, snapshots }
    }


    /// Returns the constant of the initial model, i.e., `mean(y)`.
    #[inline]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }


    /// Returns all the snapshots, including round `0`.
    #[inline]
    pub fn snapshots(&self) -> &[Snapshot<H>] {
        &self.snapshots[..]
    }


    /// Returns the number of snapshots.
    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }


    /// Returns `true` if no snapshot is recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }


    /// Returns the number of boosting rounds,
    /// which excludes the mean model.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }


    /// Returns the snapshot of round `round`.
    #[inline]
    pub fn get(&self, round: usize) -> Option<&Snapshot<H>> {
        self.snapshots.get(round)
    }


    /// Returns the snapshot of the last round.
    #[inline]
    pub fn last(&self) -> Option<&Snapshot<H>> {
        self.snapshots.last()
    }


    /// Iterates over the snapshots in round order.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot<H>> {
        self.snapshots.iter()
    }


    /// Iterates over the fitted learners in round order.
    pub fn learners(&self) -> impl Iterator<Item = &H> + '_ {
        self.snapshots.iter()
            .filter_map(|snapshot| snapshot.learner())
    }


    /// Returns the sum of squared residuals of each round.
    pub fn squared_losses(&self) -> Vec<f64> {
        self.snapshots.iter()
            .map(|snapshot| snapshot.squared_loss())
            .collect()
    }
}


impl<H> History<H>
    where H: Clone,
{
    /// Returns the additive model after the last round.
    /// On the training features,
    /// its predictions coincide with the last snapshot.
    pub fn final_model(&self) -> AdditiveRegressor<H> {
        let stages = self.learners()
            .cloned()
            .collect::<Vec<_>>();
        AdditiveRegressor::new(self.intercept, stages)
    }
}


impl<H> History<H>
    where H: Serialize,
{
    /// Write the snapshots to `path` as JSON.
    pub fn to_json_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}


impl<'a, H> IntoIterator for &'a History<H> {
    type Item = &'a Snapshot<H>;
    type IntoIter = std::slice::Iter<'a, Snapshot<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
