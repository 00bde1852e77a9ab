#![warn(missing_docs)]

//!
//! A crate that walks through gradient boosting step by step.
//!
//! The fitter starts from the constant model `mean(y)`
//! and, in each round, fits a shallow regression tree
//! to the current residual `y - prediction`
//! and adds its output to the prediction.
//! Every round leaves a [`Snapshot`] of the prediction and the residual,
//! so that one can inspect or plot how the additive model evolves.
//!
//! - [`StagewiseFitter`] runs the boosting rounds
//!     through the [`Booster`] trait.
//! - [`RegressionTree`] is the weak learner,
//!     a depth-bounded piecewise-constant regressor.
//! - [`research::Logger`] prints the progress and writes a CSV log.
//! - [`research::SnapshotPlotter`] renders the snapshots as PNG charts.
//!
//! The free functions [`initialize`], [`step`] and [`run`]
//! expose the procedure on plain slices.

pub mod error;
pub mod common;
pub mod sample;
pub mod regressor;
pub mod weak_learner;
pub mod booster;
pub mod research;
pub mod prelude;


pub use error::{Result, StageError};

pub use sample::{Sample, SampleReader};

pub use regressor::{Regressor, AdditiveRegressor};

pub use weak_learner::{
    WeakLearner,
    RegressionTree,
    RegressionTreeBuilder,
    RegressionTreeRegressor,
};

pub use booster::{
    Booster,
    StagewiseFitter,
    Snapshot,
    History,
};

pub use booster::stagewise::{initialize, step, run};
