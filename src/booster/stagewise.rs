//! Defines the stage-wise additive fitter.
//! See the paper
//! "Greedy Function Approximation: A Gradient Boosting Machine"
//! by Jerome H. Friedman, 2001.
pub mod stagewise_algorithm;
pub mod snapshot;

pub use stagewise_algorithm::{
    StagewiseFitter,
    initialize,
    step,
    run,
};
pub use snapshot::{
    Snapshot,
    History,
};
