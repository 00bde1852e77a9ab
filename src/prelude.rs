//! Exports the standard boosting algorithms and traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    // Stage-wise least-squares boosting
    StagewiseFitter,
    Snapshot,
    History,
};


pub use crate::weak_learner::{
    // Weak Learner trait
    WeakLearner,

    // Regression tree
    RegressionTree,
    RegressionTreeBuilder,
    RegressionTreeRegressor,
};


pub use crate::regressor::{
    Regressor,
    AdditiveRegressor,
};


pub use crate::sample::{
    Sample,
    SampleReader,
    synthetic,
};


pub use crate::research::{
    Logger,
    SnapshotPlotter,
};


pub use crate::error::{Result, StageError};
