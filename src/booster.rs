//! Provides the stage-wise boosting procedure.

mod core;

/// Stage-wise least-squares boosting.
pub mod stagewise;


/// Booster trait
pub use self::core::Booster;

pub use self::stagewise::{
    StagewiseFitter,
    Snapshot,
    History,
};
