//! This directory provides some features for inspecting a run.
//! - Print the progress and log it to a CSV file
//!   ([`Logger`]).
//! - Render the snapshots to PNG charts
//!   ([`SnapshotPlotter`]).
//!
//! Neither of them is invoked by the fitter itself.

/// Defines a logger that runs a booster round by round.
pub mod logger;

/// Renders samples and snapshots with `plotters`.
pub mod plot;


pub use logger::{Logger, CurrentState};
pub use plot::SnapshotPlotter;
