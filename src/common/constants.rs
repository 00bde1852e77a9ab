/// The number of boosting rounds set as default.
/// The walkthrough runs `30` rounds after the mean model.
pub const DEFAULT_ROUNDS:    usize = 30;
/// The maximal depth of a weak learner set as default.
/// Depth `1` yields a decision stump.
pub const DEFAULT_MAX_DEPTH: usize = 1;

/// Default size of a rendered chart in pixels.
pub const DEFAULT_PLOT_SIZE: (u32, u32) = (800, 600);
/// Default prefix of the rendered file names.
pub const DEFAULT_PLOT_PREFIX: &str = "GradientBoosting";

/// Default number of rounds between two `[LOG]` lines.
pub const DEFAULT_PRINT_EVERY: usize = 1;
