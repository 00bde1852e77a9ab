//! Synthetic samples for walkthroughs and tests.
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Uniform;

use super::sample_struct::Sample;
use crate::Result;


/// Number of examples in each step of [`staircase`].
pub const STEP_WIDTH: usize = 10;

/// Target ranges `[low, high)` of the steps of [`staircase`].
pub const STEPS: [(f64, f64); 5] = [
    (10.0, 15.0),
    (20.0, 25.0),
    ( 0.0,  5.0),
    (30.0, 32.0),
    (13.0, 17.0),
];


/// Generate a piecewise-constant sample with uniform noise.
/// The feature takes values `0, 1, ..., 49`
/// and the target of the `k`-th block of 10 examples
/// is drawn uniformly from `STEPS[k]`.
/// The same `seed` always yields the same sample.
pub fn staircase(seed: u64) -> Result<Sample> {
    let mut rng = StdRng::seed_from_u64(seed);

    let n_sample = STEP_WIDTH * STEPS.len();
    let x = (0..n_sample).map(|i| i as f64)
        .collect::<Vec<_>>();

    let y = STEPS.iter()
        .flat_map(|&(low, high)| {
            let uni = Uniform::new(low, high);
            (0..STEP_WIDTH).map(|_| uni.sample(&mut rng))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    Sample::new(x, y)
}
