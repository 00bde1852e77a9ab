//! Gradient boosting by hand on a noisy staircase.
//!
//! Fits 30 decision stumps, one per round, to the residual of the
//! previous rounds, and renders the model and residual of every round.
//!
//! ```text
//! cargo run --example walkthrough -- [output directory] [seed]
//! ```
use stageboost::prelude::*;

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;


const ROUNDS: usize = 30;
const MAX_DEPTH: usize = 1;


fn main() {
    if let Err(e) = walkthrough() {
        eprintln!("walkthrough failed: {e}");
        process::exit(1);
    }
}


fn walkthrough() -> Result<()> {
    let mut args = env::args().skip(1);
    let dir = PathBuf::from(args.next().unwrap_or_else(|| "plots".into()));
    let seed = match args.next() {
        Some(seed) => seed.parse::<u64>()
            .map_err(|_| StageError::InvalidInput(format!("bad seed `{seed}`")))?,
        None => 0,
    };
    fs::create_dir_all(&dir)?;


    let sample = synthetic::staircase(seed)?;

    let tree = RegressionTreeBuilder::new()
        .max_depth(MAX_DEPTH)
        .build()?;
    let fitter = StagewiseFitter::init(&sample)
        .rounds(ROUNDS);

    let history = Logger::new(fitter, tree, &sample)
        .print_every(5)
        .run(dir.join("GradientBoosting-log.csv"))?;


    let files = SnapshotPlotter::new(&dir)
        .plot_history(&sample, &history)?;
    history.to_json_file(dir.join("GradientBoosting-history.json"))?;

    if let Some(stump) = history.learners().next() {
        stump.to_dot_file(dir.join("GradientBoosting-001-tree.dot"))?;
    }

    println!(
        "rendered {} charts into {}", files.len(), dir.display(),
    );
    Ok(())
}
