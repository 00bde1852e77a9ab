use colored::Colorize;

use crate::common::checker;
use crate::common::loss_functions::{
    mean_squared_error,
    mean_absolute_error,
};
use crate::{
    Sample,
    Booster,
    WeakLearner,
    StagewiseFitter,
    Result,
};

use std::fs::File;
use std::io::prelude::*;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;
use std::ops::ControlFlow;

use crate::common::constants::DEFAULT_PRINT_EVERY;

const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Round,TrainL2,TrainL1,Time\n";


/// Implementing this trait allows you to use [`Logger`] to
/// log algorithm's behavor.
pub trait CurrentState {
    /// Returns the prediction on the training examples
    /// at current state.
    fn current_prediction(&self) -> &[f64];
}


impl<H> CurrentState for StagewiseFitter<'_, H> {
    fn current_prediction(&self) -> &[f64] {
        StagewiseFitter::current_prediction(self)
    }
}


/// Struct `Logger` runs a booster round by round and
/// logs the training losses and running time of each round.
///
/// Each round (including the mean model at round `0`)
/// is written to a CSV file with header `Round,TrainL2,TrainL1,Time`,
/// where `TrainL2` is the mean squared error,
/// `TrainL1` is the mean absolute error,
/// and `Time` is the cumulative boosting time in milliseconds.
///
/// # Example
/// ```no_run
/// use stageboost::prelude::*;
///
/// let sample = synthetic::staircase(0).unwrap();
/// let tree = RegressionTreeBuilder::new()
///     .max_depth(1)
///     .build()
///     .unwrap();
/// let fitter = StagewiseFitter::init(&sample)
///     .rounds(30);
///
/// let history = Logger::new(fitter, tree, &sample)
///     .print_every(5)
///     .run("log.csv")
///     .unwrap();
/// ```
pub struct Logger<'a, B, W> {
    booster: B,
    weak_learner: W,
    sample: &'a Sample,
    round: usize,
}


impl<'a, B, W> Logger<'a, B, W> {
    /// Create a new instance of `Logger`.
    /// `sample` must be the training sample of `booster`.
    pub fn new(booster: B, weak_learner: W, sample: &'a Sample) -> Self {
        Self {
            booster,
            weak_learner,
            sample,
            round: DEFAULT_PRINT_EVERY,
        }
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every round.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round.max(1);
        self
    }
}


impl<H, B, W, O> Logger<'_, B, W>
    where B: Booster<H, Output = O> + CurrentState,
          W: WeakLearner<Hypothesis = H>,
{
    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Booster".bold(),
            self.booster.name().bold().green(),
        );
        if let Some(info) = self.booster.info() {
            println!("{}", info_lines(info));
        }

        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Weak Learner".bold(),
            self.weak_learner.name().bold().green(),
        );
        if let Some(info) = self.weak_learner.info() {
            println!("{}", info_lines(info));
        }
        println!("{:=^FULL_WIDTH$}\n", "".bold());
    }


    /// Run the given boosting algorithm with logging.
    /// Note that this method is almost the same as `Booster::run`.
    /// This method measures running time per iteration.
    ///
    /// The booster is validated before `filename` is created,
    /// so a failing run leaves no log behind.
    /// Returns `StageError::InvalidInput` if the booster's prediction
    /// does not cover the sample given to [`Logger::new`].
    pub fn run<P: AsRef<Path>>(&mut self, filename: P) -> Result<O> {
        // ---------------------------------------------------------------------
        // Pre-processing
        self.booster.preprocess()?;

        let sample = self.sample;
        let target = sample.target();
        checker::check_length(
            self.booster.current_prediction(), target.len(), "prediction"
        )?;


        // Open file
        let mut file = BufWriter::new(File::create(filename)?);

        // Write header to the file
        file.write_all(HEADER.as_bytes())?;


        let verbose = self.round != usize::MAX;
        if verbose {
            self.print_stats();
            print_log_header();
        }

        let (l2, l1) = losses(target, self.booster.current_prediction());
        writeln!(file, "0,{l2},{l1},0")?;
        if verbose {
            print_log_line("[LOG]", 0, l2, l1, 0);
        }


        // Cumulative time
        let mut time_acc = 0;
        let mut last = (0, l2, l1);
        let mut written = Ok(());


        // ---------------------------------------------------------------------
        // Boosting step
        let _ = (1..).try_for_each(|iter| {
            // Start measuring time
            let now = Instant::now();

            let flow = self.booster.boost(&self.weak_learner, iter);

            // Stop measuring and convert `Duration` to Milliseconds.
            time_acc += now.elapsed().as_millis();

            // The booster has stopped without a new round.
            if flow.is_break() {
                return flow;
            }


            let (l2, l1) = losses(target, self.booster.current_prediction());
            last = (iter, l2, l1);

            // Write the results to `file`.
            if let Err(e) = writeln!(file, "{iter},{l2},{l1},{time_acc}") {
                written = Err(e);
                return ControlFlow::Break(iter);
            }

            if verbose && iter % self.round == 0 {
                print_log_line("[LOG]", iter, l2, l1, time_acc);
            }
            flow
        });
        written?;
        file.flush()?;


        if verbose {
            let (iter, l2, l1) = last;
            print_log_line("[FIN]", iter, l2, l1, time_acc);
            println!();
        }

        Ok(self.booster.postprocess())
    }
}


fn losses(target: &[f64], predictions: &[f64]) -> (f64, f64) {
    let l2 = mean_squared_error(target, predictions);
    let l1 = mean_absolute_error(target, predictions);
    (l2, l1)
}


fn info_lines(info: Vec<(&str, String)>) -> String {
    info.into_iter()
        .map(|(key, val)| {
            format!(
                "    + {:<STAT_WIDTH$}\t{:>width$}",
                key,
                val.bold().yellow(),
                width = STAT_WIDTH - 8
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}


#[inline(always)]
fn print_log_header() {
    println!(
        "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
        "".bold().red(),
        "TRAIN".bold().blue(),
        "TRAIN".bold().green(),
        "ACC.".bold().cyan(),
    );
    println!(
        "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
        "ROUND".bold().red(),
        "L2".bold().blue(),
        "L1".bold().green(),
        "TIME".bold().cyan(),
    );
}


fn print_log_line(tag: &str, iter: usize, l2: f64, l1: f64, time: u128) {
    let tag = if tag == "[FIN]" {
        tag.bold().bright_green()
    } else {
        tag.bold().magenta()
    };
    println!(
        "{} {}\t\t{}\t{}\t{}",
        tag,
        format!("{:>WIDTH$}", iter).red(),
        format!("{:>WIDTH$.PREC_WIDTH$}", l2).blue(),
        format!("{:>WIDTH$.PREC_WIDTH$}", l1).green(),
        time_format(time).bold().cyan(),
    );
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_is_formatted_by_its_unit() {
        assert_eq!(time_format(42), "  0.042s");
        assert_eq!(time_format(3_005), " 03.005s");
        assert_eq!(time_format(125_000), " 02m 05s");
        assert_eq!(time_format(3_660_000), " 01h 01m");
    }
}
