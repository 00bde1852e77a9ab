use plotters::prelude::*;

use crate::common::constants::{
    DEFAULT_PLOT_SIZE,
    DEFAULT_PLOT_PREFIX,
};
use crate::{
    Sample,
    Snapshot,
    History,
    Result,
    StageError,
};

use std::ops::Range;
use std::path::{Path, PathBuf};


/// Margin added to both ends of the axes.
const AXIS_MARGIN: f64 = 1.0;
const POINT_SIZE: i32 = 3;


/// Renders a sample and its snapshots to PNG files.
///
/// For a prefix `GradientBoosting`, the file names are
/// - `GradientBoosting-000-data.png` for the raw sample,
/// - `GradientBoosting-{round:03}-model.png` for the prediction, and
/// - `GradientBoosting-{round:03}-residual.png` for the residual.
///
/// # Example
/// ```no_run
/// use stageboost::prelude::*;
///
/// let sample = synthetic::staircase(0).unwrap();
/// let history = stageboost::run(
///     sample.feature(), sample.target(), 30, 1
/// ).unwrap();
///
/// let files = SnapshotPlotter::new("plots")
///     .plot_history(&sample, &history)
///     .unwrap();
/// println!("wrote {} files", files.len());
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotPlotter {
    dir: PathBuf,
    prefix: String,
    size: (u32, u32),
}


/// Contents of a single chart.
struct Figure {
    title: String,
    y_label: String,
    scatter: Vec<(f64, f64)>,
    color: RGBColor,
    line: Option<Vec<(f64, f64)>>,
    y_range: Range<f64>,
}


impl SnapshotPlotter {
    /// Construct a new instance that writes files into `dir`.
    /// The directory must exist.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            prefix: DEFAULT_PLOT_PREFIX.to_string(),
            size: DEFAULT_PLOT_SIZE,
        }
    }


    /// Set the prefix of the file names.
    /// Default is `GradientBoosting`.
    pub fn prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = prefix.into();
        self
    }


    /// Set the size of the charts in pixels.
    /// Default is `800 x 600`.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }


    /// Returns the path of the chart of the raw sample.
    pub fn data_path(&self) -> PathBuf {
        self.dir.join(format!("{}-000-data.png", self.prefix))
    }


    /// Returns the path of the model chart of round `round`.
    pub fn model_path(&self, round: usize) -> PathBuf {
        self.dir.join(format!("{}-{round:03}-model.png", self.prefix))
    }


    /// Returns the path of the residual chart of round `round`.
    pub fn residual_path(&self, round: usize) -> PathBuf {
        self.dir.join(format!("{}-{round:03}-residual.png", self.prefix))
    }


    /// Draw the scatter plot of the sample.
    pub fn plot_data(&self, sample: &Sample) -> Result<PathBuf> {
        let figure = Figure {
            title: "Original Data".to_string(),
            y_label: sample.target_name().to_string(),
            scatter: points(sample.feature(), sample.target()),
            color: BLUE,
            line: None,
            y_range: padded_range(sample.target().iter().copied()),
        };

        let path = self.data_path();
        self.render(&path, sample, &figure)?;
        Ok(path)
    }


    /// Draw the sample together with the prediction of `snapshot`.
    pub fn plot_model<H>(&self, sample: &Sample, snapshot: &Snapshot<H>)
        -> Result<PathBuf>
    {
        let round = snapshot.round();
        let title = if snapshot.is_initial() {
            format!("Iteration #{round} - Mean")
        } else {
            format!("Iteration #{round} - Model")
        };
        let values = sample.target().iter()
            .chain(snapshot.prediction())
            .copied();

        let mut line = points(sample.feature(), snapshot.prediction());
        line.sort_by(|a, b| a.0.total_cmp(&b.0));

        let figure = Figure {
            title,
            y_label: sample.target_name().to_string(),
            scatter: points(sample.feature(), sample.target()),
            color: BLUE,
            line: Some(line),
            y_range: padded_range(values),
        };

        let path = self.model_path(round);
        self.render(&path, sample, &figure)?;
        Ok(path)
    }


    /// Draw the residual of `snapshot`.
    /// The vertical axis is symmetric around `0`.
    pub fn plot_residual<H>(&self, sample: &Sample, snapshot: &Snapshot<H>)
        -> Result<PathBuf>
    {
        let round = snapshot.round();
        let bound = snapshot.residual().iter()
            .fold(0.0_f64, |acc, r| acc.max(r.abs()))
            + AXIS_MARGIN;

        let figure = Figure {
            title: format!("Iteration #{round} - Residual"),
            y_label: "residual".to_string(),
            scatter: points(sample.feature(), snapshot.residual()),
            color: GREEN,
            line: None,
            y_range: -bound..bound,
        };

        let path = self.residual_path(round);
        self.render(&path, sample, &figure)?;
        Ok(path)
    }


    /// Draw the sample, then the model and the residual of every round.
    /// Returns the written paths in drawing order.
    pub fn plot_history<H>(&self, sample: &Sample, history: &History<H>)
        -> Result<Vec<PathBuf>>
    {
        let mut paths = Vec::with_capacity(2 * history.len() + 1);
        paths.push(self.plot_data(sample)?);
        for snapshot in history {
            paths.push(self.plot_model(sample, snapshot)?);
            paths.push(self.plot_residual(sample, snapshot)?);
        }
        Ok(paths)
    }


    fn render(&self, path: &Path, sample: &Sample, figure: &Figure)
        -> Result<()>
    {
        let x_range = padded_range(sample.feature().iter().copied());
        draw(path, self.size, sample.feature_name(), x_range, figure)
            .map_err(|e| StageError::Plot(format!("{}: {e}", path.display())))
    }
}


fn draw(
    path: &Path,
    size: (u32, u32),
    x_label: &str,
    x_range: Range<f64>,
    figure: &Figure,
) -> std::result::Result<(), Box<dyn std::error::Error>>
{
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&figure.title, ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, figure.y_range.clone())?;

    chart.configure_mesh()
        .x_desc(x_label)
        .y_desc(figure.y_label.as_str())
        .draw()?;

    chart.draw_series(
        figure.scatter.iter()
            .map(|&(x, y)| Circle::new((x, y), POINT_SIZE, figure.color.filled()))
    )?;

    if let Some(line) = &figure.line {
        chart.draw_series(
            LineSeries::new(line.iter().copied(), RED.stroke_width(2))
        )?;
    }

    root.present()?;
    Ok(())
}


fn points(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter()
        .copied()
        .zip(ys.iter().copied())
        .collect()
}


/// Returns `[min - 1, max + 1)` of `values`.
fn padded_range<I>(values: I) -> Range<f64>
    where I: Iterator<Item = f64>,
{
    let (min, max) = values.fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), v| (lo.min(v), hi.max(v)),
    );
    if min > max {
        return -AXIS_MARGIN..AXIS_MARGIN;
    }
    (min - AXIS_MARGIN)..(max + AXIS_MARGIN)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_the_round() {
        let plotter = SnapshotPlotter::new("out").prefix("GB");
        assert_eq!(plotter.data_path(), Path::new("out/GB-000-data.png"));
        assert_eq!(plotter.model_path(7), Path::new("out/GB-007-model.png"));
        assert_eq!(
            plotter.residual_path(12),
            Path::new("out/GB-012-residual.png"),
        );
    }

    #[test]
    fn range_is_padded() {
        let range = padded_range([3.0, -2.0, 5.0].into_iter());
        assert_eq!(range, -3.0..6.0);

        let range = padded_range(std::iter::empty());
        assert_eq!(range, -1.0..1.0);
    }
}
