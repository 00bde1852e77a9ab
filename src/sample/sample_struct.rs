use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};

use crate::common::checker;
use crate::common::loss_functions;
use crate::{Result, StageError};


/// Default name of the feature column.
pub const DEFAULT_FEATURE_NAME: &str = "x";
/// Default name of the target column.
pub const DEFAULT_TARGET_NAME: &str = "y";


/// A pair of a feature vector `x` and a target vector `y`
/// paired by index.
/// Once constructed, a `Sample` never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    feature_name: String,
    target_name: String,
    feature: Vec<f64>,
    target: Vec<f64>,
}


impl Sample {
    /// Construct a new instance of `Sample` from `x` and `y`.
    /// Returns `StageError::InvalidInput` if
    /// `x` or `y` is empty, their lengths differ,
    /// or some value is not finite.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        checker::check_sample(&x[..], &y[..])?;

        Ok(Self {
            feature_name: DEFAULT_FEATURE_NAME.to_string(),
            target_name: DEFAULT_TARGET_NAME.to_string(),
            feature: x,
            target: y,
        })
    }


    /// Rename the feature and target columns.
    pub fn with_names<S, T>(mut self, feature: S, target: T) -> Self
        where S: Into<String>,
              T: Into<String>,
    {
        self.feature_name = feature.into();
        self.target_name = target.into();
        self
    }


    /// Read a CSV format file to [`Sample`] type.
    /// See [`SampleReader`](crate::SampleReader) for the column selection.
    pub(crate) fn from_csv<P>(
        file: P,
        has_header: bool,
        feature: Option<&str>,
        target: Option<&str>,
    ) -> Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, has_header, feature, target)
    }


    /// Read a comma-separated table from [`BufReader`].
    ///
    /// If `has_header` is `true`, `feature` and `target` select
    /// the columns by name and default to the first and second column.
    /// Otherwise, the first column is the feature
    /// and the second column is the target.
    pub fn from_reader<R>(
        reader: BufReader<R>,
        has_header: bool,
        feature: Option<&str>,
        target: Option<&str>,
    ) -> Result<Self>
        where R: Read,
    {
        let mut lines = reader.lines().enumerate();

        let mut feature_name = DEFAULT_FEATURE_NAME.to_string();
        let mut target_name = DEFAULT_TARGET_NAME.to_string();
        let (mut fpos, mut tpos) = (0_usize, 1_usize);

        if has_header {
            let header = match lines.next() {
                Some((_, line)) => line?,
                None => {
                    return Err(StageError::invalid("the file is empty"));
                },
            };
            let names = header.split(',')
                .map(|name| name.trim().to_string())
                .collect::<Vec<_>>();

            fpos = column_position(&names[..], feature, 0)?;
            tpos = column_position(&names[..], target, 1)?;
            feature_name = names[fpos].clone();
            target_name = names[tpos].clone();
        }

        let mut x = Vec::new();
        let mut y = Vec::new();
        for (i, line) in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let cells = line.split(',')
                .map(|cell| cell.trim())
                .collect::<Vec<_>>();
            let need = fpos.max(tpos) + 1;
            if cells.len() < need {
                return Err(StageError::invalid(format!(
                    "line {}: expected at least {need} columns, got {}",
                    i + 1, cells.len(),
                )));
            }
            x.push(parse_cell(cells[fpos], i + 1)?);
            y.push(parse_cell(cells[tpos], i + 1)?);
        }

        Ok(Self::new(x, y)?.with_names(feature_name, target_name))
    }


    /// Returns the pair `(# of examples, # of features)`.
    /// The number of features is always `1`.
    pub fn shape(&self) -> (usize, usize) {
        (self.feature.len(), 1)
    }


    /// Returns the slice of feature values.
    pub fn feature(&self) -> &[f64] {
        &self.feature[..]
    }


    /// Returns the slice of target values.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns the name of the feature column.
    pub fn feature_name(&self) -> &str {
        &self.feature_name
    }


    /// Returns the name of the target column.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }


    /// Returns the mean of the target values.
    pub fn target_mean(&self) -> f64 {
        loss_functions::mean(self.target.iter().copied())
    }
}


fn column_position(names: &[String], name: Option<&str>, default: usize)
    -> Result<usize>
{
    match name {
        Some(name) => {
            names.iter()
                .position(|n| n == name)
                .ok_or_else(|| StageError::invalid(format!(
                    "the column \"{name}\" does not exist"
                )))
        },
        None if default < names.len() => Ok(default),
        None => Err(StageError::invalid(format!(
            "the header has {} columns, expected at least 2",
            names.len(),
        ))),
    }
}


fn parse_cell(cell: &str, line: usize) -> Result<f64> {
    cell.parse::<f64>()
        .map_err(|_| StageError::Parse { line, value: cell.to_string() })
}
