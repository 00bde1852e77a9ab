use crate::common::checker;
use crate::common::constants::DEFAULT_MAX_DEPTH;
use crate::{Result, RegressionTree};


/// A struct that builds `RegressionTree`.
/// `RegressionTreeBuilder` keeps parameters for constructing `RegressionTree`.
///
/// # Example
///
/// ```no_run
/// use stageboost::prelude::*;
///
/// let weak_learner = RegressionTreeBuilder::new()
///     .max_depth(2)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct RegressionTreeBuilder {
    max_depth: usize,
}


impl RegressionTreeBuilder {
    /// Construct a new instance of `RegressionTreeBuilder`.
    /// By default,
    /// `RegressionTreeBuilder` sets the parameters as follows;
    /// ```text
    /// max_depth: DEFAULT_MAX_DEPTH == 1,
    /// ```
    pub fn new() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH, }
    }


    /// Specify the maximal depth of the tree.
    /// Default maximal depth is `1`.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }


    /// Build a `RegressionTree`.
    /// This method consumes `self`.
    /// Returns `StageError::InvalidInput` if the maximal depth is `0`.
    pub fn build(self) -> Result<RegressionTree> {
        checker::check_max_depth(self.max_depth)?;
        Ok(RegressionTree::from_components(self.max_depth))
    }
}


impl Default for RegressionTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
