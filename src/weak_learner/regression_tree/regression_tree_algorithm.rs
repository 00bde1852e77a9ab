use crate::{Sample, WeakLearner};
use crate::common::loss_functions::mean;

use crate::weak_learner::common::{
    type_and_struct::*,
    split_rule::*,
};

use super::{
    node::*,
    regression_tree_regressor::RegressionTreeRegressor,
};

use std::fmt;


/// Relative margin within which two split scores are treated as equal.
/// Scores that agree in exact arithmetic can differ by a few ulps
/// once each division is rounded.
const TIE_TOLERANCE: f64 = 4.0 * f64::EPSILON;


/// `RegressionTree` is the factory that generates
/// a `RegressionTreeRegressor` for a given residual vector.
///
/// Each branch is chosen by the exact greedy search
/// over the sorted feature values:
/// the threshold minimizes the sum of squared deviations
/// of the residuals within the two resulting partitions.
/// Each leaf predicts the mean residual of its partition.
///
/// # Example
/// ```no_run
/// use stageboost::prelude::*;
///
/// let sample = Sample::new(
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 1.0, 3.0, 3.0],
/// ).unwrap();
///
/// // Get an instance of regression tree weak learner.
/// // In this example,
/// // the output hypothesis is at most depth 1 (a decision stump).
/// let tree = RegressionTreeBuilder::new()
///     .max_depth(1)
///     .build()
///     .unwrap();
///
/// let f = tree.produce(&sample, sample.target());
/// let predictions = f.predict_all(sample.feature());
/// assert_eq!(predictions, vec![1.0, 1.0, 3.0, 3.0]);
/// ```
#[derive(Debug, Clone)]
pub struct RegressionTree {
    // The maximal depth of the output trees
    max_depth: usize,
}


impl RegressionTree {
    #[inline]
    pub(super) fn from_components(max_depth: usize) -> Self {
        Self { max_depth }
    }


    /// Returns the maximal depth of the output trees.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }


    /// `indices` must be sorted by the feature value.
    fn grow(
        &self,
        x: &[f64],
        residual: &[f64],
        indices: Vec<usize>,
        max_depth: usize,
    ) -> Box<Node>
    {
        // Compute the best prediction that minimizes the training error
        // on this node.
        let (pred, loss) = prediction_and_loss(&indices[..], residual);


        // If the residuals on this node are constant,
        // or the depth budget is exhausted, construct a leaf node.
        if loss == 0.0 || max_depth < 1 {
            return Box::new(Node::leaf(pred));
        }


        // Find the best splitting rule.
        let threshold = match best_split(x, residual, &indices[..]) {
            Some(threshold) => threshold,
            None => { return Box::new(Node::leaf(pred)); },
        };
        let rule = Splitter::new(threshold);


        // Split the train data for left/right childrens.
        // The sorted order is preserved in both children.
        let mut lindices = Vec::new();
        let mut rindices = Vec::new();
        for i in indices.into_iter() {
            match rule.split(x[i]) {
                LR::Left  => { lindices.push(i); },
                LR::Right => { rindices.push(i); },
            }
        }


        // If the split has no meaning, construct a leaf node.
        if lindices.is_empty() || rindices.is_empty() {
            return Box::new(Node::leaf(pred));
        }


        let ltree = self.grow(x, residual, lindices, max_depth - 1);
        let rtree = self.grow(x, residual, rindices, max_depth - 1);

        Box::new(Node::branch(rule, ltree, rtree, pred))
    }
}


impl WeakLearner for RegressionTree {
    type Hypothesis = RegressionTreeRegressor;


    fn name(&self) -> &str {
        "Regression Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Max depth", format!("{}", self.max_depth)),
            ("Split criterion", "Squared deviation".to_string()),
        ]);
        Some(info)
    }


    fn produce(&self, sample: &Sample, residual: &[f64])
        -> Self::Hypothesis
    {
        let x = sample.feature();

        let mut indices = (0..x.len()).collect::<Vec<usize>>();
        // Stable, so equal feature values keep their row order.
        indices.sort_by(|&i, &j| x[i].total_cmp(&x[j]));


        let root = self.grow(x, residual, indices, self.max_depth);

        RegressionTreeRegressor::from_root(root)
    }
}


impl fmt::Display for RegressionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Regression Tree Weak Learner\n\n\
            - Max depth: {}\n\
            - Split criterion: squared deviation\n\
            ----------\
            ",
            self.max_depth,
        )
    }
}


/// Returns the threshold that maximizes
/// `S_l^2 / n_l + S_r^2 / n_r`,
/// where `S_l, S_r` are the residual sums of both sides.
/// This is equivalent to minimizing the sum of squared deviations.
/// Only the midpoints between distinct consecutive values are candidates,
/// and ties are broken by the first candidate in sorted order.
/// Scores within `TIE_TOLERANCE` of the best one count as ties.
/// Returns `None` if every example has the same feature value.
fn best_split(x: &[f64], residual: &[f64], indices: &[usize])
    -> Option<Threshold>
{
    let n_sample = indices.len();

    let mut right_sum = indices.iter()
        .map(|&i| residual[i])
        .sum::<f64>();
    let mut left_sum = 0.0;


    let mut best_score = f64::MIN;
    let mut best_threshold = None;


    for (k, pair) in indices.windows(2).enumerate() {
        let (i, j) = (pair[0], pair[1]);
        left_sum  += residual[i];
        right_sum -= residual[i];

        // No threshold separates equal feature values.
        if x[i] == x[j] { continue; }


        let n_left  = (k + 1) as f64;
        let n_right = (n_sample - k - 1) as f64;
        let score = left_sum.powi(2) / n_left + right_sum.powi(2) / n_right;
        let improves = best_threshold.is_none()
            || score > best_score + TIE_TOLERANCE * best_score.abs();
        if improves {
            best_score = score;
            best_threshold = Some(Threshold::from(0.5 * (x[i] + x[j])));
        }
    }

    best_threshold
}


/// Returns the mean residual on `indices`
/// and the sum of squared deviations from it.
fn prediction_and_loss(indices: &[usize], residual: &[f64])
    -> (Prediction<f64>, LossValue)
{
    let mean = mean(indices.iter().map(|&i| residual[i]));

    let loss = indices.iter()
        .map(|&i| (residual[i] - mean).powi(2))
        .sum::<f64>();

    (mean.into(), loss.into())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_at_the_step() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let r = [-1.0, -1.0, -1.0, 2.0, 2.0, 2.0];
        let idx = [0, 1, 2, 3, 4, 5];

        let threshold = best_split(&x, &r, &idx).unwrap();
        assert_eq!(threshold.0, 2.5);
    }

    #[test]
    fn ties_go_to_the_first_candidate() {
        // Cutting after the first or before the last example
        // reduces the same amount of squared deviation.
        let x = [0.0, 1.0, 2.0];
        let r = [1.0, 0.0, -1.0];
        let idx = [0, 1, 2];

        let threshold = best_split(&x, &r, &idx).unwrap();
        assert_eq!(threshold.0, 0.5);
    }

    #[test]
    fn rounded_ties_go_to_the_first_candidate() {
        // Both the first and the last cut score 496 / 3 exactly,
        // but the two divisions round differently.
        let x = [0.0, 1.0, 2.0, 3.0];
        let r = [10.0, 4.0, 8.0, 2.0];
        let idx = [0, 1, 2, 3];

        let threshold = best_split(&x, &r, &idx).unwrap();
        assert_eq!(threshold.0, 0.5);

        let r = [-5.0, 0.0, 1.0, 6.0];
        let threshold = best_split(&x, &r, &idx).unwrap();
        assert_eq!(threshold.0, 0.5);
    }


    #[test]
    fn equal_values_are_never_separated() {
        let x = [1.0, 1.0, 1.0];
        let r = [1.0, 5.0, -3.0];
        let idx = [0, 1, 2];
        assert!(best_split(&x, &r, &idx).is_none());

        let x = [0.0, 0.0, 1.0, 1.0];
        let r = [4.0, 0.0, 0.0, 0.0];
        let idx = [0, 1, 2, 3];
        let threshold = best_split(&x, &r, &idx).unwrap();
        assert_eq!(threshold.0, 0.5);
    }

    #[test]
    fn leaf_value_is_the_mean() {
        let r = [1.0, 2.0, 3.0, 6.0];
        let (pred, loss) = prediction_and_loss(&[0, 1, 2, 3], &r);
        assert_eq!(pred.0, 3.0);
        assert_eq!(loss.0, 4.0 + 1.0 + 0.0 + 9.0);
    }
}
