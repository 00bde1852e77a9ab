//! Defines the inner representation
//! of the Regression Tree class.
use serde::{Serialize, Deserialize};

use crate::Regressor;
use crate::weak_learner::common::{
    type_and_struct::*,
    split_rule::*,
};

use std::fmt;


/// A node of a fitted regression tree.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub(crate) enum Node {
    /// A node that have two childrens.
    Branch {
        splitter:   Splitter,
        left:       Box<Node>,
        right:      Box<Node>,
        prediction: Prediction<f64>,
    },


    /// A node that have no child.
    Leaf {
        prediction: Prediction<f64>,
    },
}


impl Node {
    /// Construct a branch node from the arguments.
    #[inline]
    pub(super) fn branch(
        splitter:   Splitter,
        left:       Box<Node>,
        right:      Box<Node>,
        prediction: Prediction<f64>,
    ) -> Self
    {
        Self::Branch { splitter, left, right, prediction, }
    }


    /// Construct a leaf node from the given arguments.
    #[inline]
    pub(super) fn leaf(prediction: Prediction<f64>) -> Self {
        Self::Leaf { prediction, }
    }


    /// Returns the number of leaves of this sub-tree.
    pub(super) fn leaves(&self) -> usize {
        match self {
            Self::Branch { left, right, .. } => left.leaves() + right.leaves(),
            Self::Leaf { .. } => 1_usize,
        }
    }


    /// Returns the depth of this sub-tree.
    /// A single leaf has depth `0`.
    pub(super) fn depth(&self) -> usize {
        match self {
            Self::Branch { left, right, .. } => {
                1 + left.depth().max(right.depth())
            },
            Self::Leaf { .. } => 0_usize,
        }
    }


    /// Returns the thresholds of this sub-tree in pre-order.
    pub(super) fn thresholds(&self, acc: &mut Vec<f64>) {
        if let Self::Branch { splitter, left, right, .. } = self {
            acc.push(splitter.threshold.0);
            left.thresholds(acc);
            right.thresholds(acc);
        }
    }


    /// Returns `(threshold, left value, right value)`
    /// if this node is a branch with two leaves.
    pub(super) fn as_stump(&self) -> Option<(f64, f64, f64)> {
        match self {
            Self::Branch { splitter, left, right, .. } => {
                match (left.as_ref(), right.as_ref()) {
                    (Self::Leaf { prediction: l }, Self::Leaf { prediction: r }) => {
                        Some((splitter.threshold.0, l.0, r.0))
                    },
                    _ => None,
                }
            },
            Self::Leaf { .. } => None,
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Branch { splitter, left, right, .. } => {
                let splitter = format!(
                    "\tnode_{id} [ label = \"x < {thr:.2} ?\" ];\n",
                    thr = splitter.threshold.0,
                );

                let left_id = id + 1;
                let (     left,  right_id) = left.to_dot_info(left_id);
                let (mut right, return_id) = right.to_dot_info(right_id);

                let mut info = left;
                info.push(splitter);
                info.append(&mut right);

                let left_edge = format!(
                    "\tnode_{id} -- node_{left_id} [ label = \"Yes\" ];\n",
                );
                info.push(left_edge);
                let right_edge = format!(
                    "\tnode_{id} -- node_{right_id} [ label = \"No\" ];\n",
                );
                info.push(right_edge);

                (info, return_id)
            },
            Self::Leaf { prediction } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{:.4}\", shape = box ];\n",
                    prediction.0,
                );

                (vec![info], id + 1)
            },
        }
    }
}


impl Regressor for Node {
    #[inline]
    fn predict(&self, x: f64) -> f64 {
        match self {
            Self::Branch { splitter, left, right, .. } => {
                match splitter.split(x) {
                    LR::Left  => left.predict(x),
                    LR::Right => right.predict(x),
                }
            },
            Self::Leaf { prediction } => prediction.0,
        }
    }
}


impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch { splitter, left, right, prediction } => {
                f.debug_struct("Branch")
                    .field("threshold", &splitter.threshold.0)
                    .field("prediction", &prediction.0)
                    .field("left", &left)
                    .field("right", &right)
                    .finish()
            },
            Self::Leaf { prediction } => {
                f.debug_struct("Leaf")
                    .field("prediction", &prediction.0)
                    .finish()
            },
        }
    }
}
