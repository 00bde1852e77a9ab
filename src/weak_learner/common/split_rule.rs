//! This file defines split rules for regression tree.
use serde::{Serialize, Deserialize};

use crate::weak_learner::type_and_struct::*;


/// The output of the function `split` of `Splitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LR {
    Left,
    Right,
}


/// A threshold on the feature value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Splitter {
    pub(crate) threshold: Threshold,
}


impl Splitter {
    #[inline]
    pub(crate) fn new(threshold: Threshold) -> Self {
        Self { threshold }
    }


    /// Defines the splitting.
    /// Values strictly below the threshold go to the left.
    #[inline]
    pub(crate) fn split(&self, value: f64) -> LR {
        if value < self.threshold.0 {
            LR::Left
        } else {
            LR::Right
        }
    }
}
