use serde::{
    Serialize,
    Deserialize,
};

use crate::Regressor;
use super::node::*;

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// Regression Tree regressor.
/// This struct is just a wrapper of `Node`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTreeRegressor {
    root: Node,
}


impl RegressionTreeRegressor {
    #[inline]
    pub(super) fn from_root(root: Box<Node>) -> Self {
        Self { root: *root }
    }
}


impl Regressor for RegressionTreeRegressor {
    #[inline]
    fn predict(&self, x: f64) -> f64 {
        self.root.predict(x)
    }
}


impl RegressionTreeRegressor {
    /// Returns the number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.root.leaves()
    }


    /// Returns the depth of the tree.
    /// A tree with a single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the split thresholds in pre-order.
    pub fn thresholds(&self) -> Vec<f64> {
        let mut thresholds = Vec::new();
        self.root.thresholds(&mut thresholds);
        thresholds
    }


    /// Returns `(split point, left value, right value)`
    /// if the tree is a decision stump.
    /// A feature value `x` goes left iff `x < split point`.
    pub fn as_stump(&self) -> Option<(f64, f64, f64)> {
        self.root.as_stump()
    }


    /// Write the current regression tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph RegressionTree {\n")?;


        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}
