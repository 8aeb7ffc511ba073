use crate::{FeatureImportance, Regressor, Sample};
use super::node::*;

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// Regression Tree regressor.
/// This struct is a wrapper of `Node`
/// that also keeps the impurity decrease of each feature.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionTreeRegressor {
    root: Box<Node>,
    importances: Vec<f64>,
}


impl RegressionTreeRegressor {
    #[inline]
    pub(super) fn new(root: Box<Node>, importances: Vec<f64>) -> Self {
        Self { root, importances }
    }


    /// Returns the number of leaves.
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }


    /// Returns the depth of the tree. A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        self.root.depth()
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


impl Regressor for RegressionTreeRegressor {
    #[inline]
    fn predict(&self, sample: &Sample, row: usize) -> f64 {
        self.root.predict(sample, row)
    }
}


impl FeatureImportance for RegressionTreeRegressor {
    fn feature_importances(&self) -> Vec<f64> {
        self.importances.clone()
    }
}
