use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{BoostError, Result};
use super::RegressionTree;


/// The number of bins set as default.
pub const DEFAULT_NBIN: usize = 255;
/// The minimal number of rows to split a node.
pub const DEFAULT_MIN_SAMPLES_SPLIT: usize = 2;
/// The minimal number of rows in a leaf.
pub const DEFAULT_MIN_SAMPLES_LEAF: usize = 1;
/// Default L2-regularization parameter
pub const DEFAULT_LAMBDA_L2: f64 = 0.0;


/// A struct that builds `RegressionTree`.
/// `RegressionTreeBuilder` keeps parameters for constructing `RegressionTree`.
///
/// The builder can also be read from a JSON object,
/// which is how `GBMConfig::base_model_params` reaches the tree.
/// Unknown keys are rejected.
///
/// # Example
///
/// ```no_run
/// use tinygbm::prelude::*;
///
/// let weak_learner = RegressionTreeBuilder::new()
///     .max_depth(3)
///     .min_samples_leaf(2)
///     .build()
///     .unwrap();
///
/// let params = serde_json::json!({ "max_depth": 3, "n_bins": 64 });
/// let weak_learner = RegressionTreeBuilder::from_params(
///         params.as_object().unwrap()
///     )
///     .unwrap()
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegressionTreeBuilder {
    /// Maximal depth of the tree. `None` grows the tree
    /// until the leaves cannot be split.
    max_depth: Option<usize>,

    /// A node with fewer rows than this becomes a leaf.
    min_samples_split: usize,

    /// Each child of a split holds at least this many rows.
    min_samples_leaf: usize,

    /// Number of bins per feature.
    n_bins: usize,

    /// L2 regularization for the leaf values.
    lambda_l2: f64,
}


impl Default for RegressionTreeBuilder {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_samples_split: DEFAULT_MIN_SAMPLES_SPLIT,
            min_samples_leaf: DEFAULT_MIN_SAMPLES_LEAF,
            n_bins: DEFAULT_NBIN,
            lambda_l2: DEFAULT_LAMBDA_L2,
        }
    }
}


impl RegressionTreeBuilder {
    /// Construct a new instance of `RegressionTreeBuilder`.
    /// By default,
    /// `RegressionTreeBuilder` sets the parameters as follows;
    /// ```text
    /// max_depth: None,
    /// min_samples_split: DEFAULT_MIN_SAMPLES_SPLIT == 2,
    /// min_samples_leaf: DEFAULT_MIN_SAMPLES_LEAF == 1,
    /// n_bins: DEFAULT_NBIN == 255,
    /// lambda_l2: DEFAULT_LAMBDA_L2 == 0.0,
    /// ```
    pub fn new() -> Self {
        Self::default()
    }


    /// Read the parameters from a JSON object.
    /// Missing keys keep their default values.
    pub fn from_params(params: &Map<String, Value>) -> Result<Self> {
        serde_json::from_value(Value::Object(params.clone()))
            .map_err(|e| BoostError::InvalidConfiguration(
                format!("base_model_params: {e}")
            ))
    }


    /// Specify the maximal depth of the tree.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }


    /// Set the minimal number of rows to split a node.
    pub fn min_samples_split(mut self, n: usize) -> Self {
        self.min_samples_split = n;
        self
    }


    /// Set the minimal number of rows in a leaf.
    pub fn min_samples_leaf(mut self, n: usize) -> Self {
        self.min_samples_leaf = n;
        self
    }


    /// Set the number of bins per feature.
    pub fn n_bins(mut self, n_bins: usize) -> Self {
        self.n_bins = n_bins;
        self
    }


    /// Set the L2-regularization parameter.
    pub fn lambda_l2(mut self, lambda_l2: f64) -> Self {
        self.lambda_l2 = lambda_l2;
        self
    }


    /// Build a `RegressionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> Result<RegressionTree> {
        if self.min_samples_split < 2 {
            return Err(BoostError::InvalidConfiguration(format!(
                "min_samples_split must be at least 2, got {}",
                self.min_samples_split
            )));
        }
        if self.min_samples_leaf == 0 {
            return Err(BoostError::InvalidConfiguration(
                "min_samples_leaf must be positive".into()
            ));
        }
        if self.n_bins == 0 {
            return Err(BoostError::InvalidConfiguration(
                "n_bins must be positive".into()
            ));
        }
        if !self.lambda_l2.is_finite() || self.lambda_l2 < 0.0 {
            return Err(BoostError::InvalidConfiguration(format!(
                "lambda_l2 must be a non-negative number, got {}",
                self.lambda_l2
            )));
        }

        Ok(RegressionTree::from_components(
            self.max_depth,
            self.min_samples_split,
            self.min_samples_leaf,
            self.n_bins,
            self.lambda_l2,
        ))
    }
}
