#![warn(missing_docs)]

//! 
//! A small gradient boosting library for binary classification.
//! 
//! [`GBClassifier`] fits an ensemble of regression trees
//! to the negative gradient of the logistic loss.
//! Each round draws a bootstrap subsample,
//! fits a [`RegressionTree`] to the pseudo-residuals,
//! and picks the step size by a grid line search.
//! The fit can stop early on a validation sample.
//! 
//! Labels are `-1.0` or `+1.0`.
//! 
//! ```no_run
//! use tinygbm::prelude::*;
//! 
//! let train = Sample::from_csv("train.csv", true)
//!     .unwrap()
//!     .set_target("class")
//!     .unwrap();
//! let valid = Sample::from_csv("valid.csv", true)
//!     .unwrap()
//!     .set_target("class")
//!     .unwrap();
//! 
//! let config = GBMConfig::from_json(r#"{
//!     "base_model_params": { "max_depth": 3 },
//!     "n_estimators": 100,
//!     "early_stopping_rounds": 5
//! }"#).unwrap();
//! 
//! let mut gbm = GBClassifier::new(config).unwrap();
//! gbm.fit(&train, &valid).unwrap();
//! 
//! let auc = gbm.score(&valid).unwrap();
//! println!("AUC: {auc}");
//! ```

/// Defines the error type.
pub mod error;

/// Defines `Sample`, the input of every algorithm.
pub mod sample;

/// Loss functions, line search, metrics.
pub mod common;

/// Defines regressor traits and the weighted ensemble.
pub mod hypothesis;

/// Defines the weak learner trait and the regression tree.
pub mod weak_learner;

/// Defines the boosting framework and Gradient Boosting.
pub mod booster;

/// Progress logging.
pub mod research;

/// Exports the commonly used items.
pub mod prelude;


pub use error::{BoostError, Result};

pub use sample::{Sample, Feature};

pub use common::{BinaryLoss, LogisticLoss, roc_auc_score};

pub use hypothesis::{Regressor, FeatureImportance, WeightedEnsemble};

pub use weak_learner::{
    WeakLearner,
    RegressionTree,
    RegressionTreeBuilder,
    RegressionTreeRegressor,
};

pub use booster::{
    Booster,
    CurrentStatus,
    GBM,
    GBClassifier,
    GBMConfig,
    EarlyStopping,
    History,
};
