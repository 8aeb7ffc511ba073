//! Exports the classifier, the boosting traits and the weak learners.
//! 
pub use crate::booster::{
    // Booster traits
    Booster,
    CurrentStatus,


    // Gradient Boosting ------------------------
    GBM,
    GBClassifier,
    GBMConfig,
    EarlyStopping,
    History,
};


pub use crate::weak_learner::{
    // Weak Learner trait
    WeakLearner,


    // Regression tree
    RegressionTree,
    RegressionTreeBuilder,
    RegressionTreeRegressor,
};


pub use crate::hypothesis::{
    Regressor,
    FeatureImportance,
    WeightedEnsemble,
};


pub use crate::common::{
    BinaryLoss,
    LogisticLoss,
    roc_auc_score,
};


pub use crate::sample::{Sample, Feature};

pub use crate::error::{BoostError, Result};
