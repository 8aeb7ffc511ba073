//! The core library for `Hypothesis` traits.

pub(crate) mod hypothesis_traits;
pub(crate) mod weighted_ensemble;


pub use hypothesis_traits::{
    Regressor,
    FeatureImportance,
};

pub use weighted_ensemble::WeightedEnsemble;
