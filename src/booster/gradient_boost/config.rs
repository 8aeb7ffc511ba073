use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    common::checker,
    BoostError,
    Result,
};


/// Default number of boosting rounds.
pub const DEFAULT_N_ESTIMATORS: usize = 10;
/// Default learning rate.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
/// Default fraction of rows drawn for each weak hypothesis.
pub const DEFAULT_SUBSAMPLE: f64 = 0.3;


/// Hyperparameters of [`GBClassifier`](super::GBClassifier).
///
/// Every field has a default, so that a partial JSON object
/// is a valid configuration.
///
/// # Example
/// ```
/// use tinygbm::prelude::*;
///
/// let config = GBMConfig::default()
///     .n_estimators(50)
///     .learning_rate(0.2)
///     .early_stopping_rounds(5);
///
/// let same = GBMConfig::from_json(r#"{
///     "n_estimators": 50,
///     "learning_rate": 0.2,
///     "early_stopping_rounds": 5
/// }"#).unwrap();
///
/// assert_eq!(config, same);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GBMConfig {
    /// Hyperparameters of the weak learner.
    /// Empty by default.
    pub base_model_params: Map<String, Value>,

    /// Maximal number of boosting rounds.
    pub n_estimators: usize,

    /// Multiplier applied to each step size before it is stored.
    pub learning_rate: f64,

    /// Fraction of training rows drawn, with replacement,
    /// for each weak hypothesis.
    pub subsample: f64,

    /// Size of the validation loss window.
    /// `None` disables early stopping.
    pub early_stopping_rounds: Option<usize>,

    /// Seed of the subsampling RNG.
    /// `None` seeds from the operating system.
    pub random_state: Option<u64>,

    /// Print the progress every this many rounds.
    /// `None` prints nothing.
    pub print_every: Option<usize>,
}


impl Default for GBMConfig {
    fn default() -> Self {
        Self {
            base_model_params: Map::new(),
            n_estimators: DEFAULT_N_ESTIMATORS,
            learning_rate: DEFAULT_LEARNING_RATE,
            subsample: DEFAULT_SUBSAMPLE,
            early_stopping_rounds: None,
            random_state: None,
            print_every: None,
        }
    }
}


impl GBMConfig {
    /// Read a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| BoostError::InvalidConfiguration(e.to_string()))
    }


    /// Set the hyperparameters of the weak learner.
    pub fn base_model_params(mut self, params: Map<String, Value>) -> Self {
        self.base_model_params = params;
        self
    }


    /// Set the maximal number of boosting rounds.
    pub fn n_estimators(mut self, n_estimators: usize) -> Self {
        self.n_estimators = n_estimators;
        self
    }


    /// Set the learning rate.
    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }


    /// Set the subsample fraction.
    pub fn subsample(mut self, subsample: f64) -> Self {
        self.subsample = subsample;
        self
    }


    /// Enable early stopping with a window of `rounds` losses.
    pub fn early_stopping_rounds(mut self, rounds: usize) -> Self {
        self.early_stopping_rounds = Some(rounds);
        self
    }


    /// Fix the seed of the subsampling RNG.
    pub fn random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }


    /// Print the progress every `round` rounds.
    pub fn print_every(mut self, round: usize) -> Self {
        self.print_every = Some(round);
        self
    }


    /// Check the ranges of the hyperparameters
    /// that do not depend on the data.
    pub fn validate(&self) -> Result<()> {
        checker::check_learning_rate(self.learning_rate)?;
        checker::check_subsample(self.subsample)?;
        checker::check_early_stopping_rounds(self.early_stopping_rounds)?;
        if self.print_every == Some(0) {
            return Err(BoostError::InvalidConfiguration(
                "print_every must be positive".into()
            ));
        }
        Ok(())
    }
}
