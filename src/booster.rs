//! Provides the boosting framework and Gradient Boosting.

/// Provides `Booster` and `CurrentStatus` traits.
pub mod core;

/// Gradient Boosting Machine for binary classification.
pub mod gradient_boost;


pub use self::core::{Booster, CurrentStatus};
pub use self::gradient_boost::{
    GBM,
    GBClassifier,
    GBMConfig,
    EarlyStopping,
    History,
};
