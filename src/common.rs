//! Defines some common functions used in this library.

/// Defines loss function trait and its instances.
pub mod loss_functions;

/// Defines the grid line search for step sizes.
pub mod line_search;

/// Defines evaluation metrics such as ROC AUC.
pub mod metrics;

/// Defines some checker functions.
pub(crate) mod checker;

pub use loss_functions::{BinaryLoss, LogisticLoss, sigmoid};
pub use line_search::{best_gamma, gamma_grid, GAMMA_GRID_SIZE};
pub use metrics::roc_auc_score;
