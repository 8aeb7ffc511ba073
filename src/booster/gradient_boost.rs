//! Gradient boosting for binary classification.

/// Defines the boosting loop.
pub mod gbm;
/// Defines the classifier front end.
pub mod classifier;
/// Defines the hyperparameters.
pub mod config;
/// Defines the early stopping rule.
pub mod early_stopping;
/// Defines the per-round diagnostics.
pub mod history;


pub use gbm::GBM;
pub use classifier::GBClassifier;
pub use config::GBMConfig;
pub use early_stopping::EarlyStopping;
pub use history::History;
