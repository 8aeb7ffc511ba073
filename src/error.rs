//! Error type shared by every fallible operation of this crate.
use polars::prelude::PolarsError;
use thiserror::Error;

use std::io;


/// Errors raised while reading samples, configuring, fitting,
/// or querying a boosted classifier.
#[derive(Error, Debug)]
pub enum BoostError {
    /// The classifier has no fitted member yet.
    #[error("the ensemble is empty. Call `fit` before querying it")]
    EmptyEnsemble,

    /// A hyperparameter is out of its domain.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The given sample cannot be used for this operation.
    #[error("invalid sample: {0}")]
    InvalidSample(String),

    /// Two lengths (features or rows) that must agree do not.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// The length the operation expected.
        expected: usize,
        /// The length it received.
        got: usize,
    },

    /// Every weak learner in the ensemble reports zero importance.
    #[error("feature importances sum to zero (every tree is a single leaf)")]
    ZeroImportance,

    /// Drawing the training history failed.
    #[error("failed to plot the history: {0}")]
    Plot(String),

    /// I/O error while reading or writing a file.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Error raised by `polars` while converting a data frame.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}


/// Shorthand for `std::result::Result<T, BoostError>`.
pub type Result<T> = std::result::Result<T, BoostError>;
