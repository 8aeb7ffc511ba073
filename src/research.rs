//! This directory provides some features for research.
//! Prints the followings of a boosting algorithm per iteration
//! - Training loss
//! - Validation loss
//! - Number of hypotheses
//! - Running time

/// Defines a progress logger.
pub mod logger;

pub use logger::Logger;
