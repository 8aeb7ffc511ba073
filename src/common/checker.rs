//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data, ranges of hyperparameters.

use crate::{BoostError, Result, Sample};


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample) -> Result<()>
{
    let (n_sample, n_feature) = sample.shape();


    // `data` and `target` must have the length greater than `0`.
    if n_sample == 0 {
        return Err(BoostError::InvalidSample("the sample is empty".into()));
    }


    // `data` must have a feature.
    if n_feature == 0 {
        return Err(BoostError::InvalidSample("the sample has no feature".into()));
    }

    sample.check_binary_labels()
}


/// Check whether two samples share the same features.
#[inline(always)]
pub(crate) fn check_feature_count(expected: usize, sample: &Sample)
    -> Result<()>
{
    let got = sample.shape().1;
    if expected != got {
        return Err(BoostError::DimensionMismatch { expected, got, });
    }
    Ok(())
}


/// Check the learning rate.
#[inline(always)]
pub(crate) fn check_learning_rate(learning_rate: f64) -> Result<()> {
    if !learning_rate.is_finite() || learning_rate <= 0.0 {
        return Err(BoostError::InvalidConfiguration(format!(
            "learning_rate must be a positive number, got {learning_rate}"
        )));
    }
    Ok(())
}


/// Check the subsample fraction.
#[inline(always)]
pub(crate) fn check_subsample(subsample: f64) -> Result<()> {
    if !subsample.is_finite() || subsample <= 0.0 {
        return Err(BoostError::InvalidConfiguration(format!(
            "subsample must be a positive number, got {subsample}"
        )));
    }
    Ok(())
}


/// Returns `floor(subsample * n_sample)`,
/// the number of rows drawn for each weak hypothesis.
/// Fails if no row would be drawn.
#[inline(always)]
pub(crate) fn subsample_size(subsample: f64, n_sample: usize) -> Result<usize> {
    let size = (subsample * n_sample as f64).floor() as usize;
    if size == 0 {
        return Err(BoostError::InvalidConfiguration(format!(
            "subsample = {subsample} draws no row out of {n_sample}"
        )));
    }
    Ok(size)
}


/// Check the early stopping rounds.
#[inline(always)]
pub(crate) fn check_early_stopping_rounds(rounds: Option<usize>) -> Result<()> {
    if rounds == Some(0) {
        return Err(BoostError::InvalidConfiguration(
            "early_stopping_rounds must be positive".into()
        ));
    }
    Ok(())
}
