use rayon::prelude::*;

use crate::Sample;


/// A trait that defines the behavor of regressor.
/// You only need to implement `predict` method.
pub trait Regressor {
    /// Predicts the target value of the i'th row of the `sample`.
    fn predict(&self, sample: &Sample, row: usize) -> f64;


    /// Predicts the target values of all rows of `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<f64>
        where Self: Sync,
    {
        let n_sample = sample.shape().0;
        (0..n_sample).into_par_iter()
            .map(|row| self.predict(sample, row))
            .collect::<Vec<_>>()
    }
}


/// A regressor that can tell how much each feature contributed
/// to its fit.
pub trait FeatureImportance {
    /// Returns one non-negative value per feature column.
    fn feature_importances(&self) -> Vec<f64>;
}
