use crate::{
    common::loss_functions::sigmoid,
    BoostError,
    FeatureImportance,
    Regressor,
    Result,
    Sample,
};


/// An additive combination `sum_t w_t h_t(x)` of regressors,
/// kept in the order they were fitted.
///
/// The weights and the hypotheses always have the same length:
/// the only way to grow the ensemble is [`WeightedEnsemble::push`].
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedEnsemble<H> {
    weights: Vec<f64>,
    hypotheses: Vec<H>,
}


impl<H> Default for WeightedEnsemble<H> {
    fn default() -> Self {
        Self { weights: Vec::new(), hypotheses: Vec::new(), }
    }
}


impl<H> WeightedEnsemble<H> {
    /// Construct an empty ensemble.
    pub fn new() -> Self {
        Self::default()
    }


    /// Construct an empty ensemble with room for `capacity` members.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            weights: Vec::with_capacity(capacity),
            hypotheses: Vec::with_capacity(capacity),
        }
    }


    /// Append a pair `(weight, hypothesis)` to the ensemble.
    #[inline]
    pub fn push(&mut self, weight: f64, hypothesis: H) {
        self.weights.push(weight);
        self.hypotheses.push(hypothesis);
    }


    /// Weights on each hypothesis, in fitting order.
    pub fn weights(&self) -> &[f64] {
        &self.weights[..]
    }


    /// Hypotheses, in fitting order.
    pub fn hypotheses(&self) -> &[H] {
        &self.hypotheses[..]
    }


    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.weights.len()
    }


    /// Returns `true` if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }


    /// Decompose the ensemble
    /// into the two vectors `Vec<f64>` and `Vec<H>`.
    #[inline]
    pub fn decompose(self) -> (Vec<f64>, Vec<H>) {
        (self.weights, self.hypotheses)
    }
}


impl<H> WeightedEnsemble<H>
    where H: Regressor + Sync,
{
    /// Raw scores (margins) for every row of `sample`.
    /// An empty ensemble returns zeros.
    pub fn margins(&self, sample: &Sample) -> Vec<f64> {
        self.predict_all(sample)
    }


    /// Class probabilities `[1 - p, p]` for every row of `sample`,
    /// where `p = sigmoid(margin)`.
    pub fn predict_proba(&self, sample: &Sample) -> Result<Vec<[f64; 2]>> {
        if self.is_empty() {
            return Err(BoostError::EmptyEnsemble);
        }

        let proba = self.margins(sample)
            .into_iter()
            .map(|z| {
                let p = sigmoid(z);
                [1.0 - p, p]
            })
            .collect();
        Ok(proba)
    }
}


impl<H> WeightedEnsemble<H>
    where H: FeatureImportance,
{
    /// Element-wise sum of the members' importances,
    /// normalized to sum to `1`.
    pub fn feature_importances(&self) -> Result<Vec<f64>> {
        let mut iter = self.hypotheses.iter()
            .map(|h| h.feature_importances());

        let mut total = iter.next().ok_or(BoostError::EmptyEnsemble)?;
        for importances in iter {
            if importances.len() != total.len() {
                return Err(BoostError::DimensionMismatch {
                    expected: total.len(), got: importances.len(),
                });
            }
            total.iter_mut()
                .zip(importances)
                .for_each(|(t, i)| { *t += i; });
        }

        let sum = total.iter().sum::<f64>();
        if sum <= 0.0 {
            return Err(BoostError::ZeroImportance);
        }
        total.iter_mut().for_each(|t| { *t /= sum; });

        Ok(total)
    }
}


impl<H> Regressor for WeightedEnsemble<H>
    where H: Regressor,
{
    fn predict(&self, sample: &Sample, row: usize) -> f64 {
        self.weights.iter()
            .zip(&self.hypotheses[..])
            .map(|(w, h)| *w * h.predict(sample, row))
            .sum::<f64>()
    }
}

