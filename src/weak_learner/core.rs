use crate::{Result, Sample};


/// An interface for weak learners, the regressors fitted
/// at every boosting round.
///
/// Given a sample and a real-valued target per row,
/// a weak learner returns a hypothesis approximating the target.
pub trait WeakLearner {
    /// The hypothesis this learner returns.
    type Hypothesis;


    /// Returns the name of the weak learner.
    fn name(&self) -> &str;


    /// Returns the parameters of the weak learner as `String`s.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Fit a new hypothesis on the features of `sample`
    /// against `target`.
    /// The labels stored in `sample` are not used.
    fn produce(&self, sample: &Sample, target: &[f64])
        -> Result<Self::Hypothesis>;
}
