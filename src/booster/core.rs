//! Provides `Booster` trait.

use crate::{Result, WeakLearner};
use std::ops::ControlFlow;


/// The trait [`Booster`] defines the standard framework of Boosting.
/// Here, the **standard framework** is defined as
/// a repeated game between **Booster** and **Weak Learner**
/// of the following form:
///
/// In each round `t = 1, 2, ...`,
/// 1. Booster builds a regression target
///    (e.g., the negative gradient of a loss) over training instances.
/// 2. Weak Learner returns a hypothesis fitted to that target.
/// 3. Booster adds the hypothesis to its combined hypothesis.
///
/// # Required Methods
/// - [`Booster::name`]
/// - [`Booster::preprocess`]
/// - [`Booster::boost`]
/// - [`Booster::postprocess`]
/// - [`Booster::info`] ... optional.
///
/// # Provided Methods
/// - [`Booster::run`]
pub trait Booster<H> {
    /// The final hypothesis output by a boosting algorithm.
    type Output;


    /// Returns the name of the boosting algorithm.
    fn name(&self) -> &str;


    /// Returns the information of boosting algorithm as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// A main function that runs boosting algorithm.
    /// The first error returned by [`Booster::boost`] stops the run
    /// and is returned as is.
    fn run<W>(&mut self, weak_learner: &W) -> Result<Self::Output>
        where W: WeakLearner<Hypothesis = H>
    {
        self.preprocess()?;

        let flow = (1..).try_for_each(|iter| {
            match self.boost(weak_learner, iter) {
                Ok(ControlFlow::Continue(())) => ControlFlow::Continue(()),
                Ok(ControlFlow::Break(_)) => ControlFlow::Break(Ok(())),
                Err(e) => ControlFlow::Break(Err(e)),
            }
        });
        if let ControlFlow::Break(result) = flow {
            result?;
        }

        self.postprocess()
    }


    /// Pre-processing for `self`.
    /// As you can see in [`Booster::run`],
    /// this method is called before the boosting process.
    fn preprocess(&mut self) -> Result<()>;


    /// Boosting step per iteration.
    /// This method returns
    /// `ControlFlow::Continue(())` if the boosting should go on,
    /// `ControlFlow::Break(terminated_iter)` otherwise.
    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> Result<ControlFlow<usize>>
        where W: WeakLearner<Hypothesis = H>;


    /// Post-processing.
    fn postprocess(&mut self) -> Result<Self::Output>;
}


/// Boosters that expose their state at the current round.
/// [`Logger`](crate::research::Logger) uses this to print the progress.
pub trait CurrentStatus {
    /// Training loss of the current combined hypothesis.
    fn train_loss(&self) -> f64;


    /// Validation loss of the current combined hypothesis, if tracked.
    fn valid_loss(&self) -> Option<f64>;


    /// Number of hypotheses combined so far.
    fn n_hypotheses(&self) -> usize;
}
