//! Provides Gradient Boosting Machine ([`GBM`]) by Friedman, 2001.
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    common::{checker, best_gamma, BinaryLoss, LogisticLoss},
    hypothesis::{Regressor, WeightedEnsemble},
    Booster,
    BoostError,
    CurrentStatus,
    Result,
    Sample,
    WeakLearner,
};
use super::{
    config::{DEFAULT_LEARNING_RATE, DEFAULT_N_ESTIMATORS, DEFAULT_SUBSAMPLE},
    early_stopping::EarlyStopping,
    history::{History, GAMMA, LOSS_ON_TRAIN, LOSS_ON_VAL},
};

use std::ops::ControlFlow;


/// The Gradient Boosting Machine proposed in the following paper:
///
/// [Jerome H. Friedman, 2001 - Greedy Function Approximation: A Gradient Boosting Machine](https://projecteuclid.org/journals/annals-of-statistics/volume-29/issue-5/Greedy-function-approximation-A-gradient-boostingmachine/10.1214/aos/1013203451.full)
///
/// [`GBM`] minimizes the logistic loss over labels in `{-1, +1}`.
/// Each round, it
/// 1. draws `floor(subsample * N)` training rows with replacement,
/// 2. fits a weak hypothesis to the pseudo-residuals on those rows,
/// 3. picks the step size on a grid over `[0, 1]`
///    with the full training sample,
/// 4. appends the hypothesis with the step size times the learning rate,
/// 5. resets the running margins to the class-1 probabilities
///    of the whole ensemble.
///
/// If early stopping is enabled,
/// the validation loss is tracked
/// and the fit stops on the first round that does not improve
/// on the last `early_stopping_rounds` losses.
///
/// Most users want [`GBClassifier`](super::GBClassifier),
/// which builds and runs a [`GBM`].
///
/// # Example
/// ```no_run
/// use tinygbm::prelude::*;
///
/// let train = Sample::from_csv("train.csv", true)
///     .unwrap()
///     .set_target("class")
///     .unwrap();
/// let valid = Sample::from_csv("valid.csv", true)
///     .unwrap()
///     .set_target("class")
///     .unwrap();
///
/// let mut booster = GBM::init(&train, &valid)
///     .n_estimators(100)
///     .learning_rate(0.1)
///     .subsample(0.5)
///     .early_stopping_rounds(5)
///     .random_state(1234);
///
/// let tree = RegressionTreeBuilder::new()
///     .max_depth(3)
///     .build()
///     .unwrap();
///
/// let (ensemble, history) = booster.run(&tree).unwrap();
/// let proba = ensemble.predict_proba(&valid).unwrap();
/// ```
pub struct GBM<'a, H> {
    // Training and validation samples.
    train: &'a Sample,
    valid: &'a Sample,

    n_estimators: usize,
    learning_rate: f64,
    subsample: f64,
    early_stopping_rounds: Option<usize>,
    random_state: Option<u64>,

    loss: LogisticLoss,

    // Number of rows drawn per round.
    n_draw: usize,
    rng: StdRng,

    ensemble: WeightedEnsemble<H>,

    // Running margins. After each full recompute they hold
    // the class-1 probability of the ensemble.
    train_margins: Vec<f64>,
    valid_margins: Vec<f64>,

    stopping: EarlyStopping,
    history: History,

    // Round at which the fit ended.
    terminated: usize,
}


impl<'a, H> GBM<'a, H> {
    /// Initialize the `GBM` with the default hyperparameters.
    pub fn init(train: &'a Sample, valid: &'a Sample) -> Self {
        Self {
            train,
            valid,

            n_estimators: DEFAULT_N_ESTIMATORS,
            learning_rate: DEFAULT_LEARNING_RATE,
            subsample: DEFAULT_SUBSAMPLE,
            early_stopping_rounds: None,
            random_state: None,

            loss: LogisticLoss,

            n_draw: 0,
            rng: StdRng::seed_from_u64(0),

            ensemble: WeightedEnsemble::new(),

            train_margins: Vec::new(),
            valid_margins: Vec::new(),

            stopping: EarlyStopping::Disabled,
            history: History::new(),

            terminated: usize::MAX,
        }
    }


    /// Set the maximal number of rounds.
    pub fn n_estimators(mut self, n_estimators: usize) -> Self {
        self.n_estimators = n_estimators;
        self
    }


    /// Set the learning rate.
    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }


    /// Set the fraction of rows drawn per round.
    pub fn subsample(mut self, subsample: f64) -> Self {
        self.subsample = subsample;
        self
    }


    /// Enable early stopping with a window of `rounds` losses.
    pub fn early_stopping_rounds(mut self, rounds: usize) -> Self {
        self.early_stopping_rounds = Some(rounds);
        self
    }


    /// Fix the seed of the subsampling RNG.
    pub fn random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }


    /// Round at which the last run ended.
    pub fn terminated(&self) -> usize {
        self.terminated
    }


    /// The ensemble built so far.
    pub fn ensemble(&self) -> &WeightedEnsemble<H> {
        &self.ensemble
    }


    /// The history recorded so far.
    pub fn history(&self) -> &History {
        &self.history
    }


    fn check_samples(&self) -> Result<()> {
        checker::check_sample(self.train)?;

        let n_feature = self.train.shape().1;
        let n_valid = self.valid.shape().0;

        if n_valid == 0 {
            if self.early_stopping_rounds.is_some() {
                return Err(BoostError::InvalidSample(
                    "early stopping needs a non-empty validation sample".into()
                ));
            }
            return Ok(());
        }

        checker::check_feature_count(n_feature, self.valid)?;
        self.valid.check_binary_labels()
    }
}


impl<H> GBM<'_, H>
    where H: Regressor + Sync,
{
    /// Draw a bootstrap subsample, fit a hypothesis
    /// to the pseudo-residuals on it,
    /// and return `(gamma * learning_rate, hypothesis)`.
    fn fit_new_base_model<W>(&mut self, weak_learner: &W)
        -> Result<(f64, H)>
        where W: WeakLearner<Hypothesis = H>
    {
        let n_sample = self.train.shape().0;
        let indices = (0..self.n_draw)
            .map(|_| self.rng.gen_range(0..n_sample))
            .collect::<Vec<_>>();

        let sub = self.train.subsample(&indices[..]);
        let sub_margins = indices.iter()
            .map(|&i| self.train_margins[i])
            .collect::<Vec<_>>();
        let residuals = self.loss.pseudo_residuals(sub.target(), &sub_margins);

        let h = weak_learner.produce(&sub, &residuals[..])?;

        let predictions = h.predict_all(self.train);
        let gamma = best_gamma(
            &self.loss,
            self.train.target(),
            &self.train_margins[..],
            &predictions[..],
        );

        Ok((gamma * self.learning_rate, h))
    }


    fn recompute_margins(&mut self) -> Result<()> {
        self.train_margins = class_one_proba(&self.ensemble, self.train)?;
        self.valid_margins = class_one_proba(&self.ensemble, self.valid)?;
        Ok(())
    }
}


/// Column `1` of `ensemble.predict_proba(sample)`.
fn class_one_proba<H>(ensemble: &WeightedEnsemble<H>, sample: &Sample)
    -> Result<Vec<f64>>
    where H: Regressor + Sync,
{
    let proba = ensemble.predict_proba(sample)?
        .into_iter()
        .map(|[_, p]| p)
        .collect();
    Ok(proba)
}


impl<H> Booster<H> for GBM<'_, H>
    where H: Regressor + Sync,
{
    type Output = (WeightedEnsemble<H>, History);


    fn name(&self) -> &str {
        "Gradient Boosting Machine"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, n_feature) = self.train.shape();
        let n_valid = self.valid.shape().0;
        let stopping = match self.early_stopping_rounds {
            Some(k) => format!("{k} rounds"),
            None => "Disabled".into(),
        };
        let seed = match self.random_state {
            Some(seed) => format!("{seed}"),
            None => "Entropy".into(),
        };
        let info = Vec::from([
            ("# of examples", format!("{n_sample}")),
            ("# of features", format!("{n_feature}")),
            ("# of valid. examples", format!("{n_valid}")),
            ("Loss", self.loss.name().to_string()),
            ("Max iteration", format!("{}", self.n_estimators)),
            ("Learning rate", format!("{}", self.learning_rate)),
            ("Subsample", format!("{}", self.subsample)),
            ("Early stopping", stopping),
            ("Random state", seed),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) -> Result<()> {
        checker::check_learning_rate(self.learning_rate)?;
        checker::check_subsample(self.subsample)?;
        checker::check_early_stopping_rounds(self.early_stopping_rounds)?;
        self.check_samples()?;

        let n_sample = self.train.shape().0;
        let n_valid = self.valid.shape().0;
        self.n_draw = checker::subsample_size(self.subsample, n_sample)?;

        self.rng = match self.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        self.ensemble = WeightedEnsemble::with_capacity(self.n_estimators);
        self.train_margins = vec![0.0; n_sample];
        self.valid_margins = vec![0.0; n_valid];
        self.stopping = EarlyStopping::new(self.early_stopping_rounds);
        self.history = History::new();
        self.terminated = self.n_estimators;

        Ok(())
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> Result<ControlFlow<usize>>
        where W: WeakLearner<Hypothesis = H>,
    {
        if self.n_estimators < iteration {
            return Ok(ControlFlow::Break(self.n_estimators));
        }


        let (weight, h) = self.fit_new_base_model(weak_learner)?;
        if weight == 0.0 {
            log::warn!("round {iteration}: the line search returned gamma = 0");
        }
        self.ensemble.push(weight, h);
        self.history.append(GAMMA, weight);


        if self.stopping.is_enabled() {
            let proba = class_one_proba(&self.ensemble, self.valid)?;
            self.valid_margins.iter_mut()
                .zip(proba)
                .for_each(|(z, p)| { *z += p; });

            let valid_loss = self.loss.eval(
                self.valid.target(), &self.valid_margins[..]
            );
            self.history.append(LOSS_ON_VAL, valid_loss);
            log::debug!("round {iteration}: validation loss = {valid_loss}");

            if self.stopping.update(valid_loss).is_break() {
                log::info!(
                    "early stopping at round {iteration}: \
                     validation loss {valid_loss} did not improve"
                );
                self.terminated = iteration;
                return Ok(ControlFlow::Break(iteration));
            }
        }


        self.recompute_margins()?;
        let train_loss = self.loss.eval(
            self.train.target(), &self.train_margins[..]
        );
        self.history.append(LOSS_ON_TRAIN, train_loss);
        log::debug!(
            "round {iteration}: weight = {weight}, training loss = {train_loss}"
        );

        Ok(ControlFlow::Continue(()))
    }


    fn postprocess(&mut self) -> Result<Self::Output> {
        log::info!(
            "fitted {} hypotheses in {} rounds",
            self.ensemble.len(),
            self.terminated.min(self.n_estimators),
        );
        let ensemble = std::mem::take(&mut self.ensemble);
        let history = std::mem::take(&mut self.history);
        Ok((ensemble, history))
    }
}


impl<H> CurrentStatus for GBM<'_, H> {
    fn train_loss(&self) -> f64 {
        self.history.get(LOSS_ON_TRAIN)
            .and_then(|v| v.last().copied())
            .unwrap_or(f64::NAN)
    }


    fn valid_loss(&self) -> Option<f64> {
        self.history.get(LOSS_ON_VAL)
            .and_then(|v| v.last().copied())
    }


    fn n_hypotheses(&self) -> usize {
        self.ensemble.len()
    }
}
