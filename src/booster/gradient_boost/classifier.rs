use crate::{
    common::{checker, roc_auc_score},
    hypothesis::{FeatureImportance, Regressor, WeightedEnsemble},
    research::Logger,
    weak_learner::{RegressionTree, RegressionTreeBuilder},
    BoostError,
    Result,
    Sample,
    WeakLearner,
};
use super::{GBMConfig, GBM, History};


/// A gradient boosting binary classifier.
///
/// [`GBClassifier`] holds a [`GBMConfig`] and a weak learner,
/// and keeps the ensemble and the history of the last call of
/// [`GBClassifier::fit`].
/// Labels must be `-1.0` or `+1.0`.
///
/// # Example
/// ```
/// use tinygbm::prelude::*;
///
/// let rows = vec![
///     [0.0, 0.1], [0.2, 0.0], [0.1, 0.3], [0.3, 0.2],
///     [5.0, 5.1], [5.2, 5.0], [5.1, 5.3], [5.3, 5.2],
/// ];
/// let target = vec![-1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0];
/// let sample = Sample::from_rows(&rows, target).unwrap();
///
/// let config = GBMConfig::default()
///     .n_estimators(5)
///     .subsample(1.0)
///     .random_state(0);
/// let mut gbm = GBClassifier::new(config).unwrap();
/// gbm.fit(&sample, &sample).unwrap();
///
/// let proba = gbm.predict_proba(&sample).unwrap();
/// assert!(proba[0][1] < 0.5);
/// assert!(proba[7][1] > 0.5);
/// ```
pub struct GBClassifier<W = RegressionTree>
    where W: WeakLearner,
{
    config: GBMConfig,
    weak_learner: W,
    ensemble: WeightedEnsemble<W::Hypothesis>,
    history: History,

    // Number of features of the last training sample.
    n_feature: Option<usize>,
}


impl GBClassifier<RegressionTree> {
    /// Build a classifier whose weak learner is a [`RegressionTree`]
    /// configured by `config.base_model_params`.
    pub fn new(config: GBMConfig) -> Result<Self> {
        let tree = RegressionTreeBuilder::from_params(&config.base_model_params)?
            .build()?;
        Self::with_weak_learner(config, tree)
    }
}


impl<W> GBClassifier<W>
    where W: WeakLearner,
{
    /// Build a classifier with any weak learner.
    /// `config.base_model_params` is not read.
    pub fn with_weak_learner(config: GBMConfig, weak_learner: W)
        -> Result<Self>
    {
        config.validate()?;
        Ok(Self {
            config,
            weak_learner,
            ensemble: WeightedEnsemble::new(),
            history: History::new(),
            n_feature: None,
        })
    }


    /// The configuration.
    pub fn config(&self) -> &GBMConfig {
        &self.config
    }


    /// The weak learner.
    pub fn weak_learner(&self) -> &W {
        &self.weak_learner
    }


    /// The ensemble of the last fit.
    pub fn ensemble(&self) -> &WeightedEnsemble<W::Hypothesis> {
        &self.ensemble
    }


    /// The history of the last fit.
    pub fn history(&self) -> &History {
        &self.history
    }


    fn check_fitted(&self, sample: &Sample) -> Result<()> {
        let n_feature = match self.n_feature {
            Some(n) if !self.ensemble.is_empty() => n,
            _ => return Err(BoostError::EmptyEnsemble),
        };
        checker::check_feature_count(n_feature, sample)
    }
}


impl<W> GBClassifier<W>
    where W: WeakLearner,
          W::Hypothesis: Regressor + Sync,
{
    /// Fit the ensemble on `train`.
    /// `valid` is used for early stopping only.
    ///
    /// Every call starts from an empty ensemble.
    /// On failure, the classifier is left unfitted.
    pub fn fit(&mut self, train: &Sample, valid: &Sample) -> Result<()> {
        self.ensemble = WeightedEnsemble::new();
        self.history = History::new();
        self.n_feature = None;

        let mut booster = GBM::init(train, valid)
            .n_estimators(self.config.n_estimators)
            .learning_rate(self.config.learning_rate)
            .subsample(self.config.subsample);
        if let Some(rounds) = self.config.early_stopping_rounds {
            booster = booster.early_stopping_rounds(rounds);
        }
        if let Some(seed) = self.config.random_state {
            booster = booster.random_state(seed);
        }

        let (ensemble, history) = Logger::new(booster, &self.weak_learner)
            .print_every_opt(self.config.print_every)
            .run()?;

        self.ensemble = ensemble;
        self.history = history;
        self.n_feature = Some(train.shape().1);
        Ok(())
    }


    /// Class probabilities `[P(y = -1), P(y = +1)]` for every row.
    pub fn predict_proba(&self, sample: &Sample) -> Result<Vec<[f64; 2]>> {
        self.check_fitted(sample)?;
        self.ensemble.predict_proba(sample)
    }


    /// Labels in `{-1, +1}`.
    /// A row gets `+1` when its class-1 probability is at least `0.5`.
    pub fn predict(&self, sample: &Sample) -> Result<Vec<f64>> {
        let labels = self.predict_proba(sample)?
            .into_iter()
            .map(|[_, p]| if p >= 0.5 { 1.0 } else { -1.0 })
            .collect();
        Ok(labels)
    }


    /// ROC AUC of the class-1 probabilities
    /// against the indicator `label == 1`.
    pub fn score(&self, sample: &Sample) -> Result<f64> {
        let proba = self.predict_proba(sample)?;

        let n_sample = sample.shape().0;
        let target = sample.target();
        if target.len() != n_sample {
            return Err(BoostError::InvalidSample(
                "the target is not specified".into()
            ));
        }

        let labels = target.iter()
            .map(|&y| y == 1.0)
            .collect::<Vec<_>>();
        let scores = proba.into_iter()
            .map(|[_, p]| p)
            .collect::<Vec<_>>();
        roc_auc_score(&labels[..], &scores[..])
    }
}


impl<W> GBClassifier<W>
    where W: WeakLearner,
          W::Hypothesis: FeatureImportance,
{
    /// Per-feature importance of the ensemble, summing to `1`.
    pub fn feature_importances(&self) -> Result<Vec<f64>> {
        self.ensemble.feature_importances()
    }
}
