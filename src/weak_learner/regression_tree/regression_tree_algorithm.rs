use rayon::prelude::*;

use crate::{BoostError, Result, Sample, WeakLearner};

use super::{
    bin::*,
    node::*,
    split_rule::*,
    regression_tree_regressor::RegressionTreeRegressor,
};

use std::fmt;


/// Splits whose gain does not exceed this value are ignored.
const NUM_TOLERANCE: f64 = 1e-9;


/// This struct produces a regression tree for the given target.
///
/// The tree minimizes the squared error.
/// Each feature is cut into equal-width bins and
/// the best split is searched over the bin boundaries.
/// Construct it with [`RegressionTreeBuilder`](super::RegressionTreeBuilder).
#[derive(Clone, Debug, PartialEq)]
pub struct RegressionTree {
    // The maximal depth of the output trees
    max_depth: Option<usize>,

    // Rows needed to split a node
    min_samples_split: usize,

    // Rows needed in each child
    min_samples_leaf: usize,

    // Upper bound of the number of bins per feature
    n_bins: usize,

    // Regularization parameter
    lambda_l2: f64,
}


/// Per-call data shared by the recursion.
struct Workspace<'a> {
    sample: &'a Sample,
    bins: Vec<Bins>,
    // `positions[j][i]` is the bin of row `i` for feature `j`.
    positions: Vec<Vec<usize>>,
    gh: Vec<GradientHessian>,
}


/// The best split found on a node.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    gain: f64,
    feature: usize,
    bin: usize,
}


impl RegressionTree {
    #[inline]
    pub(super) fn from_components(
        max_depth: Option<usize>,
        min_samples_split: usize,
        min_samples_leaf: usize,
        n_bins: usize,
        lambda_l2: f64,
    ) -> Self
    {
        Self {
            max_depth,
            min_samples_split,
            min_samples_leaf,
            n_bins,
            lambda_l2,
        }
    }


    /// Leaf value `-G / (H + lambda)`.
    #[inline]
    fn prediction(&self, gh: &GradientHessian) -> f64 {
        - gh.grad / (gh.hess + self.lambda_l2)
    }


    /// `G^2 / (H + lambda)`, twice the loss decrease
    /// obtained by predicting the leaf value instead of zero.
    #[inline]
    fn score(&self, gh: &GradientHessian) -> f64 {
        let denom = gh.hess + self.lambda_l2;
        if denom <= 0.0 { 0.0 } else { gh.grad.powi(2) / denom }
    }


    fn full_tree(
        &self,
        ws: &Workspace<'_>,
        indices: Vec<usize>,
        depth: usize,
        importances: &mut [f64],
    ) -> Box<Node>
    {
        let total = indices.iter()
            .fold(GradientHessian::default(), |acc, &i| acc + ws.gh[i]);

        // Compute the best prediction that minimizes the training error
        // on this node.
        let pred = self.prediction(&total);

        let n_rows = indices.len();
        let depth_reached = self.max_depth.is_some_and(|d| depth >= d);
        if depth_reached
            || n_rows < self.min_samples_split
            || n_rows < 2 * self.min_samples_leaf
        {
            return Node::leaf(pred);
        }


        // Find the best splitting rule.
        let Some(best) = self.best_split(ws, &indices[..], &total) else {
            return Node::leaf(pred);
        };


        // Split the train data for left/right childrens
        let (lindices, rindices): (Vec<usize>, Vec<usize>) = indices.into_iter()
            .partition(|&i| ws.positions[best.feature][i] <= best.bin);


        // If the split has no meaning, construct a leaf node.
        if lindices.is_empty() || rindices.is_empty() {
            return Node::leaf(pred);
        }

        importances[best.feature] += best.gain;

        let threshold = ws.bins[best.feature].threshold_after(best.bin);
        let name = ws.sample[best.feature].name();
        let rule = Splitter::new(best.feature, name, threshold);

        let ltree = self.full_tree(ws, lindices, depth + 1, importances);
        let rtree = self.full_tree(ws, rindices, depth + 1, importances);

        Node::branch(rule, ltree, rtree)
    }


    /// Returns the split with the largest gain, if any.
    /// Ties go to the smaller feature index, then to the smaller bin.
    fn best_split(
        &self,
        ws: &Workspace<'_>,
        indices: &[usize],
        total: &GradientHessian,
    ) -> Option<Candidate>
    {
        let parent_score = self.score(total);

        let candidates = ws.bins.par_iter()
            .zip(&ws.positions[..])
            .enumerate()
            .map(|(feature, (bins, positions))| {
                let pack = bins.pack(indices, positions, &ws.gh[..]);
                self.best_split_at(feature, pack, total, parent_score)
            })
            .collect::<Vec<_>>();

        candidates.into_iter()
            .flatten()
            .fold(None, |best: Option<Candidate>, cand| match best {
                Some(b) if b.gain >= cand.gain => Some(b),
                _ => Some(cand),
            })
    }


    fn best_split_at(
        &self,
        feature: usize,
        pack: Vec<GradientHessian>,
        total: &GradientHessian,
        parent_score: f64,
    ) -> Option<Candidate>
    {
        let n_bins = pack.len();
        let mut left = GradientHessian::default();
        let mut best: Option<Candidate> = None;

        for (bin, gh) in pack.into_iter().enumerate().take(n_bins - 1) {
            left = left + gh;
            let right = *total - left;

            if left.count < self.min_samples_leaf
                || right.count < self.min_samples_leaf
            {
                continue;
            }

            let gain = 0.5 * (
                self.score(&left) + self.score(&right) - parent_score
            );
            if gain <= NUM_TOLERANCE { continue; }

            if best.map_or(true, |b| gain > b.gain) {
                best = Some(Candidate { gain, feature, bin });
            }
        }

        best
    }
}


impl WeakLearner for RegressionTree {
    type Hypothesis = RegressionTreeRegressor;


    fn name(&self) -> &str {
        "Regression Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let depth = self.max_depth
            .map(|d| d.to_string())
            .unwrap_or_else(|| "Unlimited".into());
        let info = Vec::from([
            ("Max depth", depth),
            ("Min samples split", format!("{}", self.min_samples_split)),
            ("Min samples leaf", format!("{}", self.min_samples_leaf)),
            ("# of bins (max)", format!("{}", self.n_bins)),
            ("L2 regularization", format!("{}", self.lambda_l2)),
        ]);
        Some(info)
    }


    fn produce(&self, sample: &Sample, target: &[f64])
        -> Result<Self::Hypothesis>
    {
        let (n_sample, n_feature) = sample.shape();
        if n_sample != target.len() {
            return Err(BoostError::DimensionMismatch {
                expected: n_sample, got: target.len(),
            });
        }
        if n_sample == 0 {
            return Err(BoostError::InvalidSample(
                "cannot fit a regression tree on an empty sample".into()
            ));
        }


        let bins = sample.features()
            .par_iter()
            .map(|feature| {
                let n_bin = feature.distinct_value_count()
                    .min(self.n_bins);
                Bins::cut(feature, n_bin)
            })
            .collect::<Vec<_>>();

        let positions = sample.features()
            .par_iter()
            .zip(&bins[..])
            .map(|(feature, bins)| {
                feature.values()
                    .iter()
                    .map(|&x| bins.position(x))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        // Squared loss `(y - p)^2 / 2` at `p = 0`.
        let gh = target.iter()
            .map(|&y| GradientHessian::new(-y, 1.0))
            .collect::<Vec<_>>();

        let ws = Workspace { sample, bins, positions, gh, };


        let mut importances = vec![0.0; n_feature];
        let indices = (0..n_sample).collect::<Vec<_>>();
        let root = self.full_tree(&ws, indices, 0, &mut importances[..]);


        let sum = importances.iter().sum::<f64>();
        if sum > 0.0 {
            importances.iter_mut().for_each(|v| { *v /= sum; });
        }

        Ok(RegressionTreeRegressor::new(root, importances))
    }
}


impl fmt::Display for RegressionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------\n# Regression Tree Weak Learner\n")?;
        if let Some(info) = self.info() {
            for (key, value) in info {
                writeln!(f, "- {key}: {value}")?;
            }
        }
        write!(f, "----------")
    }
}
