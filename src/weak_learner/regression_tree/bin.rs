use std::fmt;
use std::ops::{Add, Range, Sub};

use crate::Feature;


const EPS: f64 = 0.001;


/// First/second order derivative information, summed over rows.
/// `count` is the number of rows that were summed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct GradientHessian {
    pub(crate) grad: f64,
    pub(crate) hess: f64,
    pub(crate) count: usize,
}


impl GradientHessian {
    pub(crate) fn new(grad: f64, hess: f64) -> Self {
        Self { grad, hess, count: 1 }
    }
}


impl Add for GradientHessian {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            grad: self.grad + rhs.grad,
            hess: self.hess + rhs.hess,
            count: self.count + rhs.count,
        }
    }
}


impl Sub for GradientHessian {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            grad: self.grad - rhs.grad,
            hess: self.hess - rhs.hess,
            count: self.count - rhs.count,
        }
    }
}


/// Binning: A feature processing.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Bin(pub(crate) Range<f64>);

impl Bin {
    /// Create a new instance of `Bin`.
    #[inline(always)]
    pub(crate) fn new(range: Range<f64>) -> Self {
        Self(range)
    }
}


/// A wrapper of `Vec<Bin>`.
/// The bins cover the real line without overlap, in increasing order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Bins(Vec<Bin>);

impl Bins {
    /// Returns the number of bins.
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }


    /// Cut the given `Feature` into `n_bin` bins of the same width.
    /// The left-most bin starts from `f64::MIN` and
    /// the right-most bin ends at `f64::MAX`.
    pub(crate) fn cut(feature: &Feature, n_bin: usize) -> Self {
        let n_bin = n_bin.max(1);
        let (mut min, mut max) = feature.min_max()
            .unwrap_or((0.0, 0.0));


        // If the minimum value equals to the maximum one,
        // slightly perturb them.
        if min == max {
            min -= EPS;
            max += EPS;
        }


        let intercept = (max - min) / n_bin as f64;
        let mut bins = (0..n_bin)
            .map(|i| {
                let left = min + intercept * i as f64;
                let right = min + intercept * (i + 1) as f64;
                Bin::new(left..right)
            })
            .collect::<Vec<_>>();


        // `n_bin >= 1` so that the first/last bins exist.
        if let Some(first) = bins.first_mut() { first.0.start = f64::MIN; }
        if let Some(last) = bins.last_mut() { last.0.end = f64::MAX; }

        Self(bins)
    }


    /// Returns the index of the bin that contains `x`.
    #[inline]
    pub(crate) fn position(&self, x: f64) -> usize {
        self.0.partition_point(|bin| bin.0.end <= x)
            .min(self.0.len() - 1)
    }


    /// The threshold that separates bins `..=k` from bins `k+1..`.
    #[inline]
    pub(crate) fn threshold_after(&self, k: usize) -> f64 {
        self.0[k].0.end
    }


    /// Sums `gh` over `indices` bin by bin.
    /// `positions[i]` is the bin index of row `i`.
    pub(crate) fn pack(
        &self,
        indices: &[usize],
        positions: &[usize],
        gh: &[GradientHessian],
    ) -> Vec<GradientHessian>
    {
        let mut packed = vec![GradientHessian::default(); self.len()];

        for &i in indices {
            let pos = positions[i];
            packed[pos] = packed[pos] + gh[i];
        }
        packed
    }
}


const PRINT_BIN_SIZE: usize = 3;

impl fmt::Display for Bins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bins = &self.0;
        let n_bins = bins.len();
        if n_bins > PRINT_BIN_SIZE {
            let head = bins[..2].iter()
                .map(|bin| format!("{bin}"))
                .collect::<Vec<_>>()
                .join(", ");
            let tail = &bins[n_bins - 1];
            write!(f, "{head},      ...     , {tail}")
        } else {
            let line = bins.iter()
                .map(|bin| format!("{bin}"))
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "{line}")
        }
    }
}


impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = if self.0.start == f64::MIN {
            String::from("-Inf")
        } else {
            format!("{: >+.2}", self.0.start)
        };
        let end = if self.0.end == f64::MAX {
            String::from("+Inf")
        } else {
            format!("{: >+.2}", self.0.end)
        };

        write!(f, "[{start}, {end})")
    }
}
