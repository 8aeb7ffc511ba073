//! This file defines split rules for regression tree.
use crate::Sample;


/// The output of the function `split` of `Splitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LR {
    Left,
    Right,
}


/// Sends a row to the left child if its feature value is
/// smaller than `threshold`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Splitter {
    pub(crate) feature: usize,
    pub(crate) name: String,
    pub(crate) threshold: f64,
}


impl Splitter {
    #[inline]
    pub(crate) fn new(feature: usize, name: &str, threshold: f64) -> Self {
        Self { feature, name: name.to_string(), threshold, }
    }


    /// Defines the splitting.
    #[inline]
    pub(crate) fn split(&self, sample: &Sample, row: usize) -> LR {
        let value = sample[self.feature][row];

        if value < self.threshold {
            LR::Left
        } else {
            LR::Right
        }
    }
}
