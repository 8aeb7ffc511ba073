use polars::prelude::*;

use crate::{BoostError, Result};

use std::ops::Index;

const BUF_SIZE: usize = 256;


/// A named, dense column of feature values.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Feature name
    pub(crate) name: String,
    /// Feature values.
    pub(crate) sample: Vec<f64>,
}


impl Feature {
    /// Construct an empty feature with `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            sample: Vec::with_capacity(BUF_SIZE),
        }
    }


    /// Construct a feature from its values.
    pub fn from_vec<T: ToString>(name: T, sample: Vec<f64>) -> Self {
        Self { name: name.to_string(), sample, }
    }


    /// Convert `polars::Series` into `Feature`.
    /// Numeric columns are cast to `f64`.
    /// Missing values are rejected.
    pub fn from_series(series: &Series) -> Result<Self> {
        let name = series.name().to_string();

        let casted = series.cast(&DataType::Float64)?;
        let sample = casted.f64()?
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| BoostError::InvalidSample(
                format!("column `{name}` contains missing values")
            ))?;

        Ok(Self { name, sample, })
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    pub(super) fn replace_name<S>(&mut self, name: S) -> String
        where S: ToString,
    {
        std::mem::replace(&mut self.name, name.to_string())
    }


    pub(crate) fn into_target(self) -> Vec<f64> {
        self.sample
    }


    /// Append an example to this feature.
    pub fn append(&mut self, x: f64) {
        self.sample.push(x);
    }


    /// Returns the feature values.
    pub fn values(&self) -> &[f64] {
        &self.sample[..]
    }


    /// Returns the number of items in this feature.
    pub fn len(&self) -> usize {
        self.sample.len()
    }


    /// Returns `true` if this feature holds no value.
    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }


    /// Returns the number of distinct values of this feature.
    pub fn distinct_value_count(&self) -> usize {
        let mut values = self.sample.clone();
        values.sort_by(|a, b| a.total_cmp(b));
        values.dedup();
        values.len()
    }


    /// Returns the minimum and the maximum value of this feature.
    /// Returns `None` for an empty feature.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        if self.is_empty() { return None; }

        let mut min = f64::MAX;
        let mut max = f64::MIN;
        self.sample.iter()
            .copied()
            .for_each(|val| {
                min = min.min(val);
                max = max.max(val);
            });
        Some((min, max))
    }


    /// Returns a new feature that holds the rows in `indices`.
    pub(crate) fn gather(&self, indices: &[usize]) -> Self {
        let sample = indices.iter()
            .map(|&i| self.sample[i])
            .collect();
        Self { name: self.name.clone(), sample, }
    }
}


impl Index<usize> for Feature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.sample[idx]
    }
}
