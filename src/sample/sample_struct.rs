use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::collections::HashMap;
use std::ops::Index;

use polars::prelude::*;
use rayon::prelude::*;

use crate::{BoostError, Result};
use super::feature::*;


/// Struct `Sample` holds a batch sample:
/// named dense feature columns and a target vector.
///
/// For binary classification the targets must be `-1.0` or `+1.0`.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<f64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct `Sample` from row-major feature vectors.
    /// Features are named `Feat. [1]`, `Feat. [2]`, ... .
    pub fn from_rows<R>(rows: &[R], target: Vec<f64>) -> Result<Self>
        where R: AsRef<[f64]>,
    {
        let n_sample = rows.len();
        if n_sample != target.len() {
            return Err(BoostError::DimensionMismatch {
                expected: n_sample, got: target.len(),
            });
        }

        let n_feature = rows.first()
            .map(|row| row.as_ref().len())
            .unwrap_or(0);
        let mut features = (1..=n_feature)
            .map(|i| Feature::new(format!("Feat. [{i}]")))
            .collect::<Vec<_>>();

        for row in rows {
            let row = row.as_ref();
            if row.len() != n_feature {
                return Err(BoostError::DimensionMismatch {
                    expected: n_feature, got: row.len(),
                });
            }
            features.iter_mut()
                .zip(row)
                .for_each(|(feat, &x)| { feat.append(x); });
        }

        Ok(Self::from_components(features, target, n_sample))
    }


    /// Construct `Sample` from named feature columns.
    pub fn from_columns<S>(
        names: &[S],
        columns: Vec<Vec<f64>>,
        target: Vec<f64>,
    ) -> Result<Self>
        where S: AsRef<str>,
    {
        if names.len() != columns.len() {
            return Err(BoostError::DimensionMismatch {
                expected: columns.len(), got: names.len(),
            });
        }
        let n_sample = target.len();
        let features = names.iter()
            .zip(columns)
            .map(|(name, column)| {
                if column.len() != n_sample {
                    return Err(BoostError::DimensionMismatch {
                        expected: n_sample, got: column.len(),
                    });
                }
                Ok(Feature::from_vec(name.as_ref(), column))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_components(features, target, n_sample))
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    pub fn from_dataframe(data: DataFrame, target: Series) -> Result<Self> {
        let n_sample = data.height();
        let target = Feature::from_series(&target)?.into_target();
        if n_sample != target.len() {
            return Err(BoostError::DimensionMismatch {
                expected: n_sample, got: target.len(),
            });
        }

        let features = data.get_columns()
            .into_par_iter()
            .map(Feature::from_series)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_components(features, target, n_sample))
    }


    /// Read a CSV format file to `Sample` type.
    /// The target is not specified at this point.
    /// Use [`Sample::set_target`] to pick the label column.
    pub fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        // Open the given `file`.
        let file = File::open(file)?;
        let mut lines = BufReader::new(file).lines();

        let mut features: Vec<Feature> = Vec::new();
        if has_header {
            if let Some(line) = lines.next() {
                features = line?.split(',')
                    .map(|name| Feature::new(name.trim()))
                    .collect::<Vec<_>>();
            }
        }
        let mut n_sample = 0_usize;

        // For each line of the file
        for (k, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let xs = line.split(',')
                .map(|x| {
                    x.trim().parse::<f64>()
                        .map_err(|_| BoostError::InvalidSample(
                            format!("cannot parse `{x}` at line {}", k + 1)
                        ))
                })
                .collect::<Result<Vec<_>>>()?;

            // if the header does not exist,
            // construct a dummy header.
            if features.is_empty() {
                features = (1..=xs.len())
                    .map(|i| Feature::new(format!("Feat. [{i}]")))
                    .collect::<Vec<_>>();
            }

            if xs.len() != features.len() {
                return Err(BoostError::DimensionMismatch {
                    expected: features.len(), got: xs.len(),
                });
            }
            features.iter_mut()
                .zip(xs)
                .for_each(|(feat, x)| { feat.append(x); });

            n_sample += 1;
        }

        Ok(Self::from_components(features, Vec::with_capacity(0), n_sample))
    }


    fn from_components(
        features: Vec<Feature>,
        target: Vec<f64>,
        n_sample: usize,
    ) -> Self
    {
        let n_feature = features.len();
        let name_to_index = index_by_name(&features);

        Self { name_to_index, features, target, n_sample, n_feature, }
    }


    /// Returns a slice of type `f64`.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Set the feature of name `target` to `self.target`.
    /// The old value assigned to `self.target` will be dropped.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Result<Self> {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .ok_or_else(|| BoostError::InvalidSample(
                format!("the column `{target}` does not exist")
            ))?;


        self.target = self.features.remove(pos).into_target();
        self.n_feature -= 1;
        self.name_to_index = index_by_name(&self.features);

        Ok(self)
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Set the feature (column) names and returns the old ones.
    pub fn replace_names<S>(&mut self, names: &[S]) -> Result<Vec<String>>
        where S: ToString,
    {
        let n_features = self.shape().1;
        if n_features != names.len() {
            return Err(BoostError::DimensionMismatch {
                expected: n_features, got: names.len(),
            });
        }

        let old_names = names.iter()
            .zip(&mut self.features[..])
            .map(|(name, feature)| feature.replace_name(name.to_string()))
            .collect();

        self.name_to_index = index_by_name(&self.features);
        Ok(old_names)
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (Vec<f64>, f64) {
        let x = self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>();
        let y = self.target[idx];

        (x, y)
    }


    /// Returns a new sample made of the rows in `indices`.
    /// Indices may repeat, which is how bootstrap samples are built.
    pub fn subsample(&self, indices: &[usize]) -> Self {
        let features = self.features.iter()
            .map(|feat| feat.gather(indices))
            .collect::<Vec<_>>();
        let target = if self.target.is_empty() {
            Vec::with_capacity(0)
        } else {
            indices.iter().map(|&i| self.target[i]).collect()
        };

        Self {
            name_to_index: self.name_to_index.clone(),
            features,
            target,
            n_sample: indices.len(),
            n_feature: self.n_feature,
        }
    }


    fn target_is_specified(&self) -> Result<()> {
        let n_sample = self.shape().0;

        if n_sample != self.target.len() {
            return Err(BoostError::InvalidSample(
                "the target is not specified. \
                 Use `Sample::set_target(\"Column Name\")`.".into()
            ));
        }
        Ok(())
    }


    /// Check whether `self` is
    /// a sample for binary classification with labels in `{-1, +1}`.
    pub fn check_binary_labels(&self) -> Result<()> {
        self.target_is_specified()?;

        let invalid = self.target.iter()
            .filter(|&&y| y != 1.0 && y != -1.0)
            .take(5)
            .map(|y| y.to_string())
            .collect::<Vec<_>>();
        if !invalid.is_empty() {
            let line = invalid.join(", ");
            return Err(BoostError::InvalidSample(format!(
                "target values must be -1.0 or +1.0. Ex. [{line}, ...]"
            )));
        }
        Ok(())
    }
}


fn index_by_name(features: &[Feature]) -> HashMap<String, usize> {
    features.iter()
        .enumerate()
        .map(|(i, f)| (f.name().to_string(), i))
        .collect()
}


impl Index<usize> for Sample {
    type Output = Feature;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.features[idx]
    }
}


impl Index<&str> for Sample {
    type Output = Feature;

    fn index(&self, name: &str) -> &Self::Output {
        let k = self.name_to_index[name];
        &self.features[k]
    }
}
