//! Evaluation metrics for binary classifiers.
use crate::{BoostError, Result};


/// Area under the ROC curve.
///
/// `labels[i]` is `true` for a positive example and
/// `scores[i]` is any score that increases with the positive class
/// (e.g., a probability). Tied scores share their average rank.
///
/// Fails when the lengths differ, when only one class is present,
/// or when a score is `NaN`.
pub fn roc_auc_score(labels: &[bool], scores: &[f64]) -> Result<f64> {
    let n_items = scores.len();
    if n_items != labels.len() {
        return Err(BoostError::DimensionMismatch {
            expected: labels.len(), got: n_items,
        });
    }

    let n_pos = labels.iter().filter(|&&l| l).count();
    let n_neg = n_items - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return Err(BoostError::InvalidSample(
            "ROC AUC is undefined when only one class is present".into()
        ));
    }

    if scores.iter().any(|s| s.is_nan()) {
        return Err(BoostError::InvalidSample(
            "ROC AUC is undefined for NaN scores".into()
        ));
    }


    // Ascending order of the scores.
    let mut indices = (0..n_items).collect::<Vec<usize>>();
    indices.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));


    let mut rank_sum_pos = 0.0_f64;
    let mut i = 0;
    while i < n_items {
        let mut j = i + 1;
        while j < n_items && scores[indices[j]] == scores[indices[i]] {
            j += 1;
        }

        // 1-indexed ranks `i+1, ..., j` share their average.
        let avg_rank = (i + 1 + j) as f64 / 2.0;
        let n_pos_in_group = indices[i..j].iter()
            .filter(|&&k| labels[k])
            .count();
        rank_sum_pos += avg_rank * n_pos_in_group as f64;

        i = j;
    }

    let n_pos = n_pos as f64;
    let n_neg = n_neg as f64;
    let u = rank_sum_pos - n_pos * (n_pos + 1.0) / 2.0;

    Ok(u / (n_pos * n_neg))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_ranking() {
        let labels = [false, false, true, true];
        let scores = [0.1, 0.2, 0.8, 0.9];
        assert_eq!(roc_auc_score(&labels, &scores).unwrap(), 1.0);
    }

    #[test]
    fn reversed_ranking() {
        let labels = [true, true, false, false];
        let scores = [0.1, 0.2, 0.8, 0.9];
        assert_eq!(roc_auc_score(&labels, &scores).unwrap(), 0.0);
    }

    #[test]
    fn ties_count_half() {
        let labels = [true, false];
        let scores = [0.5, 0.5];
        assert_eq!(roc_auc_score(&labels, &scores).unwrap(), 0.5);
    }

    #[test]
    fn known_value() {
        // Same as sklearn's `roc_auc_score([0, 0, 1, 1], [0.1, 0.4, 0.35, 0.8])`.
        let labels = [false, false, true, true];
        let scores = [0.1, 0.4, 0.35, 0.8];
        let auc = roc_auc_score(&labels, &scores).unwrap();
        assert!((auc - 0.75).abs() < 1e-12);
    }

    #[test]
    fn single_class_is_rejected() {
        let labels = [true, true];
        let scores = [0.1, 0.2];
        assert!(roc_auc_score(&labels, &scores).is_err());
    }
}
