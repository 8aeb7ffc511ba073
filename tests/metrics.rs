use approx::assert_relative_eq;
use tinygbm::prelude::*;


/// Tests for `roc_auc_score`.
#[cfg(test)]
pub mod roc_auc_tests {
    use super::*;

    #[test]
    fn matches_pairwise_count() {
        let labels = [true, false, true, false, true, false];
        let scores = [0.9, 0.8, 0.7, 0.3, 0.3, 0.1];

        // Count the (positive, negative) pairs ranked correctly,
        // ties count one half.
        let mut correct = 0.0;
        let mut pairs = 0.0;
        for (i, &li) in labels.iter().enumerate() {
            for (j, &lj) in labels.iter().enumerate() {
                if li && !lj {
                    pairs += 1.0;
                    if scores[i] > scores[j] {
                        correct += 1.0;
                    } else if scores[i] == scores[j] {
                        correct += 0.5;
                    }
                }
            }
        }

        let auc = roc_auc_score(&labels, &scores).unwrap();
        assert_relative_eq!(auc, correct / pairs, epsilon = 1e-12);
    }


    #[test]
    fn invariant_under_monotone_maps() {
        let labels = [false, true, true, false, true];
        let scores = [0.2, 0.6, 0.4, 0.5, 0.9];
        let logits = scores.iter()
            .map(|p: &f64| (p / (1.0 - p)).ln())
            .collect::<Vec<_>>();

        let a = roc_auc_score(&labels, &scores).unwrap();
        let b = roc_auc_score(&labels, &logits).unwrap();
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }


    #[test]
    fn rejects_bad_inputs() {
        assert!(matches!(
            roc_auc_score(&[true, false], &[0.5]),
            Err(BoostError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            roc_auc_score(&[false, false], &[0.1, 0.2]),
            Err(BoostError::InvalidSample(_))
        ));
    }


    #[test]
    fn rejects_nan_scores() {
        let labels = [true, false, true, false, true, false, true, false];
        let scores = [0.9, f64::NAN, 0.4, 0.3, f64::NAN, 0.8, 0.1, 0.2];

        assert!(matches!(
            roc_auc_score(&labels, &scores),
            Err(BoostError::InvalidSample(_))
        ));
    }


    #[test]
    fn signed_zeros_are_tied() {
        let labels = [true, false];
        let scores = [0.0, -0.0];

        let auc = roc_auc_score(&labels, &scores).unwrap();
        assert_relative_eq!(auc, 0.5);
    }
}
