use approx::assert_relative_eq;
use tinygbm::prelude::*;
use tinygbm::common::sigmoid;


#[derive(Debug, Clone, PartialEq)]
struct Constant {
    value: f64,
    importances: Vec<f64>,
}


impl Constant {
    fn new(value: f64, importances: Vec<f64>) -> Self {
        Self { value, importances }
    }
}


impl Regressor for Constant {
    fn predict(&self, _sample: &Sample, _row: usize) -> f64 {
        self.value
    }
}


impl FeatureImportance for Constant {
    fn feature_importances(&self) -> Vec<f64> {
        self.importances.clone()
    }
}


fn toy_sample() -> Sample {
    let rows = vec![[0.0, 1.0], [1.0, 0.0], [2.0, 2.0]];
    Sample::from_rows(&rows, vec![-1.0, 1.0, 1.0]).unwrap()
}


/// Tests for `WeightedEnsemble`.
#[cfg(test)]
pub mod weighted_ensemble_tests {
    use super::*;

    #[test]
    fn empty_ensemble() {
        let sample = toy_sample();
        let f = WeightedEnsemble::<Constant>::new();

        assert!(f.is_empty());
        assert_eq!(f.margins(&sample), vec![0.0; 3]);
        assert!(matches!(
            f.predict_proba(&sample),
            Err(BoostError::EmptyEnsemble)
        ));
        assert!(matches!(
            f.feature_importances(),
            Err(BoostError::EmptyEnsemble)
        ));
    }


    #[test]
    fn push_keeps_weights_and_hypotheses_aligned() {
        let mut f = WeightedEnsemble::new();
        for t in 0..5 {
            f.push(0.1 * t as f64, Constant::new(t as f64, vec![1.0]));
            assert_eq!(f.weights().len(), f.hypotheses().len());
            assert_eq!(f.len(), t + 1);
        }

        let (weights, hypotheses) = f.decompose();
        assert_eq!(weights.len(), 5);
        assert_eq!(hypotheses[3].value, 3.0);
    }


    #[test]
    fn margins_are_weighted_sums() {
        let sample = toy_sample();
        let mut f = WeightedEnsemble::new();
        f.push(0.5, Constant::new(2.0, vec![1.0, 0.0]));
        f.push(0.25, Constant::new(-4.0, vec![1.0, 0.0]));

        for z in f.margins(&sample) {
            assert_relative_eq!(z, 0.0, epsilon = 1e-12);
        }
        assert_relative_eq!(f.predict(&sample, 1), 0.0, epsilon = 1e-12);
    }


    #[test]
    fn proba_rows_sum_to_one() {
        let sample = toy_sample();
        let mut f = WeightedEnsemble::new();
        f.push(0.3, Constant::new(1.7, vec![1.0, 0.0]));
        f.push(0.1, Constant::new(-0.4, vec![0.0, 1.0]));

        let margin = 0.3 * 1.7 + 0.1 * -0.4;
        for [q, p] in f.predict_proba(&sample).unwrap() {
            assert_relative_eq!(p + q, 1.0, epsilon = 1e-12);
            assert_relative_eq!(p, sigmoid(margin), epsilon = 1e-12);
        }
    }


    #[test]
    fn importances_are_summed_then_normalized() {
        let mut f = WeightedEnsemble::new();
        f.push(1.0, Constant::new(0.0, vec![1.0, 0.0]));
        f.push(1.0, Constant::new(0.0, vec![0.5, 0.5]));

        let importances = f.feature_importances().unwrap();
        assert_relative_eq!(importances[0], 0.75);
        assert_relative_eq!(importances[1], 0.25);
        assert_relative_eq!(importances.iter().sum::<f64>(), 1.0);
    }


    #[test]
    fn all_zero_importances_fail() {
        let mut f = WeightedEnsemble::new();
        f.push(1.0, Constant::new(0.0, vec![0.0, 0.0]));

        assert!(matches!(
            f.feature_importances(),
            Err(BoostError::ZeroImportance)
        ));
    }


    #[test]
    fn importances_of_different_lengths_fail() {
        let mut f = WeightedEnsemble::new();
        f.push(1.0, Constant::new(0.0, vec![1.0, 0.0]));
        f.push(1.0, Constant::new(0.0, vec![1.0]));

        assert!(matches!(
            f.feature_importances(),
            Err(BoostError::DimensionMismatch { expected: 2, got: 1 })
        ));
    }
}
