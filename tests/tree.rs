use std::env;
use std::fs;

use approx::assert_relative_eq;
use tinygbm::prelude::*;


fn step_sample() -> (Sample, Vec<f64>) {
    let rows = (0..20).map(|i| [i as f64, 1.0])
        .collect::<Vec<_>>();
    let target = (0..20).map(|i| if i < 10 { -1.0 } else { 1.0 })
        .collect::<Vec<_>>();
    let residuals = (0..20).map(|i| if i < 10 { -1.0 } else { 2.0 })
        .collect::<Vec<_>>();
    let sample = Sample::from_rows(&rows, target).unwrap();
    (sample, residuals)
}


/// Tests for `RegressionTree`.
#[cfg(test)]
pub mod regression_tree_tests {
    use super::*;

    #[test]
    fn fits_a_step_function() {
        let (sample, residuals) = step_sample();
        let tree = RegressionTreeBuilder::new()
            .max_depth(1)
            .build()
            .unwrap();

        let f = tree.produce(&sample, &residuals).unwrap();
        assert_eq!(f.leaves(), 2);
        assert_eq!(f.depth(), 1);

        let predictions = f.predict_all(&sample);
        for (p, r) in predictions.into_iter().zip(residuals) {
            assert_relative_eq!(p, r, epsilon = 1e-12);
        }
    }


    #[test]
    fn importance_goes_to_the_informative_feature() {
        let (sample, residuals) = step_sample();
        let tree = RegressionTreeBuilder::new().build().unwrap();

        let f = tree.produce(&sample, &residuals).unwrap();
        let importances = f.feature_importances();

        assert_eq!(importances.len(), 2);
        assert_relative_eq!(importances[0], 1.0);
        assert_relative_eq!(importances[1], 0.0);
    }


    #[test]
    fn depth_zero_is_a_single_leaf() {
        let (sample, residuals) = step_sample();
        let tree = RegressionTreeBuilder::new()
            .max_depth(0)
            .build()
            .unwrap();

        let f = tree.produce(&sample, &residuals).unwrap();
        assert_eq!(f.leaves(), 1);
        assert_eq!(f.depth(), 0);
        assert!(f.feature_importances().iter().all(|&v| v == 0.0));

        let mean = residuals.iter().sum::<f64>() / residuals.len() as f64;
        assert_relative_eq!(f.predict(&sample, 0), mean, epsilon = 1e-12);
    }


    #[test]
    fn min_samples_leaf_blocks_small_children() {
        let (sample, residuals) = step_sample();
        let tree = RegressionTreeBuilder::new()
            .min_samples_leaf(11)
            .build()
            .unwrap();

        let f = tree.produce(&sample, &residuals).unwrap();
        assert_eq!(f.leaves(), 1);
    }


    #[test]
    fn lambda_shrinks_the_leaves() {
        let (sample, residuals) = step_sample();
        let tree = RegressionTreeBuilder::new()
            .max_depth(1)
            .lambda_l2(10.0)
            .build()
            .unwrap();

        let f = tree.produce(&sample, &residuals).unwrap();
        // Right leaf: sum = 20, count = 10.
        assert_relative_eq!(f.predict(&sample, 19), 20.0 / 20.0, epsilon = 1e-12);
    }


    #[test]
    fn rejects_a_target_of_wrong_length() {
        let (sample, _) = step_sample();
        let tree = RegressionTreeBuilder::new().build().unwrap();

        let result = tree.produce(&sample, &[1.0, 2.0]);
        assert!(matches!(result, Err(BoostError::DimensionMismatch { .. })));
    }


    #[test]
    fn builder_reads_json_params() {
        let params = serde_json::json!({ "max_depth": 2, "n_bins": 16 });
        let from_json = RegressionTreeBuilder::from_params(
            params.as_object().unwrap()
        ).unwrap();
        let by_hand = RegressionTreeBuilder::new()
            .max_depth(2)
            .n_bins(16);

        assert_eq!(from_json, by_hand);
    }


    #[test]
    fn builder_rejects_unknown_params() {
        let params = serde_json::json!({ "max_dept": 2 });
        let result = RegressionTreeBuilder::from_params(
            params.as_object().unwrap()
        );
        assert!(matches!(result, Err(BoostError::InvalidConfiguration(_))));

        let params = serde_json::json!({ "max_depth": "deep" });
        let result = RegressionTreeBuilder::from_params(
            params.as_object().unwrap()
        );
        assert!(matches!(result, Err(BoostError::InvalidConfiguration(_))));
    }


    #[test]
    fn builder_rejects_out_of_range_params() {
        assert!(RegressionTreeBuilder::new().n_bins(0).build().is_err());
        assert!(RegressionTreeBuilder::new().min_samples_leaf(0).build().is_err());
        assert!(RegressionTreeBuilder::new().min_samples_split(1).build().is_err());
        assert!(RegressionTreeBuilder::new().lambda_l2(-1.0).build().is_err());
    }


    #[test]
    fn writes_a_dot_file() {
        let (sample, residuals) = step_sample();
        let tree = RegressionTreeBuilder::new()
            .max_depth(1)
            .build()
            .unwrap();
        let f = tree.produce(&sample, &residuals).unwrap();

        let mut path = env::temp_dir();
        path.push("tinygbm_tree.dot");
        f.to_dot_file(&path).unwrap();

        let dot = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(dot.starts_with("graph RegressionTree {"));
        assert!(dot.trim_end().ends_with('}'));
    }
}
