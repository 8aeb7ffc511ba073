/// The logistic function `1 / (1 + exp(-z))`.
#[inline]
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}


/// `ln(1 + exp(z))` without overflow for large `z`.
#[inline]
fn softplus(z: f64) -> f64 {
    if z > 0.0 {
        z + (-z).exp().ln_1p()
    } else {
        z.exp().ln_1p()
    }
}


/// This trait defines a loss function for binary classification
/// with labels in `{-1, +1}`.
/// A margin is any real-valued score of a row;
/// the link function maps it to the class-1 probability.
pub trait BinaryLoss {
    /// The name of the loss function.
    fn name(&self) -> &str;


    /// Loss value for a single point.
    fn eval_at_point(&self, target: f64, margin: f64) -> f64;


    /// Mean loss value over the given points.
    fn eval(&self, target: &[f64], margins: &[f64]) -> f64 {
        let n_items = margins.len();

        assert_eq!(n_items, target.len());


        target.iter()
            .zip(margins)
            .map(|(&y, &z)| self.eval_at_point(y, z))
            .sum::<f64>()
            / n_items as f64
    }


    /// Derivative of the loss with respect to the margin
    /// at a single point.
    fn derivative_at_point(&self, target: f64, margin: f64) -> f64;


    /// Gradient vector at the current margins.
    fn gradient(&self, target: &[f64], margins: &[f64]) -> Vec<f64> {
        assert_eq!(margins.len(), target.len());

        target.iter()
            .zip(margins)
            .map(|(&y, &z)| self.derivative_at_point(y, z))
            .collect()
    }


    /// Negative gradient, the regression target for the next
    /// weak hypothesis.
    fn pseudo_residuals(&self, target: &[f64], margins: &[f64]) -> Vec<f64> {
        self.gradient(target, margins)
            .into_iter()
            .map(|g| -g)
            .collect()
    }


    /// Maps a margin to the probability of the positive class.
    fn link(&self, margin: f64) -> f64;
}


/// Logistic loss `-ln(sigmoid(y z))`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogisticLoss;


impl BinaryLoss for LogisticLoss {
    fn name(&self) -> &str {
        "Logistic loss"
    }


    #[inline]
    fn eval_at_point(&self, target: f64, margin: f64) -> f64 {
        // -ln(sigmoid(yz)) = ln(1 + exp(-yz))
        softplus(-target * margin)
    }


    #[inline]
    fn derivative_at_point(&self, target: f64, margin: f64) -> f64 {
        -target * sigmoid(-target * margin)
    }


    #[inline]
    fn link(&self, margin: f64) -> f64 {
        sigmoid(margin)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn softplus_matches_naive_form() {
        for z in [-30.0, -2.5, -0.1, 0.0, 0.3, 4.0, 25.0] {
            let naive = (1.0 + f64::exp(z)).ln();
            assert!((softplus(z) - naive).abs() < 1e-12, "z = {z}");
        }
    }

    #[test]
    fn softplus_does_not_overflow() {
        assert_eq!(softplus(1_000.0), 1_000.0);
        assert_eq!(softplus(-1_000.0), 0.0);
    }
}
