//! Grid line search for the step size of a new weak hypothesis.
use rayon::prelude::*;

use super::loss_functions::BinaryLoss;


/// Number of candidate step sizes.
pub const GAMMA_GRID_SIZE: usize = 100;


/// Returns the candidate step sizes `i / 99` for `i = 0, 1, ..., 99`,
/// in increasing order.
pub fn gamma_grid() -> Vec<f64> {
    let last = (GAMMA_GRID_SIZE - 1) as f64;
    (0..GAMMA_GRID_SIZE)
        .map(|i| i as f64 / last)
        .collect()
}


/// Returns the step size in `[0, 1]` that minimizes
/// `loss(target, margins + gamma * predictions)` over [`gamma_grid`].
///
/// Ties go to the smallest step size.
pub fn best_gamma<L>(
    loss: &L,
    target: &[f64],
    margins: &[f64],
    predictions: &[f64],
) -> f64
    where L: BinaryLoss + Sync,
{
    assert_eq!(target.len(), margins.len());
    assert_eq!(target.len(), predictions.len());

    let grid = gamma_grid();
    let losses = grid.par_iter()
        .map(|&gamma| {
            let moved = margins.iter()
                .zip(predictions)
                .map(|(z, p)| z + gamma * p)
                .collect::<Vec<_>>();
            loss.eval(target, &moved[..])
        })
        .collect::<Vec<_>>();

    let mut best = 0;
    for (k, value) in losses.iter().enumerate() {
        let current = losses[best];
        if *value < current || (current.is_nan() && !value.is_nan()) {
            best = k;
        }
    }

    grid[best]
}
