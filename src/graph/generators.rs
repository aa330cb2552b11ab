use rand::prelude::*;
use std::ops::Range;

use crate::config::NodeLimits;
use crate::graph::{CostMatrix, MAX_ABS_WEIGHT};

/// Generates a random cost matrix with `n` cities.
///
/// Each off-diagonal edge exists with probability `density`, with an integer
/// weight drawn from `weights`. The diagonal is always zero.
pub fn generate_random_matrix<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    density: f64,
    weights: Range<i64>,
) -> CostMatrix<f64> {
    assert!(n >= 2, "n must be at least 2");
    assert!((0.0..=1.0).contains(&density), "density must be a probability");
    assert!(!weights.is_empty(), "weight range must be non-empty");
    assert!(
        weights.start.unsigned_abs() as f64 <= MAX_ABS_WEIGHT
            && (weights.end - 1).unsigned_abs() as f64 <= MAX_ABS_WEIGHT,
        "weights must stay within ±{}",
        MAX_ABS_WEIGHT
    );

    let labels = (0..n).map(|i| format!("City {}", i)).collect();
    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        Some(0.0)
                    } else if rng.gen_bool(density) {
                        Some(rng.gen_range(weights.clone()) as f64)
                    } else {
                        None
                    }
                })
                .collect()
        })
        .collect();

    CostMatrix::with_limits(labels, rows, NodeLimits::unbounded())
        .expect("generated matrix is square with bounded weights")
}

/// Generates a random matrix with non-negative weights in `1..100`
pub fn generate_flight_network(n: usize, density: f64) -> CostMatrix<f64> {
    let mut rng = rand::thread_rng();
    generate_random_matrix(&mut rng, n, density, 1..100)
}
