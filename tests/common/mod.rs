#![allow(dead_code)]

use flight_planner::graph::CostMatrix;

pub const X: Option<f64> = None;

pub fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub fn matrix(names: &[&str], rows: Vec<Vec<Option<f64>>>) -> CostMatrix<f64> {
    CostMatrix::new(labels(names), rows).unwrap()
}

/// Three cities: A -> B (4), B -> C (1), C -> A (2)
pub fn three_cities() -> CostMatrix<f64> {
    matrix(
        &["A", "B", "C"],
        vec![
            vec![Some(0.0), Some(4.0), X],
            vec![X, Some(0.0), Some(1.0)],
            vec![Some(2.0), X, Some(0.0)],
        ],
    )
}

/// 0 -> 1 (1), 1 -> 2 (1), 2 -> 0 (-3)
pub fn negative_triangle() -> CostMatrix<f64> {
    matrix(
        &["A", "B", "C"],
        vec![
            vec![X, Some(1.0), X],
            vec![X, X, Some(1.0)],
            vec![Some(-3.0), X, X],
        ],
    )
}
