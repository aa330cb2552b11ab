use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::config::NodeLimits;
use crate::graph::traits::Graph;
use crate::{Error, Result};

/// Largest accepted edge magnitude. Any path over at most a few thousand edges
/// then sums far below the point where `f64` loses integer precision, let alone overflows.
pub const MAX_ABS_WEIGHT: f64 = 1e12;

/// An immutable directed graph stored as a dense adjacency matrix.
///
/// `weights[i][j] == None` means there is no direct connection from `i` to `j`.
/// The diagonal may hold `Some(0)`, `None` or a negative self-loop.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// City names, one per vertex
    labels: Vec<String>,

    /// Row-major `n x n` weights
    weights: Vec<Vec<Option<W>>>,
}

impl<W> CostMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a graph bounded by the default node limits (2..=10 cities)
    pub fn new(labels: Vec<String>, weights: Vec<Vec<Option<W>>>) -> Result<Self> {
        Self::with_limits(labels, weights, NodeLimits::default())
    }

    /// Creates a graph, checking the node count against `limits`, every row length
    /// and every weight. Labels are trimmed.
    pub fn with_limits(
        labels: Vec<String>,
        weights: Vec<Vec<Option<W>>>,
        limits: NodeLimits,
    ) -> Result<Self> {
        let n = labels.len();
        limits.check(n)?;

        if weights.len() != n {
            return Err(Error::InvalidDimension {
                what: "rows",
                expected: n,
                found: weights.len(),
            });
        }
        if let Some(row) = weights.iter().find(|row| row.len() != n) {
            return Err(Error::InvalidDimension {
                what: "columns",
                expected: n,
                found: row.len(),
            });
        }

        let limit =
            <W as num_traits::NumCast>::from(MAX_ABS_WEIGHT).unwrap_or_else(W::max_value);
        for (row, cells) in weights.iter().enumerate() {
            for (col, weight) in cells.iter().enumerate() {
                if let Some(w) = *weight {
                    if !w.is_finite() || w.abs() > limit {
                        return Err(Error::WeightOutOfRange { row, col });
                    }
                }
            }
        }

        let labels = labels.into_iter().map(|label| label.trim().to_string()).collect();

        Ok(CostMatrix { labels, weights })
    }

    /// The raw rows of the matrix
    pub fn rows(&self) -> &[Vec<Option<W>>] {
        &self.weights
    }

    /// Builds a new matrix with the same labels where every finite entry is
    /// replaced by `f(from, to, weight)`. Missing entries stay missing.
    pub fn map_weights<F>(&self, f: F) -> CostMatrix<W>
    where
        F: Fn(usize, usize, W) -> Option<W>,
    {
        let weights = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, weight)| weight.and_then(|w| f(i, j, w)))
                    .collect()
            })
            .collect();

        CostMatrix {
            labels: self.labels.clone(),
            weights,
        }
    }
}

impl<W> Graph<W> for CostMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    fn edge_count(&self) -> usize {
        self.weights
            .iter()
            .map(|row| row.iter().filter(|w| w.is_some()).count())
            .sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.weights.get(vertex) {
            Some(row) => Box::new(
                row.iter()
                    .enumerate()
                    .filter_map(|(to, weight)| weight.map(|w| (to, w))),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.weights.get(from).and_then(|row| row.get(to).copied().flatten())
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let result = CostMatrix::<f64>::new(
            labels(&["A", "B"]),
            vec![vec![Some(0.0), None], vec![Some(1.0)]],
        );
        assert!(matches!(
            result,
            Err(Error::InvalidDimension { what: "columns", expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_rejects_wrong_row_count() {
        let result = CostMatrix::<f64>::new(labels(&["A", "B"]), vec![vec![Some(0.0), None]]);
        assert!(matches!(
            result,
            Err(Error::InvalidDimension { what: "rows", expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_rejects_single_city() {
        let result = CostMatrix::<f64>::new(labels(&["A"]), vec![vec![Some(0.0)]]);
        assert!(matches!(result, Err(Error::NodeCountOutOfRange { count: 1, .. })));
    }

    #[test]
    fn test_weight_is_bounds_checked() {
        let graph = CostMatrix::new(
            labels(&["A", "B"]),
            vec![vec![Some(0.0), Some(3.0)], vec![None, Some(0.0)]],
        )
        .unwrap();

        assert_eq!(graph.weight(0, 1).unwrap(), Some(3.0));
        assert_eq!(graph.weight(1, 0).unwrap(), None);
        assert!(matches!(
            graph.weight(0, 2),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.outgoing_edges(0).collect::<Vec<_>>(), vec![(0, 0.0), (1, 3.0)]);
    }

    #[test]
    fn test_rejects_unusable_weights() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e13, -1e308] {
            let result = CostMatrix::new(
                labels(&["A", "B"]),
                vec![vec![Some(0.0), None], vec![Some(bad), Some(0.0)]],
            );
            assert!(
                matches!(result, Err(Error::WeightOutOfRange { row: 1, col: 0 })),
                "{}",
                bad
            );
        }

        let edge = CostMatrix::new(
            labels(&["A", "B"]),
            vec![vec![Some(0.0), Some(-MAX_ABS_WEIGHT)], vec![Some(MAX_ABS_WEIGHT), Some(0.0)]],
        );
        assert!(edge.is_ok());
    }

    #[test]
    fn test_labels_are_trimmed() {
        let graph = CostMatrix::<f64>::new(labels(&[" Pune", "Goa\t"]), vec![vec![None; 2]; 2])
            .unwrap();
        assert_eq!(graph.labels(), &["Pune".to_string(), "Goa".to_string()]);
        assert_eq!(graph.index_of("Pune"), Some(0));
        assert_eq!(graph.index_of(" Goa "), Some(1));
    }

    #[test]
    fn test_index_of_trims_and_takes_first_match() {
        let graph = CostMatrix::<f64>::new(
            labels(&["Pune", "Goa", "Pune"]),
            vec![vec![None; 3]; 3],
        )
        .unwrap();

        assert_eq!(graph.index_of("  Pune "), Some(0));
        assert_eq!(graph.index_of("Goa"), Some(1));
        assert_eq!(graph.index_of("Delhi"), None);
    }
}
