use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{DistanceMatrix, Outcome, ShortestPathAlgorithm, ShortestPathResult};
use crate::Result;

/// Floyd-Warshall all-pairs shortest paths.
///
/// Before relaxing, every diagonal entry is clamped to `min(weight[i][i], 0)` so a
/// city can always "stay put" for free. A negative diagonal afterwards means a
/// negative cycle, and the whole matrix is discarded.
#[derive(Debug, Default)]
pub struct FloydWarshall;

impl FloydWarshall {
    pub fn new() -> Self {
        FloydWarshall
    }

    /// Computes distances between every ordered pair of vertices
    pub fn compute_all_pairs<W, G>(&self, graph: &G) -> Outcome<DistanceMatrix<W>>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        let n = graph.vertex_count();

        let mut distances: Vec<Vec<Option<W>>> = vec![vec![None; n]; n];
        let mut predecessors: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];

        for u in 0..n {
            for (v, weight) in graph.outgoing_edges(u) {
                distances[u][v] = Some(weight);
                if u != v {
                    predecessors[u][v] = Some(u);
                }
            }
        }

        for (i, row) in distances.iter_mut().enumerate() {
            row[i] = Some(row[i].map_or(W::zero(), |w| w.min(W::zero())));
        }

        for k in 0..n {
            for i in 0..n {
                let d_ik = match distances[i][k] {
                    Some(d) => d,
                    None => continue,
                };
                for j in 0..n {
                    let d_kj = match distances[k][j] {
                        Some(d) => d,
                        None => continue,
                    };
                    let through_k = d_ik + d_kj;
                    let improves = match distances[i][j] {
                        None => true,
                        Some(current) => through_k < current,
                    };
                    if improves {
                        distances[i][j] = Some(through_k);
                        predecessors[i][j] = predecessors[k][j];
                    }
                }
            }
        }

        let cycle_at = (0..n).find(|&i| matches!(distances[i][i], Some(d) if d < W::zero()));
        if let Some(vertex) = cycle_at {
            log::warn!("Floyd-Warshall: negative-weight cycle through vertex {}", vertex);
            return Outcome::NegativeCycleDetected;
        }

        log::debug!("Floyd-Warshall computed {}x{} distance matrix", n, n);
        Outcome::Converged(DistanceMatrix {
            distances,
            predecessors,
        })
    }
}

/// Single-source view: row `source` of the all-pairs matrix.
/// Any negative cycle anywhere in the graph invalidates the result.
impl<W, G> ShortestPathAlgorithm<W, G> for FloydWarshall
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: usize,
    ) -> Result<Outcome<ShortestPathResult<W>>> {
        graph.check_vertex(source)?;

        match self.compute_all_pairs(graph) {
            Outcome::Converged(matrix) => Ok(Outcome::Converged(matrix.row(source)?)),
            Outcome::NegativeCycleDetected => Ok(Outcome::NegativeCycleDetected),
        }
    }
}
