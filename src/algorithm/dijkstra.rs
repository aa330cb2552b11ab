use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{Outcome, ShortestPathAlgorithm, ShortestPathResult};
use crate::{Error, Result};

/// Dijkstra's algorithm with a linear-scan minimum selection.
///
/// Cost matrices hold at most a handful of cities, so picking the next vertex by
/// scanning all of them (O(n²) overall) beats maintaining a heap.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

/// Index of the unvisited vertex with the smallest finite distance, lowest index on ties
fn closest_unvisited<W: Float>(distances: &[Option<W>], visited: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, W)> = None;
    for (v, distance) in distances.iter().enumerate() {
        if visited[v] {
            continue;
        }
        if let Some(d) = *distance {
            match best {
                Some((_, best_d)) if best_d <= d => {}
                _ => best = Some((v, d)),
            }
        }
    }
    best.map(|(v, _)| v)
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: usize,
    ) -> Result<Outcome<ShortestPathResult<W>>> {
        graph.check_vertex(source)?;

        if let Some((from, to)) = graph.find_negative_edge() {
            return Err(Error::NegativeEdgeNotSupported { from, to });
        }

        let n = graph.vertex_count();

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];

        distances[source] = Some(W::zero());

        for _ in 0..n {
            let u = match closest_unvisited(&distances, &visited) {
                Some(u) => u,
                None => break,
            };
            visited[u] = true;

            let dist_u = match distances[u] {
                Some(d) => d,
                None => break,
            };

            for (v, weight) in graph.outgoing_edges(u) {
                if visited[v] {
                    continue;
                }

                let new_dist = dist_u + weight;
                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                }
            }
        }

        log::debug!(
            "Dijkstra from {} reached {} of {} vertices",
            source,
            distances.iter().filter(|d| d.is_some()).count(),
            n
        );

        Ok(Outcome::Converged(ShortestPathResult {
            distances,
            predecessors,
            source,
        }))
    }
}
