use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{Outcome, ShortestPathAlgorithm, ShortestPathResult};
use crate::Result;

/// Bellman-Ford single-source shortest paths, tolerating negative edges.
///
/// Runs at most `n - 1` passes over every edge whose tail is reachable, stopping
/// early once a pass changes nothing. One extra pass follows: if any edge can
/// still be relaxed, a negative cycle is reachable from the source.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    pub fn new() -> Self {
        BellmanFord
    }
}

/// One relaxation pass. Returns true if any distance improved.
fn relax_all<W, G>(
    graph: &G,
    distances: &mut [Option<W>],
    predecessors: &mut [Option<usize>],
) -> bool
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    let mut changed = false;
    for u in 0..graph.vertex_count() {
        // Read per edge: earlier relaxations in this pass are visible
        for (v, weight) in graph.outgoing_edges(u) {
            let dist_u = match distances[u] {
                Some(d) => d,
                None => break,
            };
            let candidate = dist_u + weight;
            let improves = match distances[v] {
                None => true,
                Some(current) => candidate < current,
            };
            if improves {
                distances[v] = Some(candidate);
                predecessors[v] = Some(u);
                changed = true;
            }
        }
    }
    changed
}

/// Whether any edge out of a reachable vertex still offers an improvement
fn can_relax<W, G>(graph: &G, distances: &[Option<W>]) -> bool
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    (0..graph.vertex_count()).any(|u| match distances[u] {
        None => false,
        Some(dist_u) => graph.outgoing_edges(u).any(|(v, weight)| match distances[v] {
            None => true,
            Some(current) => dist_u + weight < current,
        }),
    })
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: usize,
    ) -> Result<Outcome<ShortestPathResult<W>>> {
        graph.check_vertex(source)?;

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Some(W::zero());

        let mut passes = 0;
        for _ in 0..n.saturating_sub(1) {
            passes += 1;
            if !relax_all(graph, &mut distances, &mut predecessors) {
                break;
            }
        }
        log::debug!("Bellman-Ford from {} settled after {} pass(es)", source, passes);

        if can_relax(graph, &distances) {
            log::warn!("Bellman-Ford: negative-weight cycle reachable from {}", source);
            return Ok(Outcome::NegativeCycleDetected);
        }

        Ok(Outcome::Converged(ShortestPathResult {
            distances,
            predecessors,
            source,
        }))
    }
}
