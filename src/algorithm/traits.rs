use std::collections::HashSet;
use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::graph::Graph;
use crate::{Error, Result};

/// How a relaxation-based algorithm finished.
///
/// A negative cycle is a normal result, not an error: the caller gets no
/// distances at all, because none of them would be meaningful.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Relaxation reached a fixed point
    Converged(T),
    /// A negative-weight cycle makes shortest paths unbounded
    NegativeCycleDetected,
}

impl<T> Outcome<T> {
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, Outcome::NegativeCycleDetected)
    }

    /// The converged value, if any
    pub fn converged(self) -> Option<T> {
        match self {
            Outcome::Converged(value) => Some(value),
            Outcome::NegativeCycleDetected => None,
        }
    }

    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Converged(value) => Outcome::Converged(value),
            Outcome::NegativeCycleDetected => Outcome::NegativeCycleDetected,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Converged(value) => Outcome::Converged(f(value)),
            Outcome::NegativeCycleDetected => Outcome::NegativeCycleDetected,
        }
    }

    /// Converts the cycle tag into [`Error::NegativeCycleDetected`] for callers
    /// that want to propagate it with `?`
    pub fn into_result(self) -> Result<T> {
        match self {
            Outcome::Converged(value) => Ok(value),
            Outcome::NegativeCycleDetected => Err(Error::NegativeCycleDetected),
        }
    }
}

/// Result of a single-source shortest path algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex, `None` if unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn distance(&self, target: usize) -> Option<W> {
        self.distances.get(target).copied().flatten()
    }

    /// Number of reachable vertices, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Reconstructs the vertex sequence from source to target
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if target >= self.predecessors.len() || self.distances[target].is_none() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        while current != self.source {
            if !visited.insert(current) {
                log::warn!("Cycle detected in path reconstruction at vertex {}", current);
                return None;
            }

            path.push(current);
            match self.predecessors[current] {
                Some(pred) => current = pred,
                None => {
                    log::warn!("Vertex {} has a distance but no predecessor", current);
                    return None;
                }
            }
        }

        path.push(self.source);
        path.reverse();

        Some(path)
    }
}

/// All-pairs distances, one row per source
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub distances: Vec<Vec<Option<W>>>,

    /// `predecessors[i][j]` is the vertex before `j` on the best `i -> j` path
    pub predecessors: Vec<Vec<Option<usize>>>,
}

impl<W> DistanceMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    pub fn distance(&self, from: usize, to: usize) -> Option<W> {
        self.distances.get(from).and_then(|row| row.get(to).copied().flatten())
    }

    /// The single-source view of row `source`
    pub fn row(&self, source: usize) -> Result<ShortestPathResult<W>> {
        if source >= self.vertex_count() {
            return Err(Error::IndexOutOfRange {
                index: source,
                len: self.vertex_count(),
            });
        }

        Ok(ShortestPathResult {
            distances: self.distances[source].clone(),
            predecessors: self.predecessors[source].clone(),
            source,
        })
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: usize,
    ) -> Result<Outcome<ShortestPathResult<W>>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
