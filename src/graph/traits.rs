use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::{Error, Result};

/// Trait representing a weighted directed graph of labelled cities
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of finite entries, self-loops included
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;

    /// Display names of the vertices, indexed by vertex ID
    fn labels(&self) -> &[String];

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Bounds-checked weight lookup. `Ok(None)` means "no direct edge".
    fn weight(&self, from: usize, to: usize) -> Result<Option<W>> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.get_edge_weight(from, to))
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: vertex,
                len: self.vertex_count(),
            })
        }
    }

    fn label(&self, vertex: usize) -> Result<&str> {
        self.check_vertex(vertex)?;
        Ok(self.labels()[vertex].as_str())
    }

    /// First vertex whose label matches `name` after trimming
    fn index_of(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.labels().iter().position(|label| label == name)
    }

    /// Finds the first finite edge with a negative weight, diagonal included
    fn find_negative_edge(&self) -> Option<(usize, usize)> {
        (0..self.vertex_count()).find_map(|u| {
            self.outgoing_edges(u)
                .find(|(_, weight)| *weight < W::zero())
                .map(|(v, _)| (u, v))
        })
    }
}
