pub mod traits;
pub mod dijkstra;
pub mod bellman_ford;
pub mod floyd_warshall;

use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

pub use traits::{DistanceMatrix, Outcome, ShortestPathAlgorithm, ShortestPathResult};

use crate::graph::Graph;
use crate::{Error, Result};
use bellman_ford::BellmanFord;
use dijkstra::Dijkstra;
use floyd_warshall::FloydWarshall;

/// Selects one of the three interchangeable shortest-path algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Single source, non-negative weights only
    Dijkstra,
    /// Single source, negative weights allowed, reports negative cycles
    BellmanFord,
    /// All pairs, reports negative cycles
    FloydWarshall,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Dijkstra,
        Algorithm::BellmanFord,
        Algorithm::FloydWarshall,
    ];

    /// Human-readable name, as stored alongside priced routes
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::BellmanFord => "Bellman-Ford",
            Algorithm::FloydWarshall => "Floyd-Warshall",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman-ford",
            Algorithm::FloydWarshall => "floyd-warshall",
        }
    }

    /// Runs the selected algorithm from `source`
    pub fn run<W, G>(&self, graph: &G, source: usize) -> Result<Outcome<ShortestPathResult<W>>>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        match self {
            Algorithm::Dijkstra => Dijkstra::new().compute_shortest_paths(graph, source),
            Algorithm::BellmanFord => BellmanFord::new().compute_shortest_paths(graph, source),
            Algorithm::FloydWarshall => FloydWarshall::new().compute_shortest_paths(graph, source),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id() == normalized)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}
