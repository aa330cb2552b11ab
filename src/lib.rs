//! Flight Planner - shortest connection costs between cities, re-priced per carrier
//!
//! A small cost matrix is solved with one of three shortest-path algorithms
//! (Dijkstra, Bellman-Ford, Floyd-Warshall). The resulting base costs are then run
//! through each carrier's tariff (percentage tax plus flat fee) and carriers are
//! ranked by the total cost of reaching every destination from the source city.
//!
//! Missing edges and unreachable cities are `None`, never a magic number, so no
//! arithmetic can ever touch them.

pub mod algorithm;
pub mod config;
pub mod graph;
pub mod planner;
pub mod pricing;
pub mod web;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, floyd_warshall::FloydWarshall, Algorithm,
    DistanceMatrix, Outcome, ShortestPathAlgorithm, ShortestPathResult,
};
pub use config::{NodeLimits, PlannerConfig};
/// Re-export main types for convenient use
pub use graph::{CostMatrix, Graph, ParseMode};
pub use planner::{Plan, Planner};
pub use pricing::{Carrier, CarrierItinerary, PriceBreakdown};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid dimension: expected {expected} {what}, found {found}")]
    InvalidDimension {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Node count {count} outside allowed range {min}..={max}")]
    NodeCountOutOfRange { count: usize, min: usize, max: usize },

    #[error("Index {index} out of range for graph with {len} nodes")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown city: {0}")]
    UnknownLabel(String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unknown carrier: {0}")]
    UnknownCarrier(String),

    #[error("Invalid carrier {name}: {reason}")]
    InvalidCarrier { name: String, reason: String },

    #[error("Negative edge {from} -> {to}: Dijkstra is not applicable")]
    NegativeEdgeNotSupported { from: usize, to: usize },

    #[error("Negative-weight cycle detected")]
    NegativeCycleDetected,

    #[error("Malformed cost {token:?} at row {row}, column {col}")]
    MalformedToken {
        row: usize,
        col: usize,
        token: String,
    },

    #[error(
        "Cost at row {row}, column {col} must be finite and within ±{}",
        graph::MAX_ABS_WEIGHT
    )]
    WeightOutOfRange { row: usize, col: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Stable machine-readable code, used by the HTTP layer
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidDimension { .. } => "invalid_dimension",
            Error::NodeCountOutOfRange { .. } => "node_count_out_of_range",
            Error::IndexOutOfRange { .. } => "index_out_of_range",
            Error::UnknownLabel(_) => "unknown_city",
            Error::UnknownAlgorithm(_) => "unknown_algorithm",
            Error::UnknownCarrier(_) => "unknown_carrier",
            Error::InvalidCarrier { .. } => "invalid_carrier",
            Error::NegativeEdgeNotSupported { .. } => "negative_edge_not_supported",
            Error::NegativeCycleDetected => "negative_cycle_detected",
            Error::MalformedToken { .. } => "malformed_token",
            Error::WeightOutOfRange { .. } => "weight_out_of_range",
            Error::Config(_) => "config_error",
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
