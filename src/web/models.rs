use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::Algorithm;
use crate::graph::{MatrixCell, ParseMode};
use crate::planner::RouteRecord;
use crate::pricing::CarrierItinerary;

/// Parameters for a planning query
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub cities: Vec<String>,
    pub matrix: Vec<Vec<MatrixCell>>,
    pub source: String,
    #[serde(default = "default_algorithm")]
    pub algorithm: Algorithm,
    /// Carrier names to price; empty means all configured carriers
    #[serde(default)]
    pub carriers: Vec<String>,
    /// Overrides the configured parse mode
    #[serde(default)]
    pub parse_mode: Option<ParseMode>,
}

fn default_algorithm() -> Algorithm {
    Algorithm::Dijkstra
}

/// Parameters for an all-pairs query
#[derive(Debug, Deserialize)]
pub struct AllPairsRequest {
    pub cities: Vec<String>,
    pub matrix: Vec<Vec<MatrixCell>>,
    #[serde(default)]
    pub parse_mode: Option<ParseMode>,
}

/// Base cost from the source to one city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceEntry {
    pub city: String,
    /// `None` when unreachable
    pub cost: Option<f64>,
}

/// Response containing planning results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub plan_id: Uuid,
    pub computed_at: DateTime<Utc>,
    pub algorithm: String,
    pub source: String,
    pub negative_cycle_detected: bool,
    pub distances: Vec<DistanceEntry>,
    pub itineraries: Vec<CarrierItinerary>,
    pub best_carrier: Option<String>,
    pub records: Vec<RouteRecord>,
}

/// Response containing all-pairs distances
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllPairsResponse {
    pub cities: Vec<String>,
    pub negative_cycle_detected: bool,
    /// Absent when a negative cycle makes every entry meaningless
    pub matrix: Option<Vec<Vec<Option<f64>>>>,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
