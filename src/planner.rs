//! End-to-end planning: cost matrix in, ranked carrier itineraries out.

use serde::{Deserialize, Serialize};

use crate::algorithm::floyd_warshall::FloydWarshall;
use crate::algorithm::{Algorithm, DistanceMatrix, Outcome, ShortestPathResult};
use crate::config::PlannerConfig;
use crate::graph::{matrix_from_cells, parse_matrix, CostMatrix, Graph, MatrixCell};
use crate::pricing::{par_price_itineraries, price_itineraries, Carrier, CarrierItinerary};
use crate::{Error, Result};

/// A flat, persistable row: one carrier's price for one source/destination pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub carrier: String,
    pub source: String,
    pub destination: String,
    pub base_cost: f64,
    pub tax: f64,
    pub flat_fee: f64,
    /// Single-rounding final cost
    pub cost: f64,
    pub algorithm_used: String,
}

/// A converged plan for one source
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub algorithm: Algorithm,
    pub source: usize,
    pub paths: ShortestPathResult<f64>,
    /// Cheapest carrier first
    pub itineraries: Vec<CarrierItinerary>,
}

impl Plan {
    pub fn best_carrier(&self) -> Option<&CarrierItinerary> {
        self.itineraries.first()
    }

    /// Flattens the itineraries into rows, in ranking order
    pub fn route_records<G: Graph<f64>>(&self, graph: &G) -> Result<Vec<RouteRecord>> {
        let source = graph.label(self.source)?;
        Ok(self
            .itineraries
            .iter()
            .flat_map(|itinerary| {
                itinerary.destinations.iter().map(move |dest| RouteRecord {
                    carrier: itinerary.carrier.name.clone(),
                    source: source.to_string(),
                    destination: dest.city.clone(),
                    base_cost: dest.breakdown.base.unwrap_or_default(),
                    tax: dest.breakdown.tax,
                    flat_fee: dest.breakdown.flat_fee,
                    cost: dest.final_cost,
                    algorithm_used: self.algorithm.display_name().to_string(),
                })
            })
            .collect())
    }
}

/// Runs planning queries under one configuration
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    pub fn new(config: PlannerConfig) -> Self {
        Planner { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Parses a whitespace-separated matrix with the configured mode and limits
    pub fn parse_graph(&self, labels: Vec<String>, text: &str) -> Result<CostMatrix<f64>> {
        parse_matrix(labels, text, self.config.limits, self.config.parse_mode)
    }

    /// Builds a graph from JSON cells with the configured mode and limits
    pub fn graph_from_cells(
        &self,
        labels: Vec<String>,
        cells: &[Vec<MatrixCell>],
    ) -> Result<CostMatrix<f64>> {
        matrix_from_cells(labels, cells, self.config.limits, self.config.parse_mode)
    }

    /// Computes shortest paths from `source` and prices them for `carriers`.
    ///
    /// A negative cycle is passed through untouched: nothing gets priced.
    pub fn plan<G>(
        &self,
        graph: &G,
        source: usize,
        algorithm: Algorithm,
        carriers: &[Carrier],
    ) -> Result<Outcome<Plan>>
    where
        G: Graph<f64> + Sync,
    {
        let paths = match algorithm.run(graph, source)? {
            Outcome::Converged(paths) => paths,
            Outcome::NegativeCycleDetected => {
                log::warn!(
                    "{} found a negative cycle from {}; nothing priced",
                    algorithm,
                    graph.label(source)?
                );
                return Ok(Outcome::NegativeCycleDetected);
            }
        };

        let itineraries = if self.config.parallel_pricing {
            par_price_itineraries(&paths, carriers, graph)?
        } else {
            price_itineraries(&paths, carriers, graph)?
        };

        log::info!(
            "Planned {} route(s) from {} with {} for {} carrier(s)",
            paths.reachable_count().saturating_sub(1),
            graph.label(source)?,
            algorithm,
            carriers.len()
        );

        Ok(Outcome::Converged(Plan {
            algorithm,
            source,
            paths,
            itineraries,
        }))
    }

    /// Like [`Planner::plan`], with the source given by city name and carriers
    /// selected by name from the configuration (empty selection means all)
    pub fn plan_by_name<G, S>(
        &self,
        graph: &G,
        source: &str,
        algorithm: Algorithm,
        carrier_names: &[S],
    ) -> Result<Outcome<Plan>>
    where
        G: Graph<f64> + Sync,
        S: AsRef<str>,
    {
        let source = graph
            .index_of(source)
            .ok_or_else(|| Error::UnknownLabel(source.trim().to_string()))?;
        let carriers = self.config.select_carriers(carrier_names)?;
        self.plan(graph, source, algorithm, &carriers)
    }

    /// All-pairs distances, or the negative-cycle tag
    pub fn all_pairs<G: Graph<f64>>(&self, graph: &G) -> Outcome<DistanceMatrix<f64>> {
        FloydWarshall::new().compute_all_pairs(graph)
    }
}
