use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algorithm::ShortestPathResult;
use crate::graph::{CostMatrix, Graph};
use crate::pricing::tariff::{apply_tariff, final_cost, Carrier, PriceBreakdown};
use crate::{Error, Result};

/// Price of reaching one destination with one carrier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationPrice {
    pub destination: usize,
    pub city: String,
    /// Vertex sequence from the source, both ends included
    pub route: Vec<usize>,
    pub breakdown: PriceBreakdown,
    /// Single-rounding cost, see [`final_cost`]
    pub final_cost: f64,
}

/// All reachable destinations from one source, priced by one carrier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierItinerary {
    pub carrier: Carrier,
    pub destinations: Vec<DestinationPrice>,
    /// Sum of the breakdown totals; unreachable destinations are left out
    pub aggregate_total: f64,
    /// Sum of the single-rounding costs
    pub aggregate_final_cost: f64,
}

impl CarrierItinerary {
    pub fn reachable_count(&self) -> usize {
        self.destinations.len()
    }
}

fn check_result<G: Graph<f64>>(result: &ShortestPathResult<f64>, graph: &G) -> Result<()> {
    graph.check_vertex(result.source)?;
    if result.distances.len() != graph.vertex_count() {
        return Err(Error::InvalidDimension {
            what: "distances",
            expected: graph.vertex_count(),
            found: result.distances.len(),
        });
    }
    Ok(())
}

/// Prices every reachable destination other than the source for one carrier
pub fn price_carrier<G: Graph<f64>>(
    result: &ShortestPathResult<f64>,
    carrier: &Carrier,
    graph: &G,
) -> Result<CarrierItinerary> {
    let mut destinations = Vec::new();
    let mut aggregate_total = 0.0;
    let mut aggregate_final_cost = 0.0;

    for (v, distance) in result.distances.iter().enumerate() {
        if v == result.source {
            continue;
        }
        let base = match distance {
            Some(base) => *base,
            None => continue,
        };

        let breakdown = apply_tariff(Some(base), carrier);
        let total = breakdown.total.unwrap_or_default();
        let single = final_cost(Some(base), carrier).unwrap_or_default();

        aggregate_total += total;
        aggregate_final_cost += single;
        destinations.push(DestinationPrice {
            destination: v,
            city: graph.label(v)?.to_string(),
            route: result.path_to(v).unwrap_or_default(),
            breakdown,
            final_cost: single,
        });
    }

    log::debug!(
        "{}: {} destination(s), aggregate {}",
        carrier.name,
        destinations.len(),
        aggregate_total
    );

    Ok(CarrierItinerary {
        carrier: carrier.clone(),
        destinations,
        aggregate_total,
        aggregate_final_cost,
    })
}

/// Sorts itineraries by ascending aggregate total.
///
/// `itineraries` must be in carrier configuration order: ties keep that order.
pub fn rank_itineraries(itineraries: Vec<CarrierItinerary>) -> Vec<CarrierItinerary> {
    let mut indexed: Vec<(usize, CarrierItinerary)> = itineraries.into_iter().enumerate().collect();
    indexed.sort_by_key(|(position, itinerary)| (OrderedFloat(itinerary.aggregate_total), *position));
    indexed.into_iter().map(|(_, itinerary)| itinerary).collect()
}

/// Prices every carrier and ranks them, cheapest first
pub fn price_itineraries<G: Graph<f64>>(
    result: &ShortestPathResult<f64>,
    carriers: &[Carrier],
    graph: &G,
) -> Result<Vec<CarrierItinerary>> {
    check_result(result, graph)?;

    let itineraries = carriers
        .iter()
        .map(|carrier| price_carrier(result, carrier, graph))
        .collect::<Result<Vec<_>>>()?;

    Ok(rank_itineraries(itineraries))
}

/// Same as [`price_itineraries`], with carriers priced on the rayon pool
pub fn par_price_itineraries<G>(
    result: &ShortestPathResult<f64>,
    carriers: &[Carrier],
    graph: &G,
) -> Result<Vec<CarrierItinerary>>
where
    G: Graph<f64> + Sync,
{
    check_result(result, graph)?;

    // Indexed collect keeps configuration order
    let itineraries = carriers
        .par_iter()
        .map(|carrier| price_carrier(result, carrier, graph))
        .collect::<Result<Vec<_>>>()?;

    Ok(rank_itineraries(itineraries))
}

/// Re-prices every off-diagonal edge with the carrier's single-rounding tariff.
/// Running a shortest-path algorithm on the result gives carrier-specific routes,
/// since the flat fee is paid on every leg.
pub fn carrier_graph(graph: &CostMatrix<f64>, carrier: &Carrier) -> CostMatrix<f64> {
    graph.map_weights(|from, to, weight| {
        if from == to {
            Some(weight)
        } else {
            final_cost(Some(weight), carrier)
        }
    })
}
