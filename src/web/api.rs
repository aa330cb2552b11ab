use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::algorithm::Outcome;
use crate::graph::{matrix_from_cells, CostMatrix, Graph, MatrixCell, ParseMode};
use crate::planner::Planner;
use crate::pricing::Carrier;
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<Planner>,
}

impl AppState {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/plan", post(plan_routes))
        .route("/api/all-pairs", post(all_pairs))
        .route("/api/carriers", get(list_carriers))
        .route("/api/health", get(health_check))
}

/// Price every reachable destination from one source
pub async fn plan_routes(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, ApiError> {
    let planner = &state.planner;
    let graph = build_graph(planner, request.cities, &request.matrix, request.parse_mode)
        .map_err(error_response)?;

    let outcome = planner
        .plan_by_name(&graph, &request.source, request.algorithm, request.carriers.as_slice())
        .map_err(error_response)?;

    let source = request.source.trim().to_string();
    let algorithm = request.algorithm.display_name().to_string();

    let response = match outcome {
        Outcome::Converged(plan) => {
            let records = plan.route_records(&graph).map_err(error_response)?;
            let distances = graph
                .labels()
                .iter()
                .zip(&plan.paths.distances)
                .map(|(city, cost)| DistanceEntry {
                    city: city.clone(),
                    cost: *cost,
                })
                .collect();

            PlanResponse {
                plan_id: Uuid::new_v4(),
                computed_at: Utc::now(),
                algorithm,
                source,
                negative_cycle_detected: false,
                distances,
                best_carrier: plan.best_carrier().map(|it| it.carrier.name.clone()),
                itineraries: plan.itineraries,
                records,
            }
        }
        Outcome::NegativeCycleDetected => PlanResponse {
            plan_id: Uuid::new_v4(),
            computed_at: Utc::now(),
            algorithm,
            source,
            negative_cycle_detected: true,
            distances: Vec::new(),
            itineraries: Vec::new(),
            best_carrier: None,
            records: Vec::new(),
        },
    };

    Ok(Json(response))
}

/// All-pairs distance table
pub async fn all_pairs(
    State(state): State<AppState>,
    Json(request): Json<AllPairsRequest>,
) -> Result<Json<AllPairsResponse>, ApiError> {
    let graph = build_graph(&state.planner, request.cities, &request.matrix, request.parse_mode)
        .map_err(error_response)?;

    let outcome = state.planner.all_pairs(&graph);

    Ok(Json(AllPairsResponse {
        cities: graph.labels().to_vec(),
        negative_cycle_detected: outcome.is_negative_cycle(),
        matrix: outcome.converged().map(|matrix| matrix.distances),
    }))
}

/// Configured carriers, in ranking tie-break order
pub async fn list_carriers(State(state): State<AppState>) -> Json<Vec<Carrier>> {
    Json(state.planner.config().carriers.clone())
}

/// Health check endpoint
pub async fn health_check() -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

fn build_graph(
    planner: &Planner,
    cities: Vec<String>,
    cells: &[Vec<MatrixCell>],
    parse_mode: Option<ParseMode>,
) -> crate::Result<CostMatrix<f64>> {
    let config = planner.config();
    matrix_from_cells(
        cities,
        cells,
        config.limits,
        parse_mode.unwrap_or(config.parse_mode),
    )
}

fn error_response(err: Error) -> ApiError {
    let status = match err {
        Error::NegativeEdgeNotSupported { .. } | Error::NegativeCycleDetected => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    };

    let details = match &err {
        Error::MalformedToken { row, col, token } => Some(serde_json::json!({
            "row": row,
            "col": col,
            "token": token,
        })),
        Error::NegativeEdgeNotSupported { from, to } => Some(serde_json::json!({
            "from": from,
            "to": to,
        })),
        _ => None,
    };

    log::debug!("Request rejected: {}", err);

    (
        status,
        Json(ErrorResponse {
            error: err.code().to_string(),
            message: err.to_string(),
            details,
        }),
    )
}
