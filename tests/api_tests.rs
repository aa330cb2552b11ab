use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use flight_planner::web::models::{AllPairsResponse, ErrorResponse, PlanResponse};
use flight_planner::web::{build_app, ServerConfig};
use serde::de::DeserializeOwned;
use serde_json::json;
use tower::ServiceExt;

fn app() -> Router {
    build_app(&ServerConfig::default())
}

async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn post_json<T: DeserializeOwned>(uri: &str, body: serde_json::Value) -> (StatusCode, T) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, bytes) = send(request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn three_cities(algorithm: &str) -> serde_json::Value {
    json!({
        "cities": ["A", "B", "C"],
        "matrix": [[0, 4, "INF"], ["INF", 0, "1"], [2, null, 0]],
        "source": "A",
        "algorithm": algorithm,
        "carriers": ["Air India", "GoAir"]
    })
}

#[tokio::test]
async fn test_plan_endpoint() {
    let (status, body): (_, PlanResponse) =
        post_json("/api/plan", three_cities("bellman-ford")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.negative_cycle_detected);
    assert_eq!(body.algorithm, "Bellman-Ford");
    let costs: Vec<_> = body.distances.iter().map(|d| d.cost).collect();
    assert_eq!(costs, vec![Some(0.0), Some(4.0), Some(5.0)]);
    assert_eq!(body.best_carrier.as_deref(), Some("Air India"));
    assert_eq!(body.itineraries.len(), 2);
    assert_eq!(body.itineraries[0].aggregate_total, 310.0);
    assert_eq!(body.records.len(), 4);
}

#[tokio::test]
async fn test_plan_reports_negative_cycle() {
    let request = json!({
        "cities": ["A", "B", "C"],
        "matrix": [["INF", 1, "INF"], ["INF", "INF", 1], [-3, "INF", "INF"]],
        "source": "B",
        "algorithm": "floyd-warshall"
    });
    let (status, body): (_, PlanResponse) = post_json("/api/plan", request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.negative_cycle_detected);
    assert!(body.itineraries.is_empty());
    assert!(body.records.is_empty());
}

#[tokio::test]
async fn test_dijkstra_with_negative_edge_is_unprocessable() {
    let request = json!({
        "cities": ["A", "B"],
        "matrix": [[0, 5], [-1, 0]],
        "source": "A"
    });
    let (status, body): (_, ErrorResponse) = post_json("/api/plan", request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.error, "negative_edge_not_supported");
    assert_eq!(body.details, Some(json!({ "from": 1, "to": 0 })));
}

#[tokio::test]
async fn test_strict_mode_rejects_malformed_cells() {
    let mut request = three_cities("dijkstra");
    request["matrix"][0][1] = json!("four");
    request["parse_mode"] = json!("strict");
    let (status, body): (_, ErrorResponse) = post_json("/api/plan", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "malformed_token");

    // Lenient by default: the cell becomes "no edge" and B is unreachable
    let mut request = three_cities("dijkstra");
    request["matrix"][0][1] = json!("four");
    let (status, body): (_, PlanResponse) = post_json("/api/plan", request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.distances[1].cost, None);
}

#[tokio::test]
async fn test_oversized_cost_is_rejected() {
    let mut request = three_cities("dijkstra");
    request["matrix"][1][2] = json!(1e308);
    let (status, body): (_, ErrorResponse) = post_json("/api/plan", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "weight_out_of_range");
}

#[tokio::test]
async fn test_unknown_source_city() {
    let mut request = three_cities("dijkstra");
    request["source"] = json!("Z");
    let (status, body): (_, ErrorResponse) = post_json("/api/plan", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "unknown_city");
}

#[tokio::test]
async fn test_all_pairs_endpoint() {
    let request = json!({
        "cities": ["A", "B", "C"],
        "matrix": [[0, 4, "INF"], ["INF", 0, 1], [2, "INF", 0]]
    });
    let (status, body): (_, AllPairsResponse) = post_json("/api/all-pairs", request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.negative_cycle_detected);
    assert_eq!(
        body.matrix,
        Some(vec![
            vec![Some(0.0), Some(4.0), Some(5.0)],
            vec![Some(3.0), Some(0.0), Some(1.0)],
            vec![Some(2.0), Some(6.0), Some(0.0)],
        ])
    );
}

#[tokio::test]
async fn test_carriers_and_health() {
    let request = Request::builder().uri("/api/carriers").body(Body::empty()).unwrap();
    let (status, bytes) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    let carriers: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(carriers.as_array().unwrap().len(), 5);
    assert_eq!(carriers[0]["name"], "IndiGo");

    let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
    let (status, bytes) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    let health: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(health["status"], "healthy");
}
