use axum::{
    http::{header, Method},
    Router,
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::config::PlannerConfig;
use crate::planner::Planner;
use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    pub planner: PlannerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3005,
            enable_cors: true,
            planner: PlannerConfig::default(),
        }
    }
}

/// Builds the application router with its middleware
pub fn build_app(config: &ServerConfig) -> Router {
    let app_state = AppState::new(Planner::new(config.planner.clone()));

    let app = Router::new().merge(create_router()).with_state(app_state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]);

        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    }
}

/// Start the web server with custom configuration
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = SocketAddr::new(config.host, config.port);
    log::info!("Flight planner API listening on http://{}", addr);
    log::info!(
        "{} carrier(s) configured, parse mode {:?}",
        config.planner.carriers.len(),
        config.planner.parse_mode
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
