use flight_planner::web::{start_server, ServerConfig};
use flight_planner::PlannerConfig;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Usage: web_server [port] [config.json]
    let args: Vec<String> = env::args().collect();
    let port = match args.get(1) {
        Some(arg) => arg.parse()?,
        None => 3005,
    };
    let planner = match args.get(2) {
        Some(path) => PlannerConfig::from_path(path)?,
        None => PlannerConfig::default(),
    };

    let config = ServerConfig {
        port,
        planner,
        ..Default::default()
    };

    log::info!("Configuration: {:?}", config);

    start_server(config).await?;

    Ok(())
}
