use std::sync::Arc;

use tracing::info;

use vacation_planner::api::{AppState, create_router};
use vacation_planner::config::ConfigLoader;
use vacation_planner::planner::VacationPlanner;
use vacation_planner::store::InMemoryStore;

const CONFIG_DIR_VAR: &str = "VACATION_PLANNER_CONFIG";
const DEFAULT_CONFIG_DIR: &str = "./config/default";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir =
        std::env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let loader = ConfigLoader::load(&config_dir)?;

    tracing_subscriber::fmt()
        .with_max_level(loader.log_level())
        .with_target(false)
        .init();

    let server = loader.server();
    let rule = loader.capacity_rule();
    info!(
        config_dir = %config_dir,
        percentage = rule.percentage,
        fixed_cap = ?rule.fixed_cap,
        "Configuration loaded"
    );

    let planner = VacationPlanner::new(
        Arc::new(InMemoryStore::new()),
        rule,
        server.default_vacation_days,
    );
    let router = create_router(AppState::new(planner));

    let listener = tokio::net::TcpListener::bind(&server.bind_address).await?;
    info!(address = %listener.local_addr()?, "Vacation Planner listening");
    axum::serve(listener, router).await?;

    Ok(())
}
