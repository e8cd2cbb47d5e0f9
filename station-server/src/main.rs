use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use station_server::catalog::{CsvCatalog, SharedDirectory};
use station_server::config::AppConfig;
use station_server::document::DocumentBuilder;
use station_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Build the directory before accepting queries (fail fast on bad data)
    let shared = SharedDirectory::new(CsvCatalog::new(&config.catalog_path));
    let directory = match shared.get().await {
        Ok(directory) => directory,
        Err(e) => {
            error!(path = %config.catalog_path.display(), "failed to load station catalog: {e}");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(
        directory,
        DocumentBuilder::new(&config.base_uri),
        &config.cache,
    );
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.bind_addr, "station lookup listening");
    info!("  GET  /health        - Health check");
    info!("  GET  /stations      - Search stations (q, country, sorted)");
    info!("  GET  /stations/:id  - Look up a station by id or URI");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
