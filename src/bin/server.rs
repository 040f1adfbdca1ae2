//! Daylight HTTP Server Binary
//!
//! This is the main entry point for the Daylight REST API server.
//! It loads configuration, wires up the solar provider and geocoding
//! resolver, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin daylight-server --features "http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `GEOCODING_BASE_URL`: Geocoding API base URL (default: Open-Meteo)
//! - `GEOCODING_COUNTRY`: Accepted country code (default: FI)
//! - `DAYLIGHT_CONFIG`: Path to a TOML config file overriding the above
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use daylight_rust::config::AppConfig;
use daylight_rust::http::{create_router, AppState};
use daylight_rust::models::solar_adapter::SpaSolarProvider;
use daylight_rust::services::geocoding::OpenMeteoResolver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Daylight HTTP Server");

    // Load configuration (env vars, or TOML file via DAYLIGHT_CONFIG)
    let config = AppConfig::load().map_err(|e| anyhow::anyhow!(e))?;
    let addr: SocketAddr = config.bind_addr().parse()?;

    // Wire up the solar provider and geocoding resolver
    let resolver = OpenMeteoResolver::new(&config.geocoding).map_err(|e| anyhow::anyhow!(e))?;
    let state = AppState::new(
        Arc::new(SpaSolarProvider::new()),
        Arc::new(resolver),
        config,
    );

    // Create router with all endpoints
    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
