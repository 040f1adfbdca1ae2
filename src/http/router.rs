//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        .route("/daylight", get(handlers::get_daylight))
        .route("/intersections", post(handlers::find_intersections));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::AppConfig;
    use crate::models::solar_adapter::SpaSolarProvider;
    use crate::services::geocoding::OpenMeteoResolver;

    #[test]
    fn test_router_creation() {
        let config = AppConfig::default();
        let resolver = OpenMeteoResolver::new(&config.geocoding).unwrap();
        let state = AppState::new(
            Arc::new(SpaSolarProvider::new()),
            Arc::new(resolver),
            config,
        );
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
