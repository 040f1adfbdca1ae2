//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::solar_adapter::SolarProvider;
use crate::services::geocoding::LocationResolver;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Solar position backend for daylight estimation
    pub provider: Arc<dyn SolarProvider>,
    /// City-name resolver (geocoding)
    pub resolver: Arc<dyn LocationResolver>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        provider: Arc<dyn SolarProvider>,
        resolver: Arc<dyn LocationResolver>,
        config: AppConfig,
    ) -> Self {
        Self {
            provider,
            resolver,
            config: Arc::new(config),
        }
    }
}
