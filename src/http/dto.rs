//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The series and intersection DTOs are re-exported from the routes module
//! since they already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    CitySeries, DaylightData, DaylightSample, IntersectionData, IntersectionPoint,
    IntersectionRequest,
};

/// Query parameters for the daylight endpoint.
///
/// `lat`/`lon` act as explicit overrides: when both are present the city name
/// is kept only as a label and geocoding is skipped.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DaylightQuery {
    /// City name to resolve (and to echo back in the response)
    #[serde(default)]
    pub city: Option<String>,
    /// Calendar year; defaults to the current year
    #[serde(default)]
    pub year: Option<i32>,
    /// Latitude override in decimal degrees
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude override in decimal degrees
    #[serde(default)]
    pub lon: Option<f64>,
    /// Timezone identifier; defaults to UTC, geocoding may refine it
    #[serde(default)]
    pub tz: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
}
