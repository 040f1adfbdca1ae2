//! City-name resolution via the Open-Meteo geocoding API.
//!
//! The core computations only ever see already-resolved coordinates; this
//! module is the thin client that produces them. Results are restricted to a
//! configured country (Finnish cities by default, matching the frontend's
//! promise), and explicit latitude/longitude query overrides bypass the
//! resolver entirely.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::GeographicLocation;

/// A geocoded city: coordinates plus the provider's timezone, when known.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub location: GeographicLocation,
    pub timezone: Option<String>,
}

/// Errors from city-name resolution.
#[derive(Error, Debug)]
pub enum GeocodingError {
    /// No geocoding match at all
    #[error("City not found")]
    NotFound,

    /// Matches exist but none inside the configured country
    #[error("City not in {0}")]
    OutsideCountry(String),

    /// Transport-level failure (connection, timeout, non-2xx status)
    #[error("Geocoding request failed: {0}")]
    Transport(String),

    /// Response body was not the expected JSON shape
    #[error("Invalid JSON from geocoding API: {0}")]
    InvalidResponse(String),
}

/// Location resolution backend.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    /// Resolve a city name to coordinates and timezone.
    async fn resolve(&self, city: &str) -> Result<ResolvedLocation, GeocodingError>;
}

/// One match in the geocoding API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoMatch {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Geocoding API response envelope. `results` is absent when nothing matched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoResponse {
    #[serde(default)]
    pub results: Vec<GeoMatch>,
}

/// First match inside the given country, if any.
pub fn pick_country_match<'a>(results: &'a [GeoMatch], country_code: &str) -> Option<&'a GeoMatch> {
    results
        .iter()
        .find(|m| m.country_code.as_deref() == Some(country_code))
}

/// Convert a picked match into a [`ResolvedLocation`].
///
/// Out-of-range coordinates from the provider are reported as an invalid
/// response rather than a caller contract violation.
pub fn resolved_from_match(m: &GeoMatch) -> Result<ResolvedLocation, GeocodingError> {
    let location = GeographicLocation::new(m.latitude, m.longitude)
        .map_err(|e| GeocodingError::InvalidResponse(e.to_string()))?;
    Ok(ResolvedLocation {
        location,
        timezone: m.timezone.clone(),
    })
}

#[cfg(feature = "http-server")]
pub use client::OpenMeteoResolver;

#[cfg(feature = "http-server")]
mod client {
    use std::time::Duration;

    use async_trait::async_trait;
    use log::debug;

    use super::{
        pick_country_match, resolved_from_match, GeoResponse, GeocodingError, LocationResolver,
        ResolvedLocation,
    };
    use crate::config::GeocodingSettings;

    /// Open-Meteo geocoding API client.
    pub struct OpenMeteoResolver {
        client: reqwest::Client,
        base_url: String,
        country_code: String,
    }

    impl OpenMeteoResolver {
        pub fn new(settings: &GeocodingSettings) -> Result<Self, GeocodingError> {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(settings.timeout_secs))
                .user_agent("DaylightApp/1.0 (+https://example.com)")
                .build()
                .map_err(|e| {
                    GeocodingError::Transport(format!("Failed to build HTTP client: {}", e))
                })?;

            Ok(Self {
                client,
                base_url: settings.base_url.trim_end_matches('/').to_string(),
                country_code: settings.country_code.clone(),
            })
        }
    }

    #[async_trait]
    impl LocationResolver for OpenMeteoResolver {
        async fn resolve(&self, city: &str) -> Result<ResolvedLocation, GeocodingError> {
            let url = format!("{}/v1/search", self.base_url);
            debug!("geocoding {:?} via {}", city, url);

            let response = self
                .client
                .get(&url)
                .query(&[
                    ("name", city),
                    ("count", "5"),
                    ("language", "en"),
                    ("format", "json"),
                ])
                .send()
                .await
                .map_err(|e| GeocodingError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(GeocodingError::Transport(format!(
                    "geocoding API returned {}",
                    status
                )));
            }

            let body: GeoResponse = response
                .json()
                .await
                .map_err(|e| GeocodingError::InvalidResponse(e.to_string()))?;

            if body.results.is_empty() {
                return Err(GeocodingError::NotFound);
            }

            let picked = pick_country_match(&body.results, &self.country_code)
                .ok_or_else(|| GeocodingError::OutsideCountry(self.country_code.clone()))?;

            resolved_from_match(picked)
        }
    }
}
