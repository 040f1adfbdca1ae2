//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the actual computation.

use std::collections::HashSet;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Datelike, Utc};

use super::dto::{DaylightQuery, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::{CitySeries, DaylightData, GeographicLocation, IntersectionData};
use crate::error::DaylightError;
use crate::models::time::parse_timezone;
use crate::routes::intersections::IntersectionRequest;
use crate::services::{sample_year, DEFAULT_TOLERANCE};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    })
}

// =============================================================================
// Daylight Series
// =============================================================================

/// GET /v1/daylight
///
/// Compute one city's daylight series for a full year.
///
/// When both `lat` and `lon` are given they override geocoding entirely;
/// otherwise the city name is resolved through the configured geocoder and
/// its timezone, when reported, replaces the `tz` parameter.
pub async fn get_daylight(
    State(state): State<AppState>,
    Query(query): Query<DaylightQuery>,
) -> HandlerResult<DaylightData> {
    let city = query.city.as_deref().map(str::trim).unwrap_or("");
    if city.is_empty() {
        return Err(DaylightError::EmptyCityName.into());
    }

    let year = query.year.unwrap_or_else(|| Utc::now().year());
    let mut tz_name = query.tz.clone().unwrap_or_else(|| "UTC".to_string());

    let location = match (query.lat, query.lon) {
        (Some(lat), Some(lon)) => GeographicLocation::new(lat, lon)?,
        _ => {
            let resolved = state.resolver.resolve(city).await?;
            if let Some(tz) = resolved.timezone {
                tz_name = tz;
            }
            resolved.location
        }
    };

    let tz = parse_timezone(&tz_name)?;

    // A year of SPA evaluations is CPU work; keep it off the async runtime.
    let provider = state.provider.clone();
    let samples =
        tokio::task::spawn_blocking(move || sample_year(provider.as_ref(), year, &location, tz))
            .await
            .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(DaylightData {
        city: city.to_string(),
        year,
        latitude: location.latitude,
        longitude: location.longitude,
        timezone: tz_name,
        generated: Utc::now().to_rfc3339(),
        daylight: samples,
    }))
}

// =============================================================================
// Intersections
// =============================================================================

/// POST /v1/intersections
///
/// Detect crossings/clusters across the submitted city series.
///
/// The handler is the caller of the core finder and therefore enforces its
/// preconditions: duplicate city names are dropped (first occurrence wins)
/// and the series count is capped by `chart.max_series`.
pub async fn find_intersections(
    State(state): State<AppState>,
    Json(request): Json<IntersectionRequest>,
) -> HandlerResult<IntersectionData> {
    let max_series = state.config.chart.max_series;

    let mut seen: HashSet<String> = HashSet::new();
    let mut series: Vec<CitySeries> = Vec::new();
    for candidate in request.series {
        if series.len() >= max_series {
            break;
        }
        if seen.insert(candidate.city.clone()) {
            series.push(candidate);
        }
    }

    let tolerance = request.tolerance.unwrap_or(DEFAULT_TOLERANCE);
    let cities = series.iter().map(|s| s.city.clone()).collect();
    let intersections = crate::services::intersections::find_intersections(&series, tolerance);

    Ok(Json(IntersectionData {
        cities,
        intersections,
    }))
}
