//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::DaylightError;
use crate::services::geocoding::GeocodingError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
    /// Geocoding error
    Geocoding(GeocodingError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Geocoding(e) => {
                let msg = e.to_string();
                match e {
                    GeocodingError::NotFound => {
                        (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg))
                    }
                    GeocodingError::OutsideCountry(_) => {
                        (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
                    }
                    GeocodingError::Transport(_) | GeocodingError::InvalidResponse(_) => {
                        (StatusCode::BAD_GATEWAY, ApiError::new("GEOCODING_ERROR", msg))
                    }
                }
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<DaylightError> for AppError {
    fn from(err: DaylightError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<GeocodingError> for AppError {
    fn from(err: GeocodingError) -> Self {
        AppError::Geocoding(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_with_details() {
        let error = ApiError::new("BAD_REQUEST", "Latitude out of range")
            .with_details("got 95.0, expected [-90, 90]");
        assert_eq!(error.code, "BAD_REQUEST");
        assert!(error.details.is_some());
    }

    #[test]
    fn test_api_error_skips_absent_details() {
        let json = serde_json::to_value(ApiError::new("NOT_FOUND", "City not found")).unwrap();
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_daylight_error_maps_to_bad_request() {
        let app_err: AppError = DaylightError::InvalidLatitude(95.0).into();
        assert!(matches!(app_err, AppError::BadRequest(_)));
    }
}
