//! Error types for the daylight backend.

use thiserror::Error;

/// Result type for daylight computations.
pub type Result<T> = std::result::Result<T, DaylightError>;

/// Errors raised for malformed caller input.
///
/// The estimator and sampler are total over well-formed inputs; everything
/// here is a contract violation by the caller and is reported before any
/// astronomical computation starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DaylightError {
    /// Latitude outside [-90, 90] degrees
    #[error("Latitude must be between -90 and 90 degrees, got {0}")]
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180] degrees
    #[error("Longitude must be between -180 and 180 degrees, got {0}")]
    InvalidLongitude(f64),

    /// Year outside the range the solar position algorithm supports
    #[error("Year {0} is outside the supported range [{min}, {max}]", min = crate::models::time::MIN_YEAR, max = crate::models::time::MAX_YEAR)]
    InvalidYear(i32),

    /// Timezone identifier not present in the tz database
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Empty or blank city name
    #[error("City name is empty")]
    EmptyCityName,
}
