//! Daylight series route types.

use serde::{Deserialize, Serialize};

use crate::models::series::DaylightSample;

/// Yearly daylight series for one resolved city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaylightData {
    /// City name as the caller supplied it
    pub city: String,
    /// Calendar year covered by `daylight`
    pub year: i32,
    /// Resolved latitude in decimal degrees
    pub latitude: f64,
    /// Resolved longitude in decimal degrees
    pub longitude: f64,
    /// Timezone identifier the samples are anchored in
    pub timezone: String,
    /// RFC 3339 timestamp of when the series was computed
    pub generated: String,
    /// One sample per calendar day, dates ascending
    pub daylight: Vec<DaylightSample>,
}

/// Daylight route function name constant
pub const GET_DAYLIGHT: &str = "get_daylight";
