//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::daylight::DaylightData;
pub use crate::routes::intersections::IntersectionData;
pub use crate::routes::intersections::IntersectionRequest;

pub use crate::models::series::{CitySeries, DaylightSample, IntersectionPoint};

use serde::{Deserialize, Serialize};

use crate::error::{DaylightError, Result};

/// Geographic location (latitude, longitude).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeographicLocation {
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180)
    pub longitude: f64,
}

impl GeographicLocation {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DaylightError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DaylightError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// True poleward of the polar circles, where the fallback chain is
    /// expected to engage near the solstices.
    pub fn is_polar(&self) -> bool {
        self.latitude.abs() > 66.5
    }
}
