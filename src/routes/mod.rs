//! Route-specific data types for the HTTP API.

pub mod daylight;
pub mod intersections;
