//! Service layer for business logic and orchestration.
//!
//! The estimator, sampler, and intersection finder are pure, synchronous
//! computations with no shared state; geocoding is the only service that
//! talks to the network, and the HTTP layer composes them.

pub mod daylight;

pub mod geocoding;

pub mod intersections;

pub mod sampler;

pub use daylight::estimate_daylight_minutes;
pub use intersections::{find_intersections, DEFAULT_TOLERANCE};
pub use sampler::sample_year;
