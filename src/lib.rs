//! # Daylight Rust Backend
//!
//! Daylight-duration analysis engine.
//!
//! This crate provides a Rust backend for the Daylight Tracker application,
//! computing per-day daylight durations for arbitrary locations and years and
//! detecting days where several cities' daylight curves cross or converge.
//! The backend exposes a REST API via Axum for the React frontend.
//!
//! ## Features
//!
//! - **Daylight Estimation**: minutes of daylight for any calendar day,
//!   including polar-day (1440) and polar-night (0) resolution
//! - **Yearly Sampling**: full-year day-by-day series, 365 or 366 entries
//! - **Intersection Detection**: sign-flip crossings between two city curves
//!   and near-coincidence clusters across three or more
//! - **Geocoding**: city-name resolution via the Open-Meteo geocoding API,
//!   with explicit latitude/longitude overrides
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`models`]: core value types, time helpers, and the solar provider seam
//! - [`services`]: estimator, sampler, intersection finder, geocoding client
//! - [`routes`]: route-specific data types
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;
pub mod config;
pub mod error;

pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::DaylightError;
