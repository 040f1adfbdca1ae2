//! HTTP server module for the daylight backend.
//!
//! This module provides an axum-based HTTP server that exposes the daylight
//! services as a REST API. It reuses the service layer and DTOs from the
//! core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Daylight estimation and yearly sampling                │
//! │  - Intersection detection                                 │
//! │  - Geocoding client                                       │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Solar Provider (models/solar_adapter)                    │
//! │  - NREL SPA sunrise/sunset/transit                        │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;

pub mod error;

pub mod handlers;

pub mod router;

pub mod state;

pub use router::create_router;

pub use state::AppState;
