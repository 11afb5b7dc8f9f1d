//! Axum-based HTTP server for the camlens relay.
//!
//! # Components
//!
//! - `handlers`: Implementation of individual endpoints (landing page,
//!   health check, analysis).
//! - `middleware`: tower-http middleware for request ID tracking.
//! - `routes`: The main router configuration that ties everything together.

mod handlers;
mod middleware;
mod routes;

pub use routes::{create_router, AppState};
