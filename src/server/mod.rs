//! Axum-based HTTP server implementation for the relay.
//!
//! This module sets up the HTTP server, configures routes, and handles
//! incoming `/ask-gemini` requests from client applications, bridging them
//! to the Google Gemini API.
//!
//! # Components
//!
//! - `handlers`: The relay endpoint plus health and metrics.
//! - `middleware`: Request ID tracking and CORS.
//! - `routes`: The main router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use handlers::HealthResponse;
pub use routes::{create_router, AppState};
