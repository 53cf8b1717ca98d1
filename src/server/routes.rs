// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{ask_handler, health_handler, metrics_handler};
use super::middleware::{cors_layer, request_id_layers};
use crate::config::AppConfig;
use crate::error::Result;
use crate::gemini::GeminiClient;
use axum::{extract::DefaultBodyLimit, routing::{get, post}, Router};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub gemini_client: Arc<GeminiClient>,
}

pub fn create_router(config: AppConfig, gemini_client: GeminiClient) -> Result<Router> {
    let body_limit = config.server.body_limit_bytes;
    let enable_cors = config.server.enable_cors;

    let state = AppState {
        config: Arc::new(config),
        gemini_client: Arc::new(gemini_client),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let mut app = Router::new()
        .route("/ask-gemini", post(ask_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        // Base64 images blow past axum's 2MB default
        .layer(DefaultBodyLimit::disable());

    if let Some(limit) = body_limit {
        app = app.layer(RequestBodyLimitLayer::new(limit));
    }

    if enable_cors {
        app = app.layer(cors_layer());
    }

    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
