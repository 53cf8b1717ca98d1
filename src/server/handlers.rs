// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::{RelayError, Result};
use crate::metrics::{self, CallOutcome};
use crate::models::relay::{AskRequest, AskResponse};
use crate::translation::{translate_request, translate_response};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub timestamp: String,
}

/// Liveness plus the configured model. Does not call Gemini.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.config.gemini.model.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Prometheus text exposition
pub async fn metrics_handler() -> Response {
    match metrics::gather_metrics() {
        Ok(text) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            text,
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Handler for `POST /ask-gemini`.
///
/// The body is taken as raw bytes so that an absent or malformed body maps
/// to the same `No prompt provided` answer as a missing `prompt` key.
pub async fn ask_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let response = match relay(&state, &body).await {
        Ok(answer) => (StatusCode::OK, Json(answer)).into_response(),
        Err(e) => {
            warn!("Relay request failed: {}", e);
            e.into_response()
        }
    };

    metrics::record_request(response.status().as_u16());
    response
}

async fn relay(state: &AppState, body: &[u8]) -> Result<AskResponse> {
    let parsed = serde_json::from_slice::<Value>(body).ok();
    let req = AskRequest::from_json(parsed.as_ref())?;

    info!(
        "Received ask request: prompt_chars={}, image={}",
        req.prompt.chars().count(),
        req.image_data().is_some()
    );

    let gemini_req = translate_request(&req);
    debug!("Translated request to Gemini format");

    let client = &state.gemini_client;
    let start = Instant::now();

    let raw = match client.generate_content(&gemini_req).await {
        Ok(raw) => raw,
        Err(e) => {
            metrics::record_gemini_call(
                client.model(),
                CallOutcome::TransportError,
                start.elapsed().as_secs_f64(),
            );
            return Err(e);
        }
    };

    let result = translate_response(&raw, state.config.logging.sanitize_tokens);

    let outcome = match &result {
        Ok(_) => CallOutcome::Success,
        Err(RelayError::Shape) => CallOutcome::ShapeError,
        Err(_) => CallOutcome::TransportError,
    };
    metrics::record_gemini_call(client.model(), outcome, start.elapsed().as_secs_f64());

    result
}
