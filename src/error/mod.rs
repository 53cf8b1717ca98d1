// Error types for gemini-relay
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Message returned when the upstream body does not carry an answer.
pub const SHAPE_ERROR_MESSAGE: &str = "Failed to parse Gemini response";

#[derive(Error, Debug)]
pub enum RelayError {
    /// Inbound body absent, not an object, or without a `prompt` key.
    #[error("No prompt provided")]
    MissingPrompt,

    /// Network failure or non-2xx upstream status. The description is
    /// surfaced to the caller as-is.
    #[error("{0}")]
    Transport(String),

    /// Upstream answered but `candidates[0].content.parts[0].text` is missing.
    #[error("{}", SHAPE_ERROR_MESSAGE)]
    Shape,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RelayError {
    /// HTTP status the relay answers with for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingPrompt => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Transport(describe_transport_error(err))
    }
}

/// Render a reqwest error with its source chain, minus the request URL.
///
/// The upstream URL carries the API key in its query string, so it is
/// stripped before the description can reach a caller.
pub fn describe_transport_error(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut description = err.to_string();

    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !description.contains(&cause_text) {
            description.push_str(": ");
            description.push_str(&cause_text);
        }
        source = cause.source();
    }

    description
}

// Convert RelayError to the `{"error": ...}` body clients expect
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = json!({ "error": self.to_string() });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
