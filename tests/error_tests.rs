// Error handling tests
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::IntoResponse;
use gemini_relay::error::RelayError;
use http_body_util::BodyExt;
use serde_json::{json, Value};

async fn render(error: RelayError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn test_error_display_messages() {
    let errors = vec![
        RelayError::MissingPrompt,
        RelayError::Transport("connection refused".to_string()),
        RelayError::Shape,
        RelayError::Config("missing key".to_string()),
        RelayError::Internal("boom".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[tokio::test]
async fn test_missing_prompt_response() {
    let (status, body) = render(RelayError::MissingPrompt).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No prompt provided"}));
}

#[tokio::test]
async fn test_transport_error_surfaces_description() {
    let (status, body) = render(RelayError::Transport("HTTP 503 Service Unavailable: overloaded".to_string())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "HTTP 503 Service Unavailable: overloaded"}));
}

#[tokio::test]
async fn test_shape_error_is_generic() {
    let (status, body) = render(RelayError::Shape).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": gemini_relay::error::SHAPE_ERROR_MESSAGE}));
}

#[test]
fn test_config_error() {
    let error = RelayError::Config("Gemini API key is not set".to_string());
    assert!(format!("{}", error).contains("API key is not set"));
    assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
