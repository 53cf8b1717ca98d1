// Gemini API client
// Author: kelexine (https://github.com/kelexine)

use crate::config::GeminiConfig;
use crate::error::{describe_transport_error, RelayError, Result};
use crate::models::gemini::GenerateContentRequest;
use crate::utils::logging::sanitize;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Client for the Gemini `generateContent` endpoint.
///
/// Every call is a single attempt: no retry, no backoff. A timeout is only
/// applied when `timeout_seconds` is configured.
pub struct GeminiClient {
    http_client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    sanitize_tokens: bool,
}

impl GeminiClient {
    /// Create a new Gemini client from the immutable startup configuration.
    ///
    /// `sanitize_tokens` controls whether upstream error bodies are redacted
    /// before they are logged.
    pub fn new(config: &GeminiConfig, sanitize_tokens: bool) -> Result<Self> {
        let mut builder = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .tcp_nodelay(true)
            .use_rustls_tls();

        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http_client = builder
            .build()
            .map_err(|e| RelayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created HTTP client for {}", config.endpoint());

        Ok(Self {
            http_client,
            endpoint: config.endpoint(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            sanitize_tokens,
        })
    }

    /// The `generateContent` URL, without the key.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Model every request is sent to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Call Gemini `generateContent` and return the raw response body.
    ///
    /// Transport failures and non-2xx statuses become
    /// [`RelayError::Transport`]. The body is returned unparsed so the
    /// caller can log it verbatim if it has an unexpected shape.
    pub async fn generate_content(&self, request: &GenerateContentRequest) -> Result<String> {
        debug!("Calling generateContent API for model: {}", self.model);

        let response = self
            .http_client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let description = describe_transport_error(e);
                error!("Gemini API request failed: {}", description);
                RelayError::Transport(description)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                "Gemini API error: HTTP {} - Response body: {}",
                status, self.loggable(&error_text)
            );
            let message = Self::extract_error_message(&error_text)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("upstream error").to_string());
            return Err(RelayError::Transport(format!("HTTP {}: {}", status, message)));
        }

        let response_text = response.text().await.map_err(RelayError::from)?;

        debug!("Raw Gemini response (first 500 chars): {}",
            response_text.chars().take(500).collect::<String>());

        Ok(response_text)
    }

    /// Upstream text as it may appear in logs
    fn loggable(&self, text: &str) -> String {
        if self.sanitize_tokens {
            sanitize(text)
        } else {
            text.to_string()
        }
    }

    /// Extract error message from API response JSON
    fn extract_error_message(response_text: &str) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(serde::Deserialize)]
        struct ErrorDetail {
            message: Option<String>,
            status: Option<String>,
        }

        let error_resp = serde_json::from_str::<ErrorResponse>(response_text).ok()?;
        let error = error_resp.error?;
        error.message.or(error.status)
    }
}
