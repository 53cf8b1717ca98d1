//! Structured logging and secret-redaction utilities.
//!
//! This module configures the `tracing` ecosystem for the relay and
//! provides a helper that keeps the Gemini API key out of log sinks.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{RelayError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the relay.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(env_filter);

    let initialized = match config.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
    };

    initialized.map_err(|e| RelayError::Internal(format!("Failed to initialize logging: {}", e)))
}

/// Sanitizes Google API keys from log messages.
///
/// Two shapes are redacted:
/// - bare keys, which start with `AIza`
/// - `key=` query parameters, whatever their value looks like
pub fn sanitize(input: &str) -> String {
    let result = redact_after(input, "key=", "[REDACTED_API_KEY]");
    redact_after(&result, "AIza", "[REDACTED_API_KEY]")
        .replace("AIza[REDACTED_API_KEY]", "[REDACTED_API_KEY]")
}

/// Replace every token following `marker` up to the next delimiter.
fn redact_after(input: &str, marker: &str, placeholder: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(marker) {
        let value_start = pos + marker.len();
        result.push_str(&rest[..value_start]);

        let tail = &rest[value_start..];
        let end = tail
            .find(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '&' | ')' | ','))
            .unwrap_or(tail.len());

        if end > 0 {
            result.push_str(placeholder);
        }
        rest = &tail[end..];
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_query_key() {
        let input = "POST https://example.test/v1beta/models/m:generateContent?key=secret123&alt=json";
        let output = sanitize(input);
        assert!(output.contains("key=[REDACTED_API_KEY]&alt=json"));
        assert!(!output.contains("secret123"));
    }

    #[test]
    fn test_sanitize_bare_api_key() {
        let input = r#"{"error": "API key AIzaSyA-1234567890abcdefghijklmnopqrs not valid"}"#;
        let output = sanitize(input);
        assert!(output.contains("API key [REDACTED_API_KEY] not valid"));
        assert!(!output.contains("AIzaSyA"));
    }

    #[test]
    fn test_sanitize_leaves_plain_text() {
        let input = r#"{"candidates": []}"#;
        assert_eq!(sanitize(input), input);
    }
}
