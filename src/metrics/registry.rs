// Prometheus metrics registry and collectors
// Author: kelexine (https://github.com/kelexine)

use crate::error::{RelayError, Result};
use lazy_static::lazy_static;
use prometheus::{
    CounterVec, HistogramVec, Opts, Registry, TextEncoder, Encoder,
    register_counter_vec_with_registry, register_histogram_vec_with_registry,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // REQUEST METRICS
    // ============================================================================

    /// Total number of relay requests, by response status
    pub static ref RELAY_REQUESTS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("relay_requests_total", "Total number of /ask-gemini requests"),
        &["status_code"],
        REGISTRY
    ).expect("relay_requests_total registers once");

    // ============================================================================
    // GEMINI API METRICS
    // ============================================================================

    /// Total Gemini API calls
    pub static ref GEMINI_API_CALLS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("gemini_api_calls_total", "Total Gemini API calls"),
        &["outcome"], // outcome: success, transport_error, shape_error
        REGISTRY
    ).expect("gemini_api_calls_total registers once");

    /// Gemini API call duration
    pub static ref GEMINI_API_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new("gemini_api_duration_seconds", "Gemini API call duration")
            .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &["model"],
        REGISTRY
    ).expect("gemini_api_duration_seconds registers once");
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> Result<String> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| RelayError::Internal(format!("Failed to encode metrics: {}", e)))?;
    String::from_utf8(buffer)
        .map_err(|e| RelayError::Internal(format!("Metrics are not UTF-8: {}", e)))
}
