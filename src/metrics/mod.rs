// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{
    gather_metrics,
    RELAY_REQUESTS_TOTAL,
    GEMINI_API_CALLS,
    GEMINI_API_DURATION,
};

/// Outcome label for a finished Gemini call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    Success,
    TransportError,
    ShapeError,
}

impl CallOutcome {
    pub fn as_label(self) -> &'static str {
        match self {
            CallOutcome::Success => "success",
            CallOutcome::TransportError => "transport_error",
            CallOutcome::ShapeError => "shape_error",
        }
    }
}

/// Helper to record a relay request by its response status
pub fn record_request(status_code: u16) {
    RELAY_REQUESTS_TOTAL
        .with_label_values(&[&status_code.to_string()])
        .inc();
}

/// Helper to record Gemini API call metrics
pub fn record_gemini_call(model: &str, outcome: CallOutcome, duration_secs: f64) {
    GEMINI_API_CALLS
        .with_label_values(&[outcome.as_label()])
        .inc();

    GEMINI_API_DURATION
        .with_label_values(&[model])
        .observe(duration_secs);
}
