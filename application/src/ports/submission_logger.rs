//! Port for structured submission logging.
//!
//! Records every submit attempt and its outcome to a machine-readable log
//! (JSONL). This is separate from `tracing`-based diagnostics.

use serde_json::Value;

/// A structured submission event.
pub struct SubmissionEvent {
    /// Event type identifier ("submission_attempt", "submission_result").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl SubmissionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging submission events.
///
/// `log` is synchronous and infallible; implementations swallow write errors
/// so logging never changes the outcome of a submit.
pub trait SubmissionLogger: Send + Sync {
    fn log(&self, event: SubmissionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoSubmissionLogger;

impl SubmissionLogger for NoSubmissionLogger {
    fn log(&self, _event: SubmissionEvent) {}
}
