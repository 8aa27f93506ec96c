//! Feedback gateway port
//!
//! Defines the interface for delivering a submission to the feedback service.

use async_trait::async_trait;
use feedback_domain::FeedbackSubmission;
use thiserror::Error;

/// Errors raised when no HTTP response was obtained at all
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

/// A raw HTTP response from the feedback service.
///
/// Interpretation (success, rejection message) is left to the use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: String,
}

impl GatewayResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Gateway for submitting feedback
///
/// Sends the record as a JSON POST. Any HTTP status, including 4xx and 5xx,
/// is an `Ok` response; `Err` means the request never completed.
#[async_trait]
pub trait FeedbackGateway: Send + Sync {
    async fn submit(&self, submission: &FeedbackSubmission)
    -> Result<GatewayResponse, GatewayError>;

    /// Human-readable target, used in logs
    fn endpoint(&self) -> String;
}
