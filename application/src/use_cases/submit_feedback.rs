//! Submit Feedback use case.
//!
//! Sends one [`FeedbackSubmission`] through the [`FeedbackGateway`] and turns
//! the raw HTTP answer into a [`SubmissionOutcome`]:
//!
//! | Response | Outcome |
//! |---|---|
//! | 2xx, JSON body | `Accepted` |
//! | non-2xx, JSON body | `Rejected` with the body's `message`, if set |
//! | any status, non-JSON body | `MalformedResponse` |
//! | no response | `Unreachable` |
//!
//! There is no retry: every attempt is final.

use crate::ports::feedback_gateway::{FeedbackGateway, GatewayResponse};
use crate::ports::submission_logger::{NoSubmissionLogger, SubmissionEvent, SubmissionLogger};
use feedback_domain::util::truncate_str;
use feedback_domain::{FeedbackSubmission, SubmissionOutcome};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for submitting feedback once.
#[derive(Clone)]
pub struct SubmitFeedbackUseCase {
    gateway: Arc<dyn FeedbackGateway>,
    logger: Arc<dyn SubmissionLogger>,
}

impl SubmitFeedbackUseCase {
    pub fn new(gateway: Arc<dyn FeedbackGateway>) -> Self {
        Self {
            gateway,
            logger: Arc::new(NoSubmissionLogger),
        }
    }

    /// Create with a submission logger.
    pub fn with_logger(mut self, logger: Arc<dyn SubmissionLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub async fn execute(&self, submission: &FeedbackSubmission) -> SubmissionOutcome {
        let endpoint = self.gateway.endpoint();
        info!("Submitting feedback to {}", endpoint);
        debug!(
            "Submission: name={:?}, rating={}, feedback={:?}",
            submission.name,
            submission.rating,
            truncate_str(&submission.feedback, 80)
        );

        self.logger.log(SubmissionEvent::new(
            "submission_attempt",
            serde_json::json!({
                "endpoint": endpoint,
                "submission": submission,
            }),
        ));

        let outcome = match self.gateway.submit(submission).await {
            Ok(response) => interpret_response(&response),
            Err(e) => {
                warn!("Feedback service unreachable: {}", e);
                SubmissionOutcome::Unreachable {
                    reason: e.to_string(),
                }
            }
        };

        match &outcome {
            SubmissionOutcome::Accepted { status } => info!("Feedback accepted ({})", status),
            SubmissionOutcome::Rejected { status, message } => {
                warn!("Feedback rejected ({}): {:?}", status, message)
            }
            SubmissionOutcome::MalformedResponse { status, reason } => {
                warn!("Unreadable response body ({}): {}", status, reason)
            }
            SubmissionOutcome::Unreachable { .. } => {}
        }

        self.logger.log(SubmissionEvent::new(
            "submission_result",
            serde_json::json!({
                "endpoint": endpoint,
                "result": outcome,
            }),
        ));

        outcome
    }
}

/// Classify a response by status and body.
///
/// The body is decoded before the status is looked at, so a body that is not
/// JSON makes the answer unusable whatever the status.
fn interpret_response(response: &GatewayResponse) -> SubmissionOutcome {
    let status = response.status;
    let value = match serde_json::from_str::<Value>(&response.body) {
        Ok(value) => value,
        Err(e) => {
            return SubmissionOutcome::MalformedResponse {
                status,
                reason: e.to_string(),
            };
        }
    };

    if response.is_success() {
        SubmissionOutcome::Accepted { status }
    } else {
        SubmissionOutcome::Rejected {
            status,
            message: value.get("message").and_then(display_message),
        }
    }
}

/// Render a `message` value for display.
///
/// `null`, `false`, `0` and `""` count as absent so the fallback text is used;
/// any other value is shown, strings without quotes.
fn display_message(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
