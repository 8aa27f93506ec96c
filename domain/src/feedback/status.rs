//! Submission outcome and the status message shown for it

use serde::{Deserialize, Serialize};

/// Shown while the request is in flight.
pub const SUBMITTING_MESSAGE: &str = "Submitting...";

/// Prefix that marks a success message.
pub const SUCCESS_INDICATOR: &str = "✅";

pub const SUCCESS_MESSAGE: &str = "✅ Success: Feedback received by the server!";

/// Used when a rejection carries no `message` field.
pub const REJECTION_FALLBACK: &str = "Submission failed.";

pub const CONNECTION_FAILURE_MESSAGE: &str =
    "Network Error: Could not connect to the feedback server. Is it running?";

/// What happened to one submit attempt on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// 2xx with a JSON body.
    Accepted { status: u16 },
    /// Non-2xx. `message` comes from the body's `message` field when present.
    Rejected {
        status: u16,
        message: Option<String>,
    },
    /// No response at all: refused, DNS failure, timeout.
    Unreachable { reason: String },
    /// A response whose body is not JSON, whatever its status.
    MalformedResponse { status: u16, reason: String },
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted { .. })
    }

    /// HTTP status, if a response arrived
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SubmissionOutcome::Accepted { status }
            | SubmissionOutcome::Rejected { status, .. }
            | SubmissionOutcome::MalformedResponse { status, .. } => Some(*status),
            SubmissionOutcome::Unreachable { .. } => None,
        }
    }
}

/// The status line of the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    /// Nothing submitted yet; no message is shown.
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Holds the full display text, e.g. `Error: Invalid rating`.
    Rejected(String),
    Unreachable,
}

impl SubmissionStatus {
    /// Map a wire outcome to the status the form displays.
    ///
    /// A malformed success body shares the connection-failure message: the
    /// attempt did not produce a usable answer.
    pub fn from_outcome(outcome: &SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Accepted { .. } => SubmissionStatus::Succeeded,
            SubmissionOutcome::Rejected { message, .. } => {
                let text = message
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(REJECTION_FALLBACK);
                SubmissionStatus::Rejected(format!("Error: {}", text))
            }
            SubmissionOutcome::Unreachable { .. } | SubmissionOutcome::MalformedResponse { .. } => {
                SubmissionStatus::Unreachable
            }
        }
    }

    /// Text to display, or `None` when idle
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Submitting => Some(SUBMITTING_MESSAGE),
            SubmissionStatus::Succeeded => Some(SUCCESS_MESSAGE),
            SubmissionStatus::Rejected(text) => Some(text.as_str()),
            SubmissionStatus::Unreachable => Some(CONNECTION_FAILURE_MESSAGE),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Succeeded)
    }

    /// Whether the attempt ended without the server accepting it
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            SubmissionStatus::Rejected(_) | SubmissionStatus::Unreachable
        )
    }

    /// Whether a displayed message is a success message
    pub fn is_success_message(message: &str) -> bool {
        message.starts_with(SUCCESS_INDICATOR)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message().unwrap_or(""))
    }
}
