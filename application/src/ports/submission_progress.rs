//! Submission progress port
//!
//! While a submit is in flight the form is mutably borrowed, so the transient
//! "Submitting..." state is only observable through these callbacks.

use feedback_domain::{FeedbackSubmission, SubmissionStatus};

/// Callback for progress updates during a submit
///
/// Implementations live in the presentation layer.
pub trait SubmissionProgress: Send + Sync {
    /// Called right before the request is sent
    fn on_submitting(&self, submission: &FeedbackSubmission);

    /// Called with the final status of the attempt
    fn on_finished(&self, status: &SubmissionStatus);
}

/// No-op progress for when progress reporting is not needed
pub struct NoSubmissionProgress;

impl SubmissionProgress for NoSubmissionProgress {
    fn on_submitting(&self, _submission: &FeedbackSubmission) {}
    fn on_finished(&self, _status: &SubmissionStatus) {}
}
