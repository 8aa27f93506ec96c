//! Feedback form controller.
//!
//! Holds the in-memory [`FeedbackSubmission`] and the status line. Input
//! adapters call [`FeedbackForm::on_field_change`] for every edit and
//! [`FeedbackForm::on_submit`] on user action.
//!
//! After a submit the record is reset on success and kept as-is on any
//! failure, so the user can resubmit without re-entering data.

use super::submit_feedback::SubmitFeedbackUseCase;
use crate::ports::submission_progress::SubmissionProgress;
use feedback_domain::{DomainError, FeedbackField, FeedbackSubmission, SubmissionStatus};
use tracing::debug;

pub struct FeedbackForm {
    submission: FeedbackSubmission,
    status: SubmissionStatus,
    use_case: SubmitFeedbackUseCase,
}

impl FeedbackForm {
    pub fn new(use_case: SubmitFeedbackUseCase) -> Self {
        Self {
            submission: FeedbackSubmission::new(),
            status: SubmissionStatus::Idle,
            use_case,
        }
    }

    /// Start from a pre-filled record instead of defaults
    pub fn with_submission(mut self, submission: FeedbackSubmission) -> Self {
        self.submission = submission;
        self
    }

    pub fn submission(&self) -> &FeedbackSubmission {
        &self.submission
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// The status message currently displayed, if any
    pub fn message(&self) -> Option<&str> {
        self.status.message()
    }

    /// Update one field. The rating range is not checked here.
    pub fn on_field_change(&mut self, field: FeedbackField, value: &str) -> Result<(), DomainError> {
        self.submission.apply(field, value)?;
        debug!("Field '{}' changed", field);
        Ok(())
    }

    /// Submit the current record once and update the status.
    ///
    /// Never fails: every outcome ends up as a status message.
    pub async fn on_submit(&mut self, progress: &dyn SubmissionProgress) -> &SubmissionStatus {
        self.status = SubmissionStatus::Submitting;
        progress.on_submitting(&self.submission);

        let outcome = self.use_case.execute(&self.submission).await;

        self.status = SubmissionStatus::from_outcome(&outcome);
        if outcome.is_accepted() {
            self.submission.reset();
        }

        progress.on_finished(&self.status);
        &self.status
    }

    /// Clear every field and the status message
    pub fn reset(&mut self) {
        self.submission.reset();
        self.status = SubmissionStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::feedback_gateway::{FeedbackGateway, GatewayError, GatewayResponse};
    use crate::ports::submission_progress::NoSubmissionProgress;
    use async_trait::async_trait;
    use feedback_domain::{CONNECTION_FAILURE_MESSAGE, Rating, SUBMITTING_MESSAGE};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    // ==================== Test Mocks ====================

    struct ScriptedGateway {
        responses: Mutex<VecDeque<Result<GatewayResponse, GatewayError>>>,
    }

    impl ScriptedGateway {
        fn new(responses: Vec<Result<GatewayResponse, GatewayError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
            }
        }
    }

    #[async_trait]
    impl FeedbackGateway for ScriptedGateway {
        async fn submit(
            &self,
            _submission: &FeedbackSubmission,
        ) -> Result<GatewayResponse, GatewayError> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::RequestFailed("No more responses".into())))
        }

        fn endpoint(&self) -> String {
            "mock://feedback".to_string()
        }
    }

    /// Records the status messages the user would have seen, in order.
    struct RecordingProgress {
        seen: Mutex<Vec<String>>,
    }

    impl RecordingProgress {
        fn new() -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl SubmissionProgress for RecordingProgress {
        fn on_submitting(&self, _submission: &FeedbackSubmission) {
            self.seen.lock().unwrap().push(SUBMITTING_MESSAGE.to_string());
        }

        fn on_finished(&self, status: &SubmissionStatus) {
            self.seen
                .lock()
                .unwrap()
                .push(status.message().unwrap_or_default().to_string());
        }
    }

    fn form(responses: Vec<Result<GatewayResponse, GatewayError>>) -> FeedbackForm {
        let gateway = Arc::new(ScriptedGateway::new(responses));
        FeedbackForm::new(SubmitFeedbackUseCase::new(gateway))
    }

    fn fill(form: &mut FeedbackForm) {
        form.on_field_change(FeedbackField::Name, "Ada").unwrap();
        form.on_field_change(FeedbackField::Email, "ada@example.com").unwrap();
        form.on_field_change(FeedbackField::Rating, "3").unwrap();
        form.on_field_change(FeedbackField::Feedback, "Loved it").unwrap();
    }

    // ==================== Tests ====================

    #[test]
    fn test_new_form_is_pristine_and_silent() {
        let form = form(vec![]);
        assert!(form.submission().is_pristine());
        assert_eq!(form.message(), None);
    }

    #[test]
    fn test_field_change_updates_only_that_field() {
        let mut form = form(vec![]);
        fill(&mut form);

        form.on_field_change(FeedbackField::Email, "other@example.com")
            .unwrap();

        let s = form.submission();
        assert_eq!(s.name, "Ada");
        assert_eq!(s.email, "other@example.com");
        assert_eq!(s.rating, Rating::new(3));
        assert_eq!(s.feedback, "Loved it");
    }

    #[test]
    fn test_out_of_range_rating_is_not_blocked() {
        let mut form = form(vec![]);
        form.on_field_change(FeedbackField::Rating, "0").unwrap();
        assert_eq!(form.submission().rating.value(), 0);
    }

    #[tokio::test]
    async fn test_success_resets_fields() {
        let mut form = form(vec![Ok(GatewayResponse::new(200, r#"{"received":true}"#))]);
        fill(&mut form);

        let status = form.on_submit(&NoSubmissionProgress).await.clone();

        assert!(status.is_success());
        assert!(form.message().unwrap().starts_with("✅"));
        let s = form.submission();
        assert_eq!(s.name, "");
        assert_eq!(s.email, "");
        assert_eq!(s.rating, Rating::new(5));
        assert_eq!(s.feedback, "");
    }

    #[tokio::test]
    async fn test_rejection_shows_server_message_and_keeps_fields() {
        let mut form = form(vec![Ok(GatewayResponse::new(
            400,
            r#"{"message":"Invalid rating"}"#,
        ))]);
        fill(&mut form);
        let before = form.submission().clone();

        form.on_submit(&NoSubmissionProgress).await;

        assert_eq!(form.message(), Some("Error: Invalid rating"));
        assert_eq!(*form.submission(), before);
    }

    #[tokio::test]
    async fn test_connection_refused_shows_fixed_message_and_keeps_fields() {
        let mut form = form(vec![Err(GatewayError::ConnectionError(
            "connection refused".to_string(),
        ))]);
        fill(&mut form);
        let before = form.submission().clone();

        form.on_submit(&NoSubmissionProgress).await;

        assert_eq!(form.message(), Some(CONNECTION_FAILURE_MESSAGE));
        assert_eq!(*form.submission(), before);
    }

    #[tokio::test]
    async fn test_gateway_error_page_shows_fixed_message_and_keeps_fields() {
        let mut form = form(vec![Ok(GatewayResponse::new(
            502,
            "<html>Bad Gateway</html>",
        ))]);
        fill(&mut form);
        let before = form.submission().clone();

        form.on_submit(&NoSubmissionProgress).await;

        assert_eq!(form.message(), Some(CONNECTION_FAILURE_MESSAGE));
        assert_eq!(*form.submission(), before);
    }

    #[tokio::test]
    async fn test_numeric_server_message_is_shown() {
        let mut form = form(vec![Ok(GatewayResponse::new(400, r#"{"message":12}"#))]);
        fill(&mut form);

        form.on_submit(&NoSubmissionProgress).await;

        assert_eq!(form.message(), Some("Error: 12"));
    }

    #[tokio::test]
    async fn test_manual_retry_after_failure() {
        let mut form = form(vec![
            Err(GatewayError::Timeout),
            Ok(GatewayResponse::new(200, "{}")),
        ]);
        fill(&mut form);

        form.on_submit(&NoSubmissionProgress).await;
        assert!(form.status().is_failure());
        assert!(!form.submission().is_pristine());

        form.on_submit(&NoSubmissionProgress).await;
        assert!(form.status().is_success());
        assert!(form.submission().is_pristine());
    }

    #[tokio::test]
    async fn test_progress_sees_submitting_then_result() {
        let mut form = form(vec![Ok(GatewayResponse::new(500, "{}"))]);
        let progress = RecordingProgress::new();

        form.on_submit(&progress).await;

        assert_eq!(
            *progress.seen.lock().unwrap(),
            vec![
                "Submitting...".to_string(),
                "Error: Submission failed.".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_reset_clears_status() {
        let mut form = form(vec![Err(GatewayError::Timeout)]);
        fill(&mut form);
        form.on_submit(&NoSubmissionProgress).await;

        form.reset();

        assert!(form.submission().is_pristine());
        assert_eq!(*form.status(), SubmissionStatus::Idle);
    }
}
