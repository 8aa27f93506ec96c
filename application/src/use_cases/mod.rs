//! Use cases
//!
//! - [`submit_feedback::SubmitFeedbackUseCase`] — one POST, interpreted
//! - [`feedback_form::FeedbackForm`] — form state, field changes and submit

pub mod feedback_form;
pub mod submit_feedback;
