//! Application layer for feedback-form
//!
//! This crate contains the form controller, the submit use case, port
//! definitions, and endpoint configuration. It depends only on the domain
//! layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::EndpointConfig;
pub use ports::{
    feedback_gateway::{FeedbackGateway, GatewayError, GatewayResponse},
    submission_logger::{NoSubmissionLogger, SubmissionEvent, SubmissionLogger},
    submission_progress::{NoSubmissionProgress, SubmissionProgress},
};
pub use use_cases::feedback_form::FeedbackForm;
pub use use_cases::submit_feedback::SubmitFeedbackUseCase;
