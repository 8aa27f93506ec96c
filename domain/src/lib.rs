//! Domain layer for feedback-form
//!
//! This crate contains the feedback record, its field identifiers and the
//! status a form displays after a submit attempt. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **FeedbackSubmission**: the record of user-entered data sent to the
//!   feedback service (name, email, rating, feedback)
//! - **FeedbackField**: identifies one field so a single name-keyed update can
//!   drive every input
//! - **SubmissionOutcome / SubmissionStatus**: what the server answered, and
//!   the message the form shows for it

pub mod config;
pub mod core;
pub mod feedback;
pub mod util;

// Re-export commonly used types
pub use config::validation::{ConfigIssue, ConfigIssueCode, Severity};
pub use self::core::error::DomainError;
pub use feedback::{
    entities::FeedbackSubmission,
    field::FeedbackField,
    rating::Rating,
    status::{
        CONNECTION_FAILURE_MESSAGE, REJECTION_FALLBACK, SUBMITTING_MESSAGE, SUCCESS_INDICATOR,
        SUCCESS_MESSAGE, SubmissionOutcome, SubmissionStatus,
    },
};
