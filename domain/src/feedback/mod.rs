//! Feedback subdomain: the submission record and what happens to it.
//!
//! - [`entities::FeedbackSubmission`] — the record a form edits and submits
//! - [`field::FeedbackField`] — name-keyed field identifier
//! - [`rating::Rating`] — the numeric rating value
//! - [`status::SubmissionStatus`] — the message shown after each attempt

pub mod entities;
pub mod field;
pub mod rating;
pub mod status;
