//! The feedback record

use super::field::FeedbackField;
use super::rating::Rating;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The record of user-entered data sent to the feedback service (Entity)
///
/// Lives only in memory for the duration of a form session. Created with
/// defaults, patched one field at a time, and reset after a successful
/// submission.
///
/// Serializes to `{ "name", "email", "rating", "feedback" }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    pub name: String,
    pub email: String,
    pub rating: Rating,
    pub feedback: String,
}

impl FeedbackSubmission {
    /// Create a record with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field as the input would display it
    pub fn get(&self, field: FeedbackField) -> String {
        match field {
            FeedbackField::Name => self.name.clone(),
            FeedbackField::Email => self.email.clone(),
            FeedbackField::Rating => self.rating.to_string(),
            FeedbackField::Feedback => self.feedback.clone(),
        }
    }

    /// Replace the value of one field, leaving the others untouched.
    ///
    /// Text fields take the value verbatim. The rating must be a whole number
    /// (the only restriction a numeric input imposes); on error the record is
    /// left unchanged.
    pub fn apply(&mut self, field: FeedbackField, value: &str) -> Result<(), DomainError> {
        match field {
            FeedbackField::Name => self.name = value.to_string(),
            FeedbackField::Email => self.email = value.to_string(),
            FeedbackField::Rating => self.rating = value.parse()?,
            FeedbackField::Feedback => self.feedback = value.to_string(),
        }
        Ok(())
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether every field still holds its default
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }

    /// Required fields that are currently blank
    pub fn missing_required(&self) -> Vec<FeedbackField> {
        FeedbackField::ALL
            .into_iter()
            .filter(|f| f.is_required())
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }
}
