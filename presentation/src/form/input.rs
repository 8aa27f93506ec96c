//! Input-layer restrictions.
//!
//! These mirror what form inputs themselves enforce (required fields, the
//! 1-5 range of the rating input). The form controller deliberately does not
//! repeat them.

use feedback_domain::{FeedbackField, FeedbackSubmission, Rating};

/// Check a value typed into one field before handing it to the form
pub fn check_field_input(field: FeedbackField, value: &str) -> Result<(), String> {
    if field.is_required() && value.trim().is_empty() {
        return Err(format!("{} is required", field.label()));
    }

    if field == FeedbackField::Rating {
        let rating: Rating = value.parse().map_err(|e: feedback_domain::DomainError| e.to_string())?;
        if !rating.is_in_range() {
            return Err(format!(
                "Rating must be between {} and {}",
                Rating::MIN,
                Rating::MAX
            ));
        }
    }

    Ok(())
}

/// Check the whole record before a submit, the way a form refuses to submit
/// with blank required inputs
pub fn check_before_submit(submission: &FeedbackSubmission) -> Result<(), String> {
    let missing = submission.missing_required();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|f| f.as_str()).collect();
        return Err(format!("Please fill in: {}", names.join(", ")));
    }

    if !submission.rating.is_in_range() {
        return Err(format!(
            "Rating must be between {} and {}",
            Rating::MIN,
            Rating::MAX
        ));
    }

    Ok(())
}
