//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown field: {0} (expected one of: name, email, rating, feedback)")]
    UnknownField(String),

    #[error("Rating must be a whole number, got '{0}'")]
    InvalidRating(String),
}

impl DomainError {
    /// Check if this error was caused by user input on a known field
    pub fn is_input_error(&self) -> bool {
        matches!(self, DomainError::InvalidRating(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rating_display() {
        let error = DomainError::InvalidRating("abc".to_string());
        assert_eq!(error.to_string(), "Rating must be a whole number, got 'abc'");
    }

    #[test]
    fn test_is_input_error() {
        assert!(DomainError::InvalidRating("x".to_string()).is_input_error());
        assert!(!DomainError::UnknownField("age".to_string()).is_input_error());
    }
}
