//! Field identifiers for the feedback record.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One input of the feedback form.
///
/// Every edit goes through [`FeedbackSubmission::apply`](super::entities::FeedbackSubmission::apply)
/// keyed by this enum, so there is exactly one update path for all fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackField {
    Name,
    Email,
    Rating,
    Feedback,
}

impl FeedbackField {
    /// All fields in form order.
    pub const ALL: [FeedbackField; 4] = [
        FeedbackField::Name,
        FeedbackField::Email,
        FeedbackField::Rating,
        FeedbackField::Feedback,
    ];

    /// Identifier used in JSON and in `/set <field>` commands.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackField::Name => "name",
            FeedbackField::Email => "email",
            FeedbackField::Rating => "rating",
            FeedbackField::Feedback => "feedback",
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackField::Name => "Name",
            FeedbackField::Email => "Email",
            FeedbackField::Rating => "Rating (1-5)",
            FeedbackField::Feedback => "Feedback",
        }
    }

    /// Whether the input layer refuses an empty value.
    ///
    /// Email is not required.
    pub fn is_required(&self) -> bool {
        !matches!(self, FeedbackField::Email)
    }
}

impl std::fmt::Display for FeedbackField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FeedbackField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(FeedbackField::Name),
            "email" => Ok(FeedbackField::Email),
            "rating" => Ok(FeedbackField::Rating),
            "feedback" => Ok(FeedbackField::Feedback),
            other => Err(DomainError::UnknownField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_identifier() {
        for field in FeedbackField::ALL {
            assert_eq!(field.as_str().parse::<FeedbackField>().unwrap(), field);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" Rating ".parse::<FeedbackField>().unwrap(), FeedbackField::Rating);
    }

    #[test]
    fn test_parse_unknown_field() {
        let err = "age".parse::<FeedbackField>().unwrap_err();
        assert_eq!(err, DomainError::UnknownField("age".to_string()));
    }

    #[test]
    fn test_email_is_only_optional_field() {
        let optional: Vec<_> = FeedbackField::ALL
            .iter()
            .filter(|f| !f.is_required())
            .collect();
        assert_eq!(optional, vec![&FeedbackField::Email]);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&FeedbackField::Feedback).unwrap();
        assert_eq!(json, "\"feedback\"");
    }
}
