//! Rating value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A feedback rating.
///
/// The scale is 1 to 5, but the range is advisory: values outside it are
/// representable and are sent to the server as-is. Only the input layer
/// refuses them. Serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(i64);

impl Rating {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 5;
    pub const DEFAULT: i64 = 5;

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Whether the value lies on the 1..=5 scale.
    pub fn is_in_range(&self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Rating {
    type Err = DomainError;

    /// Parses the raw text of a numeric input. Only whole numbers are
    /// accepted; range is not checked.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Rating)
            .map_err(|_| DomainError::InvalidRating(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_five() {
        assert_eq!(Rating::default().value(), 5);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" 3 ".parse::<Rating>().unwrap(), Rating::new(3));
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        assert!("three".parse::<Rating>().is_err());
        assert!("4.5".parse::<Rating>().is_err());
        assert!("".parse::<Rating>().is_err());
    }

    #[test]
    fn test_out_of_range_is_representable() {
        let rating: Rating = "9".parse().unwrap();
        assert_eq!(rating.value(), 9);
        assert!(!rating.is_in_range());
        assert!(Rating::new(1).is_in_range());
        assert!(Rating::new(5).is_in_range());
        assert!(!Rating::new(0).is_in_range());
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Rating::new(4)).unwrap(), "4");
    }
}
