//! Endpoint configuration for the feedback service.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Location of the feedback service and the request timeout.
///
/// The full request URL is `base_url` followed by `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Scheme, host and port, e.g. `http://localhost:3001`.
    pub base_url: String,
    /// Request path, e.g. `/submit-feedback`.
    pub path: String,
    /// Upper bound for the whole request; expiry counts as a connection failure.
    pub timeout: Duration,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            path: "/submit-feedback".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl EndpointConfig {
    // ==================== Builder Methods ====================

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full request URL
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        assert_eq!(
            EndpointConfig::default().url(),
            "http://localhost:3001/submit-feedback"
        );
    }

    #[test]
    fn test_trailing_slash_is_not_doubled() {
        let config = EndpointConfig::default().with_base_url("http://feedback.internal:8080/");
        assert_eq!(config.url(), "http://feedback.internal:8080/submit-feedback");
    }

    #[test]
    fn test_builder() {
        let config = EndpointConfig::default()
            .with_path("/api/feedback")
            .with_timeout(Duration::from_secs(2));
        assert_eq!(config.path, "/api/feedback");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }
}
