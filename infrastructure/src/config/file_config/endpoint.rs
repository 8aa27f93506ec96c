//! Endpoint configuration from TOML (`[endpoint]` section)

use feedback_application::EndpointConfig;
use feedback_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw endpoint configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Scheme, host and port of the feedback service
    pub base_url: String,
    /// Request path
    pub path: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        let defaults = EndpointConfig::default();
        Self {
            base_url: defaults.base_url,
            path: defaults.path,
            timeout_secs: defaults.timeout.as_secs(),
        }
    }
}

impl FileEndpointConfig {
    pub fn to_endpoint_config(&self) -> EndpointConfig {
        EndpointConfig::default()
            .with_base_url(self.base_url.trim())
            .with_path(self.path.trim())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "endpoint.base_url".to_string(),
                },
                "endpoint.base_url must not be empty",
            ));
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::UnsupportedScheme {
                    url: base_url.to_string(),
                },
                format!("endpoint.base_url: '{}' must start with http:// or https://", base_url),
            ));
        }

        if !self.path.trim().starts_with('/') {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::RelativePath {
                    path: self.path.clone(),
                },
                format!("endpoint.path: '{}' should start with '/'", self.path),
            ));
        }

        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout,
                "endpoint.timeout_secs must be greater than zero",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_application_default() {
        let config = FileEndpointConfig::default().to_endpoint_config();
        assert_eq!(config, EndpointConfig::default());
    }

    #[test]
    fn test_default_is_valid() {
        assert!(FileEndpointConfig::default().validate().is_empty());
    }

    #[test]
    fn test_empty_base_url_is_error() {
        let config = FileEndpointConfig {
            base_url: "  ".to_string(),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(matches!(issues[0].code, ConfigIssueCode::EmptyValue { .. }));
    }

    #[test]
    fn test_unsupported_scheme_is_error() {
        let config = FileEndpointConfig {
            base_url: "localhost:3001".to_string(),
            ..Default::default()
        };
        let issues = config.validate();
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::UnsupportedScheme { .. }
        ));
    }

    #[test]
    fn test_relative_path_is_warning() {
        let config = FileEndpointConfig {
            path: "submit-feedback".to_string(),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_zero_timeout_is_error() {
        let config = FileEndpointConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues[0].code, ConfigIssueCode::ZeroTimeout);
    }
}
