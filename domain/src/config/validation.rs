//! Structured configuration issues.
//!
//! Loaders report problems as a list of [`ConfigIssue`]s instead of failing on
//! the first one, so the caller can print warnings and refuse to start only on
//! [`Severity::Error`].

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A required string setting is empty.
    EmptyValue { field: String },
    /// The endpoint path does not start with `/`.
    RelativePath { path: String },
    /// The base URL does not use an http or https scheme.
    UnsupportedScheme { url: String },
    /// The request timeout is zero.
    ZeroTimeout,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let err = ConfigIssue::error(ConfigIssueCode::ZeroTimeout, "timeout is zero");
        assert!(err.is_error());
        assert_eq!(err.message, "timeout is zero");

        let warn = ConfigIssue::warning(
            ConfigIssueCode::RelativePath {
                path: "submit".to_string(),
            },
            "path should start with /",
        );
        assert!(!warn.is_error());
        assert_eq!(warn.severity, Severity::Warning);
    }
}
