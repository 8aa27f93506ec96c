//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types where
//! appropriate.

mod endpoint;
mod log;
mod output;

pub use endpoint::FileEndpointConfig;
pub use log::FileLogConfig;
pub use output::FileOutputConfig;

use feedback_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Feedback service location
    pub endpoint: FileEndpointConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Submission log settings
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.endpoint.validate()
    }
}
