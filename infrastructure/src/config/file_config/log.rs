//! Submission log configuration from TOML (`[log]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw submission log configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// JSONL file that records every submit attempt. Disabled when unset.
    pub submissions_file: Option<String>,
}

impl FileLogConfig {
    /// The configured path with a leading `~/` expanded to the home directory
    pub fn submissions_path(&self) -> Option<PathBuf> {
        let raw = self.submissions_file.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(raw)),
        }
    }
}
