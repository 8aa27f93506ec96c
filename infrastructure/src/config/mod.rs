//! Configuration file loading for feedback-form
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `FEEDBACK_*` environment variables (`FEEDBACK_ENDPOINT__BASE_URL`, ...)
//! 2. `--config <path>` specified file
//! 3. Project root: `./feedback.toml` or `./.feedback.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/feedback-form/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileEndpointConfig, FileLogConfig, FileOutputConfig};
pub use loader::ConfigLoader;
