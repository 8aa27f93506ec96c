//! Infrastructure layer for feedback-form
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileEndpointConfig, FileLogConfig, FileOutputConfig,
};
pub use http::HttpFeedbackGateway;
pub use logging::JsonlSubmissionLogger;
