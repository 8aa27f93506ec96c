//! HTTP adapter for the feedback service.
//!
//! Provides [`HttpFeedbackGateway`], a `reqwest` client implementing the
//! [`FeedbackGateway`](feedback_application::FeedbackGateway) port.

mod gateway;

pub use gateway::HttpFeedbackGateway;
