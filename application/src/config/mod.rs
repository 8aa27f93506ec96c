//! Application-level configuration.
//!
//! - [`EndpointConfig`] — where and how feedback is submitted

pub mod endpoint;

pub use endpoint::EndpointConfig;
