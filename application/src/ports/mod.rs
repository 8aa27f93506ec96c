//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod feedback_gateway;
pub mod submission_logger;
pub mod submission_progress;
