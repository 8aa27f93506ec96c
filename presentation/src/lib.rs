//! Presentation layer for feedback-form
//!
//! This crate contains the CLI definition, the interactive form session,
//! output formatting and submission progress display.

pub mod cli;
pub mod config;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::OutputConfig;
pub use form::{FormCommand, FormRepl, check_before_submit, check_field_input};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{SimpleProgress, SpinnerProgress, progress_for};
