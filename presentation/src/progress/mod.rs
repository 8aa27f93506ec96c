//! Submission progress display

pub mod reporter;
