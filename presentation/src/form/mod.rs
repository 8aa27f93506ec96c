//! Interactive feedback form session
//!
//! - [`command::FormCommand`] — slash commands accepted by the session
//! - [`input`] — the restrictions the input layer applies before data
//!   reaches the form (required fields, 1-5 rating)
//! - [`repl::FormRepl`] — the line-editor loop

pub mod command;
pub mod input;
pub mod repl;

pub use command::FormCommand;
pub use input::{check_before_submit, check_field_input};
pub use repl::FormRepl;
