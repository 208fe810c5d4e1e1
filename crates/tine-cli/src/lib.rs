//! Tine CLI - assemble transpiler plugin lists from a plan file.
//!
//! - [`cli`] - argument definitions
//! - [`commands`] - `plan` and `check`
//! - [`error`] - error types and miette conversion
//! - [`logger`] - tracing setup
//! - [`ui`] - status lines on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
