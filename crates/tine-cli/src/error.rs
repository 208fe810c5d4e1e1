//! Error handling for the Tine CLI.
//!
//! `CliError` wraps the library errors via `#[from]` so commands can use `?`
//! throughout; `main` turns it into a miette report.

mod report;

use std::path::PathBuf;
use thiserror::Error;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Plan file loading or validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] tine_config::ConfigError),

    /// The plugin list could not be assembled
    #[error("Assembly error: {0}")]
    Assembly(#[from] tine_assembler::AssemblyError),

    /// `--deny-warnings` was set and the assembler warned
    #[error("{0} warning(s) emitted and --deny-warnings is set")]
    WarningsDenied(usize),

    /// Directory passed on the command line does not exist
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;
