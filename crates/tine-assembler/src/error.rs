//! Error types for plugin-list assembly.
//!
//! A plugin that is already present is never an error; it is reported through
//! the warning sink instead. These variants cover precondition failures only.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AssemblyError>;

#[derive(Debug, Error)]
pub enum AssemblyError {
    /// The before/after constraints for a plugin cannot both hold
    #[error("cannot place plugin '{plugin}': it must run after '{after}' but before '{before}'")]
    UnsatisfiableOrder {
        plugin: String,
        after: String,
        before: String,
    },

    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    #[error("failed to serialize transpiler options: {0}")]
    Serialize(#[from] serde_json::Error),
}
