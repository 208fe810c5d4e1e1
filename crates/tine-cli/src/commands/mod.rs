//! Command implementations.
//!
//! Each command module exposes an `execute` function taking the parsed
//! arguments.

pub mod check;
pub mod plan;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use plan::execute as plan_execute;
