//! Configuration model for the Tine plugin-list assembler.
//!
//! Holds the serde types shared by the assembler and the CLI: plugin
//! descriptors, the transpiler options bag, the addon namespace settings and
//! the plan file that ties them together.

pub mod addon;
pub mod babel;
pub mod descriptor;
pub mod error;
mod helpers;
pub mod loading;
pub mod plan;
pub mod validation;

// Re-export main types
pub use addon::*;
pub use babel::*;
pub use descriptor::*;
pub use error::*;
pub use plan::*;

pub use loading::{ENV_PREFIX, PlanLoader, load_plan};
pub use validation::{PlanValidator, SchemaValidator, validate_schema};
