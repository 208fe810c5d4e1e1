//! Plugin ordering and conflict resolution for transpiler plugin lists.
//!
//! Given the options a project handed to the build addon, decide which
//! transforms (TypeScript, decorators, class properties) to inject, where, and
//! with which options. Transforms the project already added are kept and
//! reported through a [`WarningSink`] instead of being injected twice.
//!
//! # Example
//!
//! ```
//! use tine_assembler::{AssemblyInput, PluginListAssembler, Project};
//! use tine_config::PlanConfig;
//! use serde_json::json;
//!
//! let plan = PlanConfig::from_value(json!({
//!     "project": "my-app",
//!     "babel": { "plugins": ["@babel/plugin-transform-typescript"] },
//!     "ember-cli-babel": { "enableTypeScriptTransform": false }
//! })).unwrap();
//!
//! let assembly = PluginListAssembler::for_plan(&plan)
//!     .assemble(AssemblyInput::from(&plan))
//!     .unwrap();
//!
//! let ids: Vec<&str> = assembly.plugins.iter().map(|p| p.id()).collect();
//! assert_eq!(ids, [
//!     "@babel/plugin-proposal-decorators",
//!     "@babel/plugin-proposal-class-properties",
//!     "@babel/plugin-transform-typescript",
//! ]);
//! ```

pub mod assembler;
pub mod context;
pub mod error;
pub mod feature;
pub mod matcher;
pub mod placement;
pub mod project;
pub mod resolver;
pub mod stages;
pub mod warnings;

pub use assembler::{Assembly, AssemblyInput, PluginListAssembler};
pub use context::AssemblyContext;
pub use error::{AssemblyError, Result};
pub use feature::Feature;
pub use matcher::{PackageSegmentMatcher, PluginMatcher, find_plugin, has_plugin};
pub use placement::{Placement, insert_plugin};
pub use project::{Project, ProjectInfo};
pub use resolver::{NodeModulesResolver, PackageNameResolver, PluginResolver};
pub use stages::{
    DecoratorRequest, class_properties_options, insert_decorator_plugins, insert_typescript_plugin,
};
pub use warnings::{RecordingSink, TracingSink, WarningSink};
