//! The three assembly stages, applied in this order:
//!
//! 1. [`typescript`]: TypeScript transform presence and insertion
//! 2. [`decorators`]: decorators and class fields, positioned around TypeScript
//! 3. [`loose`]: loose-mode options for the class-properties transform
//!
//! Every stage takes the list by reference and returns a new one.

pub mod decorators;
pub mod loose;
pub mod typescript;

pub use decorators::{DecoratorRequest, insert_decorator_plugins};
pub use loose::class_properties_options;
pub use typescript::insert_typescript_plugin;
