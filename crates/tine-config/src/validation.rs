//! Schema validation for plan files (no filesystem checks).

use crate::babel::BabelOptions;
use crate::descriptor::PluginDescriptor;
use crate::error::{ConfigError, Result};
use crate::plan::PlanConfig;

/// Trait for pluggable plan validation strategies
pub trait PlanValidator {
    fn validate(&self, plan: &PlanConfig) -> Result<()>;
}

/// Schema-only validation
///
/// # Example
///
/// ```
/// use tine_config::{PlanConfig, PlanValidator, SchemaValidator};
///
/// let plan = PlanConfig::default();
/// SchemaValidator.validate(&plan).unwrap();
/// ```
pub struct SchemaValidator;

impl PlanValidator for SchemaValidator {
    fn validate(&self, plan: &PlanConfig) -> Result<()> {
        if plan.project.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "project name cannot be empty".to_string(),
                hint: Some("Set 'project' or add a name to package.json".to_string()),
            });
        }

        if let Some(babel) = &plan.addon.babel {
            validate_plugins("plugins", &babel.plugins)?;
            validate_plugins("postTransformPlugins", &babel.post_transform_plugins)?;
            validate_no_overlap(babel)?;
        }

        if let Some(features) = &plan.addon.addon {
            if features.legacy_decorators && features.decorators_before_export {
                return Err(ConfigError::SchemaValidation {
                    message: "decoratorsBeforeExport cannot be combined with legacy decorators"
                        .to_string(),
                    hint: Some(
                        "Set legacyDecorators = false to use decoratorsBeforeExport".to_string(),
                    ),
                });
            }
        }

        Ok(())
    }
}

fn validate_plugins(field: &str, plugins: &[PluginDescriptor]) -> Result<()> {
    for plugin in plugins {
        if plugin.id().trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: format!("{field} contains a plugin with an empty name"),
                hint: Some("Remove empty strings from the plugin list".to_string()),
            });
        }

        let Some(options) = plugin.options() else {
            continue;
        };
        if !options.is_object() && !options.is_null() {
            return Err(ConfigError::SchemaValidation {
                message: format!("options for plugin '{}' must be an object", plugin.id()),
                hint: Some("Use [name, { ... }] for plugins with options".to_string()),
            });
        }
    }

    Ok(())
}

fn validate_no_overlap(babel: &BabelOptions) -> Result<()> {
    for post in &babel.post_transform_plugins {
        if babel.plugins.iter().any(|p| p.id() == post.id()) {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "plugin '{}' is listed in both plugins and postTransformPlugins",
                    post.id()
                ),
                hint: Some("Keep each plugin in exactly one list".to_string()),
            });
        }
    }

    Ok(())
}

/// Convenience function for schema-only validation
pub fn validate_schema(plan: &PlanConfig) -> Result<()> {
    SchemaValidator.validate(plan)
}
