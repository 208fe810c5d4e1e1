//! Decorators and class-fields injection.
//!
//! Both transforms are detected independently. Whatever is missing is
//! inserted around the TypeScript transform: after it when this addon
//! compiles TypeScript (type-only syntax has to be gone before the decorator
//! transforms look at class bodies), before it otherwise. Class properties
//! always follow decorators.

use serde_json::{Value, json};
use tine_config::{AddonFeatureOptions, AddonOptions, BabelOptions, PluginDescriptor};

use crate::context::AssemblyContext;
use crate::error::Result;
use crate::feature::Feature;
use crate::placement::{Placement, insert_plugin};
use crate::stages::loose::class_properties_options;

/// Inputs for [`insert_decorator_plugins`].
#[derive(Debug, Clone, Copy)]
pub struct DecoratorRequest<'a> {
    pub plugins: &'a [PluginDescriptor],
    pub options: &'a BabelOptions,
    pub config: &'a AddonOptions,
    pub is_class_properties_required: bool,
}

/// Insert the decorators plugin and, when required, the class-properties
/// plugin.
///
/// A transform the project already added is left in place and reported once
/// through the warning sink.
///
/// # Errors
///
/// `AssemblyError::UnsatisfiableOrder` when the user's list orders the
/// TypeScript and class-properties transforms so that no valid slot exists.
pub fn insert_decorator_plugins(
    request: &DecoratorRequest<'_>,
    ctx: &AssemblyContext<'_>,
) -> Result<Vec<PluginDescriptor>> {
    let mut plugins = request.plugins.to_vec();
    let features = request.config.features();
    let typescript_first = request.config.enable_typescript_transform();

    let typescript = Feature::TypeScript.package();
    let decorators = Feature::Decorators.package();
    let class_properties = Feature::ClassProperties.package();

    if ctx.find(&plugins, Feature::Decorators).is_some() {
        ctx.warn_manual_plugin(Feature::Decorators);
    } else {
        let placement = if typescript_first {
            Placement::anywhere().after(typescript).before(class_properties)
        } else {
            Placement::anywhere().before(class_properties).before(typescript)
        };
        let descriptor = PluginDescriptor::with_options(
            ctx.resolve(Feature::Decorators),
            decorator_options(&features),
        );
        let index = insert_plugin(&mut plugins, descriptor, &placement, ctx.matcher())?;
        tracing::debug!(index, typescript_first, "inserted decorators plugin");
    }

    if !request.is_class_properties_required {
        tracing::debug!("class properties not required by targets");
        return Ok(plugins);
    }

    if ctx.find(&plugins, Feature::ClassProperties).is_some() {
        ctx.warn_manual_plugin(Feature::ClassProperties);
    } else {
        let placement = if typescript_first {
            Placement::anywhere().after(typescript).after(decorators)
        } else {
            Placement::anywhere().after(decorators).before(typescript)
        };
        let descriptor = PluginDescriptor::with_options(
            ctx.resolve(Feature::ClassProperties),
            class_properties_options(request.options),
        );
        let index = insert_plugin(&mut plugins, descriptor, &placement, ctx.matcher())?;
        tracing::debug!(index, typescript_first, "inserted class-properties plugin");
    }

    Ok(plugins)
}

fn decorator_options(features: &AddonFeatureOptions) -> Value {
    if features.legacy_decorators {
        json!({ "legacy": true })
    } else {
        json!({ "decoratorsBeforeExport": features.decorators_before_export })
    }
}
