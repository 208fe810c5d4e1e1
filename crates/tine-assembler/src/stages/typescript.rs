use serde_json::json;
use tine_config::{BabelOptions, PluginDescriptor};

use crate::context::AssemblyContext;
use crate::feature::Feature;

/// Append the TypeScript transform unless the list already has one.
///
/// Callers invoke this only when TypeScript handling is enabled. An existing
/// TypeScript plugin produces one warning and the list comes back unchanged.
pub fn insert_typescript_plugin(
    plugins: &[PluginDescriptor],
    options: &BabelOptions,
    ctx: &AssemblyContext<'_>,
) -> Vec<PluginDescriptor> {
    let mut plugins = plugins.to_vec();

    if let Some(index) = ctx.find(&plugins, Feature::TypeScript) {
        tracing::debug!(index, "TypeScript transform already present");
        ctx.warn_manual_plugin(Feature::TypeScript);
        return plugins;
    }

    let descriptor = PluginDescriptor::with_options(
        ctx.resolve(Feature::TypeScript),
        json!({ "allowDeclareFields": options.allows_declare_fields() }),
    );
    tracing::debug!(plugin = descriptor.id(), "appending TypeScript transform");
    plugins.push(descriptor);
    plugins
}
