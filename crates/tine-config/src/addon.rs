//! Options handed to the addon by its parent, and the config derived from them.

use serde::{Deserialize, Serialize};

use crate::babel::BabelOptions;
use crate::descriptor::PluginDescriptor;
use crate::helpers::default_true;

/// Namespace key under which the addon reads its own settings.
pub const ADDON_NAMESPACE: &str = "ember-cli-babel";

/// Options gathered from the parent (`ember-cli-build` style options object).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddonOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub babel: Option<BabelOptions>,

    #[serde(
        rename = "ember-cli-babel",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub addon: Option<AddonFeatureOptions>,
}

impl AddonOptions {
    pub fn features(&self) -> AddonFeatureOptions {
        self.addon.clone().unwrap_or_default()
    }

    /// Whether the TypeScript transform is handled by this addon.
    ///
    /// A missing namespace counts as `false`.
    pub fn enable_typescript_transform(&self) -> bool {
        self.addon
            .as_ref()
            .is_some_and(|a| a.enable_type_script_transform)
    }
}

/// Settings under the addon namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonFeatureOptions {
    #[serde(default)]
    pub enable_type_script_transform: bool,

    /// Skip decorator and class-field injection entirely
    #[serde(default)]
    pub disable_decorator_transforms: bool,

    /// Emit `{ legacy: true }` for the decorators plugin
    #[serde(default = "default_true")]
    pub legacy_decorators: bool,

    /// Only consulted when `legacy_decorators` is off
    #[serde(default)]
    pub decorators_before_export: bool,
}

impl Default for AddonFeatureOptions {
    fn default() -> Self {
        Self {
            enable_type_script_transform: false,
            disable_decorator_transforms: false,
            legacy_decorators: true,
            decorators_before_export: false,
        }
    }
}

/// Config derived from [`AddonOptions`]: the options bag with the plugin
/// arrays lifted out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddonProvidedConfig {
    pub options: BabelOptions,
    pub plugins: Vec<PluginDescriptor>,
    pub post_transform_plugins: Vec<PluginDescriptor>,
}

/// Derive the addon-provided config.
///
/// The returned `options` is an owned copy; callers may mutate it freely
/// without affecting `addon_options.babel`.
pub fn merge_addon_provided_config(addon_options: &AddonOptions) -> AddonProvidedConfig {
    let mut options = addon_options.babel.clone().unwrap_or_default();
    let plugins = std::mem::take(&mut options.plugins);
    let post_transform_plugins = std::mem::take(&mut options.post_transform_plugins);

    tracing::trace!(
        plugins = plugins.len(),
        post_transform_plugins = post_transform_plugins.len(),
        "merged addon-provided config"
    );

    AddonProvidedConfig {
        options,
        plugins,
        post_transform_plugins,
    }
}
