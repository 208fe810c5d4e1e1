use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::descriptor::PluginDescriptor;

/// Transpiler options bag supplied by the consuming project (`babel: { ... }`).
///
/// Only the keys the assembler reads are typed; everything else is carried
/// through untouched in `extra`, in the order it was written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BabelOptions {
    /// Loose mode for class-properties related transforms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loose: Option<bool>,

    /// Forwarded to the TypeScript transform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_declare_fields: Option<bool>,

    /// User plugins, run before anything the assembler injects after them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginDescriptor>,

    /// Plugins that must run after every other transform
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub post_transform_plugins: Vec<PluginDescriptor>,

    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl BabelOptions {
    pub fn is_loose(&self) -> bool {
        self.loose == Some(true)
    }

    pub fn allows_declare_fields(&self) -> bool {
        self.allow_declare_fields == Some(true)
    }
}
