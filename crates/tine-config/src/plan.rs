//! Top-level plan file: everything the assembler needs for one project.
//!
//! For file discovery and layered loading, see the `loading` module.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::addon::AddonOptions;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::helpers::{default_project_name, default_true};

/// Top-level keys are snake_case so `TINE_*` environment overrides line up
/// with them; the `babel` and addon sections keep their own camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Name used when reporting manually added plugins
    #[serde(default = "default_project_name")]
    pub project: String,

    /// Whether the targets need class fields compiled down
    #[serde(default = "default_true")]
    pub class_properties_required: bool,

    #[serde(flatten)]
    pub addon: AddonOptions,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            project: default_project_name(),
            class_properties_required: true,
            addon: AddonOptions::default(),
        }
    }
}

impl PlanConfig {
    /// Create from serde_json::Value (for programmatic input)
    ///
    /// # Example
    ///
    /// ```
    /// use tine_config::PlanConfig;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "project": "my-app",
    ///     "ember-cli-babel": { "enableTypeScriptTransform": true }
    /// });
    ///
    /// let plan = PlanConfig::from_value(value).unwrap();
    /// assert_eq!(plan.project, "my-app");
    /// assert!(plan.addon.enable_typescript_transform());
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "plan".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let toml_val: toml::Value = toml::from_str(content).map_err(|e| ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: Some(format!("Invalid TOML syntax: {}", e)),
        })?;

        let value = serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: Some(format!("TOML to JSON conversion failed: {}", e)),
        })?;

        Self::from_value(value)
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "plan".to_string(),
            hint: Some(e.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_reads_nested_sections() {
        let plan = PlanConfig::from_value(json!({
            "project": "dummy",
            "class_properties_required": false,
            "babel": { "loose": true, "plugins": ["x"] },
            "ember-cli-babel": { "enableTypeScriptTransform": true }
        }))
        .unwrap();

        assert_eq!(plan.project, "dummy");
        assert!(!plan.class_properties_required);
        assert!(plan.addon.babel.as_ref().unwrap().is_loose());
        assert!(plan.addon.enable_typescript_transform());
    }

    #[test]
    fn from_toml_str_works() {
        let plan = PlanConfig::from_toml_str(
            r#"
project = "toml-app"

[babel]
loose = true
plugins = ["@babel/plugin-transform-typescript"]

["ember-cli-babel"]
enableTypeScriptTransform = false
"#,
        )
        .unwrap();

        assert_eq!(plan.project, "toml-app");
        let babel = plan.addon.babel.unwrap();
        assert_eq!(babel.plugins[0].id(), "@babel/plugin-transform-typescript");
        assert!(!plan.addon.addon.unwrap().enable_type_script_transform);
    }

    #[test]
    fn invalid_toml_reports_field() {
        let err = PlanConfig::from_toml_str("project = ").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "toml"));
    }

    #[test]
    fn defaults_require_class_properties() {
        let plan = PlanConfig::from_value(json!({})).unwrap();
        assert!(plan.class_properties_required);
        assert_eq!(plan, PlanConfig::default());
    }
}
