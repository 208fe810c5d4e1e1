//! Plugin descriptors as they appear in a transpiler plugin list.
//!
//! A descriptor is either a bare identifier (`"@babel/plugin-proposal-decorators"`)
//! or an array holding the identifier and, optionally, the plugin options
//! (`["@babel/plugin-proposal-decorators", { "legacy": true }]`). Both shapes
//! survive a round trip through serde unchanged, so lists the user wrote can be
//! handed back to the transpiler as-is.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub enum PluginDescriptor {
    /// Bare identifier: `"name"`
    Name(String),
    /// Array form: `["name"]` or `["name", options]`
    Entry { id: String, options: Option<Value> },
}

impl PluginDescriptor {
    pub fn name(id: impl Into<String>) -> Self {
        PluginDescriptor::Name(id.into())
    }

    pub fn with_options(id: impl Into<String>, options: Value) -> Self {
        PluginDescriptor::Entry {
            id: id.into(),
            options: Some(options),
        }
    }

    /// Identifier (package name or resolved path) of the plugin.
    pub fn id(&self) -> &str {
        match self {
            PluginDescriptor::Name(id) => id,
            PluginDescriptor::Entry { id, .. } => id,
        }
    }

    pub fn options(&self) -> Option<&Value> {
        match self {
            PluginDescriptor::Name(_) => None,
            PluginDescriptor::Entry { options, .. } => options.as_ref(),
        }
    }

    /// Look up a single key in the options object.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options()?.as_object()?.get(key)
    }
}

impl From<&str> for PluginDescriptor {
    fn from(id: &str) -> Self {
        PluginDescriptor::Name(id.to_string())
    }
}

impl From<String> for PluginDescriptor {
    fn from(id: String) -> Self {
        PluginDescriptor::Name(id)
    }
}

impl fmt::Display for PluginDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl TryFrom<Value> for PluginDescriptor {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(id) => Ok(PluginDescriptor::Name(id)),
            Value::Array(items) => {
                let len = items.len();
                let mut items = items.into_iter();
                let id = match items.next() {
                    Some(Value::String(id)) => id,
                    Some(other) => {
                        return Err(ConfigError::InvalidDescriptor(format!(
                            "expected the first element to be a plugin name, found {other}"
                        )));
                    }
                    None => {
                        return Err(ConfigError::InvalidDescriptor(
                            "plugin array cannot be empty".to_string(),
                        ));
                    }
                };
                if len > 2 {
                    return Err(ConfigError::InvalidDescriptor(format!(
                        "plugin '{id}' has {len} elements, expected [name] or [name, options]"
                    )));
                }
                Ok(PluginDescriptor::Entry {
                    id,
                    options: items.next(),
                })
            }
            other => Err(ConfigError::InvalidDescriptor(format!(
                "expected a plugin name or [name, options], found {other}"
            ))),
        }
    }
}

impl Serialize for PluginDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PluginDescriptor::Name(id) => serializer.serialize_str(id),
            PluginDescriptor::Entry { id, options } => {
                let len = if options.is_some() { 2 } else { 1 };
                let mut seq = serializer.serialize_seq(Some(len))?;
                seq.serialize_element(id)?;
                if let Some(options) = options {
                    seq.serialize_element(options)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PluginDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        PluginDescriptor::try_from(value).map_err(de::Error::custom)
    }
}
