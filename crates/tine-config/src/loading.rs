//! File-based plan discovery and layered loading for CLI use.
//!
//! Sources are merged with figment, lowest priority first:
//! defaults, `package.json` name, plan file, `TINE_` environment variables.
//!
//! Environment keys are case-folded and written with `_`, so
//! `TINE_EMBER_CLI_BABEL__ENABLETYPESCRIPTTRANSFORM` is mapped onto
//! `ember-cli-babel.enableTypeScriptTransform` before merging. Otherwise the
//! file and the environment would contribute two different keys for one field.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format as _, Json, Serialized, Toml};
use figment::value::{Uncased, UncasedStr};
use serde_json::Value;

use crate::addon::ADDON_NAMESPACE;
use crate::error::{ConfigError, Result};
use crate::plan::PlanConfig;

/// Prefix for environment overrides, e.g. `TINE_PROJECT`, `TINE_BABEL__LOOSE`.
pub const ENV_PREFIX: &str = "TINE_";

const PLAN_FILES: [&str; 2] = ["tine.toml", "tine.json"];

/// Lowercased env key segments and the plan key they stand for.
const ENV_KEY_SPELLINGS: [(&str, &str); 7] = [
    ("ember_cli_babel", ADDON_NAMESPACE),
    ("allowdeclarefields", "allowDeclareFields"),
    ("posttransformplugins", "postTransformPlugins"),
    ("enabletypescripttransform", "enableTypeScriptTransform"),
    ("disabledecoratortransforms", "disableDecoratorTransforms"),
    ("legacydecorators", "legacyDecorators"),
    ("decoratorsbeforeexport", "decoratorsBeforeExport"),
];

/// Locates and loads a [`PlanConfig`].
///
/// # Example
///
/// ```no_run
/// use tine_config::PlanLoader;
///
/// let plan = PlanLoader::new(".").load().unwrap();
/// println!("assembling plugins for {}", plan.project);
/// ```
pub struct PlanLoader {
    root: PathBuf,
    file: Option<PathBuf>,
}

impl PlanLoader {
    /// Create a loader rooted at a project directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            file: None,
        }
    }

    /// Use an explicit plan file instead of searching the root
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Find the plan file.
    ///
    /// Searches in this order:
    /// 1. explicit file passed to [`PlanLoader::with_file`]
    /// 2. `tine.toml`
    /// 3. `tine.json`
    pub fn find(&self) -> Option<PathBuf> {
        if let Some(file) = &self.file {
            let path = if file.is_absolute() {
                file.clone()
            } else {
                self.root.join(file)
            };
            return path.exists().then_some(path);
        }

        PLAN_FILES
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.exists())
    }

    /// Load the plan with all sources merged.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no plan file is found.
    pub fn load(&self) -> Result<PlanConfig> {
        let path = self.find().ok_or_else(|| ConfigError::NotFound {
            root: self.file.clone().unwrap_or_else(|| self.root.clone()),
        })?;
        tracing::debug!(path = %path.display(), "loading plan file");

        let mut figment = Figment::from(Serialized::defaults(PlanConfig::default()));

        if let Some(name) = self.package_name()? {
            figment = figment.merge(Serialized::default("project", name));
        }

        figment = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => figment.merge(Toml::file(&path)),
            Some("json") => figment.merge(Json::file(&path)),
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ));
            }
        };

        figment
            .merge(
                Env::prefixed(ENV_PREFIX)
                    .split("__")
                    .map(plan_key)
                    .lowercase(false),
            )
            .extract()
            .map_err(|e| ConfigError::InvalidValue {
                field: path.display().to_string(),
                hint: Some(e.to_string()),
            })
    }

    /// `name` from the root `package.json`, used as the default project name.
    ///
    /// A missing `package.json` is not an error.
    fn package_name(&self) -> Result<Option<String>> {
        let path = self.root.join("package.json");
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
            field: path.display().to_string(),
            hint: Some(e.to_string()),
        })?;
        Ok(parsed.get("name").and_then(Value::as_str).map(str::to_string))
    }
}

/// Map a dotted env key onto the spelling the plan file uses.
fn plan_key(key: &UncasedStr) -> Uncased<'_> {
    let key = key
        .as_str()
        .split('.')
        .map(|segment| {
            let segment = segment.to_ascii_lowercase();
            ENV_KEY_SPELLINGS
                .iter()
                .find(|(folded, _)| *folded == segment)
                .map_or(segment, |(_, key)| (*key).to_string())
        })
        .collect::<Vec<_>>()
        .join(".");
    Uncased::new(key)
}

/// Load the plan from a directory (convenience function)
pub fn load_plan(root: impl AsRef<Path>) -> Result<PlanConfig> {
    PlanLoader::new(root).load()
}
