//! End-to-end plugin list assembly.

use std::sync::Arc;

use serde_json::Value;
use tine_config::{AddonOptions, BabelOptions, PlanConfig, PluginDescriptor, merge_addon_provided_config};

use crate::context::AssemblyContext;
use crate::error::{AssemblyError, Result};
use crate::matcher::{PackageSegmentMatcher, PluginMatcher};
use crate::project::{Project, ProjectInfo};
use crate::resolver::{PackageNameResolver, PluginResolver};
use crate::stages::{DecoratorRequest, insert_decorator_plugins, insert_typescript_plugin};
use crate::warnings::{TracingSink, WarningSink};

/// What one assembly run needs besides its collaborators.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyInput<'a> {
    pub addon_options: &'a AddonOptions,
    pub is_class_properties_required: bool,
}

impl<'a> From<&'a PlanConfig> for AssemblyInput<'a> {
    fn from(plan: &'a PlanConfig) -> Self {
        Self {
            addon_options: &plan.addon,
            is_class_properties_required: plan.class_properties_required,
        }
    }
}

/// Result of [`PluginListAssembler::assemble`].
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    /// Final plugin list in execution order
    pub plugins: Vec<PluginDescriptor>,
    /// Options bag without the plugin arrays
    pub options: BabelOptions,
    /// Warnings emitted while assembling
    pub warnings_emitted: usize,
}

impl Assembly {
    /// Options bag with `plugins` set, ready for the transpiler.
    pub fn to_transpiler_options(&self) -> Result<Value> {
        let mut value = serde_json::to_value(&self.options)?;
        let plugins = serde_json::to_value(&self.plugins)?;
        match value.as_object_mut() {
            Some(map) => {
                map.insert("plugins".to_string(), plugins);
            }
            None => {
                return Err(AssemblyError::MissingInput("transpiler options object"));
            }
        }
        Ok(value)
    }
}

/// Assembles the transpiler plugin list for a project.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tine_assembler::{AssemblyInput, PluginListAssembler, Project, RecordingSink};
/// use tine_config::AddonOptions;
///
/// let sink = Arc::new(RecordingSink::new());
/// let assembler = PluginListAssembler::new(Project::new("my-app")).with_sink(sink.clone());
///
/// let options = AddonOptions::default();
/// let assembly = assembler
///     .assemble(AssemblyInput { addon_options: &options, is_class_properties_required: true })
///     .unwrap();
///
/// assert_eq!(assembly.plugins.len(), 2);
/// assert!(sink.is_empty());
/// ```
pub struct PluginListAssembler {
    project: Arc<dyn ProjectInfo>,
    sink: Arc<dyn WarningSink>,
    matcher: Arc<dyn PluginMatcher>,
    resolver: Arc<dyn PluginResolver>,
}

impl PluginListAssembler {
    /// Assembler that logs warnings through `tracing` and inserts bare package names.
    pub fn new(project: impl ProjectInfo + 'static) -> Self {
        Self {
            project: Arc::new(project),
            sink: Arc::new(TracingSink),
            matcher: Arc::new(PackageSegmentMatcher),
            resolver: Arc::new(PackageNameResolver),
        }
    }

    /// Build from a plan's project name.
    pub fn for_plan(plan: &PlanConfig) -> Self {
        Self::new(Project::new(plan.project.clone()))
    }

    pub fn with_sink(mut self, sink: Arc<dyn WarningSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_matcher(mut self, matcher: Arc<dyn PluginMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn PluginResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Run every stage and return the final list.
    ///
    /// User plugins come first, then the TypeScript transform (if this addon
    /// handles TypeScript), decorators and class fields around it, and finally
    /// the post-transform plugins.
    ///
    /// # Errors
    ///
    /// - `AssemblyError::MissingInput` when the project has no name
    /// - `AssemblyError::UnsatisfiableOrder` from the decorator stage
    pub fn assemble(&self, input: AssemblyInput<'_>) -> Result<Assembly> {
        let project = self.project.name();
        if project.trim().is_empty() {
            return Err(AssemblyError::MissingInput("project name"));
        }

        let span = tracing::debug_span!("assemble", project);
        let _guard = span.enter();

        let ctx = AssemblyContext::new(self.sink.as_ref(), self.project.as_ref())
            .with_matcher(self.matcher.as_ref())
            .with_resolver(self.resolver.as_ref());

        let config = merge_addon_provided_config(input.addon_options);
        let features = input.addon_options.features();
        let mut plugins = config.plugins;

        if features.enable_type_script_transform {
            plugins = insert_typescript_plugin(&plugins, &config.options, &ctx);
        } else {
            tracing::debug!("TypeScript transform not handled by this addon");
        }

        if features.disable_decorator_transforms {
            tracing::debug!("decorator transforms disabled");
        } else {
            let request = DecoratorRequest {
                plugins: &plugins,
                options: &config.options,
                config: input.addon_options,
                is_class_properties_required: input.is_class_properties_required,
            };
            plugins = insert_decorator_plugins(&request, &ctx)?;
        }

        plugins.extend(config.post_transform_plugins);

        tracing::debug!(
            plugins = plugins.len(),
            warnings = ctx.warnings_emitted(),
            "assembled plugin list"
        );

        Ok(Assembly {
            plugins,
            options: config.options,
            warnings_emitted: ctx.warnings_emitted(),
        })
    }
}
