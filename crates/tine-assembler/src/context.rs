use std::cell::Cell;

use tine_config::PluginDescriptor;

use crate::feature::Feature;
use crate::matcher::{PackageSegmentMatcher, PluginMatcher, find_plugin};
use crate::project::ProjectInfo;
use crate::resolver::{PackageNameResolver, PluginResolver};
use crate::warnings::WarningSink;

/// Collaborators shared by every stage of one assembly run.
pub struct AssemblyContext<'a> {
    sink: &'a dyn WarningSink,
    project: &'a dyn ProjectInfo,
    matcher: &'a dyn PluginMatcher,
    resolver: &'a dyn PluginResolver,
    warnings: Cell<usize>,
}

impl<'a> AssemblyContext<'a> {
    /// Context with the default matcher and a package-name resolver.
    pub fn new(sink: &'a dyn WarningSink, project: &'a dyn ProjectInfo) -> Self {
        Self {
            sink,
            project,
            matcher: &PackageSegmentMatcher,
            resolver: &PackageNameResolver,
            warnings: Cell::new(0),
        }
    }

    pub fn with_matcher(mut self, matcher: &'a dyn PluginMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_resolver(mut self, resolver: &'a dyn PluginResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn matcher(&self) -> &dyn PluginMatcher {
        self.matcher
    }

    /// Position of the first plugin implementing `feature`.
    pub fn find(&self, plugins: &[PluginDescriptor], feature: Feature) -> Option<usize> {
        find_plugin(plugins, feature.package(), self.matcher)
    }

    /// Identifier to insert for `feature`.
    pub fn resolve(&self, feature: Feature) -> String {
        self.resolver.resolve(feature.package())
    }

    /// Report that the project supplied `feature` itself.
    pub fn warn_manual_plugin(&self, feature: Feature) {
        let message = feature.manual_plugin_warning(self.project.name());
        self.sink.warn(&message);
        self.warnings.set(self.warnings.get() + 1);
    }

    /// Number of warnings emitted through this context.
    pub fn warnings_emitted(&self) -> usize {
        self.warnings.get()
    }
}
