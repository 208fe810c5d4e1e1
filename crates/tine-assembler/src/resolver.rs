use std::path::PathBuf;

/// Turns a package name into the identifier placed in the plugin list.
pub trait PluginResolver: Send + Sync {
    fn resolve(&self, package: &str) -> String;
}

/// Leaves package names as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageNameResolver;

impl PluginResolver for PackageNameResolver {
    fn resolve(&self, package: &str) -> String {
        package.to_string()
    }
}

/// Points at `<root>/node_modules/<package>`.
///
/// The path is only joined, never checked on disk.
#[derive(Debug, Clone)]
pub struct NodeModulesResolver {
    root: PathBuf,
}

impl NodeModulesResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PluginResolver for NodeModulesResolver {
    fn resolve(&self, package: &str) -> String {
        self.root
            .join("node_modules")
            .join(package)
            .to_string_lossy()
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{PackageSegmentMatcher, PluginMatcher};
    use tine_config::PluginDescriptor;

    #[test]
    fn resolved_paths_still_match() {
        let id = NodeModulesResolver::new("/srv/app").resolve("@babel/plugin-transform-typescript");
        assert!(id.ends_with("plugin-transform-typescript"));
        assert!(PackageSegmentMatcher.matches(
            &PluginDescriptor::name(id),
            "@babel/plugin-transform-typescript"
        ));
    }

    #[test]
    fn package_name_resolver_is_identity() {
        assert_eq!(PackageNameResolver.resolve("a/b"), "a/b");
    }
}
