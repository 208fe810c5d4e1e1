//! Plugin identity matching.
//!
//! Build tools hand the assembler either bare package names or resolved
//! module paths, so identity is decided by a [`PluginMatcher`] rather than by
//! string equality.

use tine_config::PluginDescriptor;

/// Decides whether a descriptor refers to a given package.
pub trait PluginMatcher: Send + Sync {
    fn matches(&self, descriptor: &PluginDescriptor, package: &str) -> bool;
}

/// Matches when the package name appears as whole path segments of the
/// identifier.
///
/// `@babel/plugin-proposal-decorators` matches itself and
/// `/app/node_modules/@babel/plugin-proposal-decorators/lib/index.js`, but not
/// `@babel/plugin-proposal-decorators-extra`. Both `/` and `\` separate
/// segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageSegmentMatcher;

impl PluginMatcher for PackageSegmentMatcher {
    fn matches(&self, descriptor: &PluginDescriptor, package: &str) -> bool {
        if package.is_empty() {
            return false;
        }

        let wanted: Vec<&str> = package.split('/').collect();
        let segments: Vec<&str> = descriptor.id().split(['/', '\\']).collect();
        segments
            .windows(wanted.len())
            .any(|window| window == wanted.as_slice())
    }
}

/// Index of the first descriptor matching `package`.
pub fn find_plugin(
    plugins: &[PluginDescriptor],
    package: &str,
    matcher: &dyn PluginMatcher,
) -> Option<usize> {
    plugins.iter().position(|p| matcher.matches(p, package))
}

/// Index of the last descriptor matching `package`.
pub fn rfind_plugin(
    plugins: &[PluginDescriptor],
    package: &str,
    matcher: &dyn PluginMatcher,
) -> Option<usize> {
    plugins.iter().rposition(|p| matcher.matches(p, package))
}

pub fn has_plugin(plugins: &[PluginDescriptor], package: &str, matcher: &dyn PluginMatcher) -> bool {
    find_plugin(plugins, package, matcher).is_some()
}
