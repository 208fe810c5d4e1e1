//! Constraint-based insertion into an ordered plugin list.

use tine_config::PluginDescriptor;

use crate::error::{AssemblyError, Result};
use crate::matcher::{PluginMatcher, find_plugin, rfind_plugin};

/// Packages a new plugin must run before and after.
///
/// Constraints naming packages that are absent from the list are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    before: Vec<&'static str>,
    after: Vec<&'static str>,
}

impl Placement {
    /// No constraints: append at the end.
    pub fn anywhere() -> Self {
        Self::default()
    }

    pub fn before(mut self, package: &'static str) -> Self {
        self.before.push(package);
        self
    }

    pub fn after(mut self, package: &'static str) -> Self {
        self.after.push(package);
        self
    }
}

/// Insert `descriptor` into `plugins` and return its index.
///
/// The plugin lands directly in front of the earliest `before` match, or at
/// the end when there is none. It must not land in front of the last `after`
/// match.
pub fn insert_plugin(
    plugins: &mut Vec<PluginDescriptor>,
    descriptor: PluginDescriptor,
    placement: &Placement,
    matcher: &dyn PluginMatcher,
) -> Result<usize> {
    let existing: &[PluginDescriptor] = plugins;
    let lower = placement
        .after
        .iter()
        .filter_map(|pkg| rfind_plugin(existing, pkg, matcher).map(|i| (i + 1, *pkg)))
        .max_by_key(|(i, _)| *i);
    let upper = placement
        .before
        .iter()
        .filter_map(|pkg| find_plugin(existing, pkg, matcher).map(|i| (i, *pkg)))
        .min_by_key(|(i, _)| *i);

    let index = match (lower, upper) {
        (Some((low, after)), Some((high, before))) if high < low => {
            return Err(AssemblyError::UnsatisfiableOrder {
                plugin: descriptor.to_string(),
                after: after.to_string(),
                before: before.to_string(),
            });
        }
        (_, Some((high, _))) => high,
        (_, None) => existing.len(),
    };

    tracing::trace!(plugin = descriptor.id(), index, "inserting plugin");
    plugins.insert(index, descriptor);
    Ok(index)
}
