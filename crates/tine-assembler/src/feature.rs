/// A transform the assembler knows how to inject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    TypeScript,
    Decorators,
    ClassProperties,
}

impl Feature {
    /// Canonical package name of the transform.
    pub const fn package(self) -> &'static str {
        match self {
            Feature::TypeScript => "@babel/plugin-transform-typescript",
            Feature::Decorators => "@babel/plugin-proposal-decorators",
            Feature::ClassProperties => "@babel/plugin-proposal-class-properties",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Feature::TypeScript => "TypeScript transform",
            Feature::Decorators => "decorators",
            Feature::ClassProperties => "class-properties",
        }
    }

    /// Warning shown when `project` already added this transform by hand.
    ///
    /// The "has added the ... plugin to its build" fragment is matched by
    /// consumers and must stay stable.
    pub fn manual_plugin_warning(self, project: &str) -> String {
        let advice = match self {
            Feature::TypeScript => {
                "TypeScript is compiled automatically when enableTypeScriptTransform is set, \
                 so the manual plugin may cause conflicts. You can remove the transform, or \
                 the addon that provided it"
            }
            Feature::Decorators | Feature::ClassProperties => {
                "this transform is provided by default now, so the manual plugin may cause \
                 conflicts. You can remove the transform, or the addon that provided it, \
                 such as @ember-decorators/babel-transforms"
            }
        };
        format!(
            "{project} has added the {} plugin to its build, but {advice}.",
            self.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_keep_stable_fragments() {
        assert!(
            Feature::TypeScript
                .manual_plugin_warning("app")
                .starts_with("app has added the TypeScript transform plugin to its build")
        );
        assert!(
            Feature::Decorators
                .manual_plugin_warning("app")
                .contains("has added the decorators plugin to its build")
        );
        assert!(
            Feature::ClassProperties
                .manual_plugin_warning("app")
                .contains("has added the class-properties plugin to its build")
        );
    }
}
