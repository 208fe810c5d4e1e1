//! End-to-end assembly tests.

use std::sync::Arc;

use serde_json::{Value, json};
use tine_assembler::{
    AssemblyError, AssemblyInput, Feature, NodeModulesResolver, PluginListAssembler, Project,
    RecordingSink,
};
use tine_config::{AddonOptions, PlanConfig, PluginDescriptor};

fn assembler(sink: &Arc<RecordingSink>) -> PluginListAssembler {
    PluginListAssembler::new(Project::new("dummy-app")).with_sink(sink.clone())
}

fn addon_options(value: Value) -> AddonOptions {
    serde_json::from_value(value).expect("valid addon options")
}

fn ids(plugins: &[PluginDescriptor]) -> Vec<&str> {
    plugins.iter().map(|p| p.id()).collect()
}

#[test]
fn typescript_project_gets_typescript_first() {
    let sink = Arc::new(RecordingSink::new());
    let options = addon_options(json!({
        "babel": { "plugins": ["user-plugin"] },
        "ember-cli-babel": { "enableTypeScriptTransform": true }
    }));

    let assembly = assembler(&sink)
        .assemble(AssemblyInput {
            addon_options: &options,
            is_class_properties_required: true,
        })
        .expect("assemble");

    assert_eq!(
        ids(&assembly.plugins),
        [
            "user-plugin",
            Feature::TypeScript.package(),
            Feature::Decorators.package(),
            Feature::ClassProperties.package(),
        ]
    );
    assert_eq!(assembly.warnings_emitted, 0);
    assert!(sink.is_empty());
}

#[test]
fn manual_typescript_plugin_warns_once() {
    let sink = Arc::new(RecordingSink::new());
    let options = addon_options(json!({
        "babel": { "plugins": [["@babel/plugin-transform-typescript"]] },
        "ember-cli-babel": { "enableTypeScriptTransform": true }
    }));

    let assembly = assembler(&sink)
        .assemble(AssemblyInput {
            addon_options: &options,
            is_class_properties_required: false,
        })
        .expect("assemble");

    let typescript = assembly
        .plugins
        .iter()
        .filter(|p| p.id() == Feature::TypeScript.package())
        .count();
    assert_eq!(typescript, 1);
    assert_eq!(assembly.plugins[0], PluginDescriptor::Entry {
        id: Feature::TypeScript.package().to_string(),
        options: None,
    });

    let warnings = sink.messages();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("dummy-app has added the TypeScript transform plugin to its build"));
    assert_eq!(assembly.warnings_emitted, 1);
}

#[test]
fn typescript_not_handled_leaves_list_alone() {
    let sink = Arc::new(RecordingSink::new());
    let options = addon_options(json!({
        "babel": { "plugins": ["@babel/plugin-transform-typescript"] }
    }));

    let assembly = assembler(&sink)
        .assemble(AssemblyInput {
            addon_options: &options,
            is_class_properties_required: true,
        })
        .expect("assemble");

    assert_eq!(
        ids(&assembly.plugins),
        [
            Feature::Decorators.package(),
            Feature::ClassProperties.package(),
            Feature::TypeScript.package(),
        ]
    );
    assert!(sink.is_empty());
}

#[test]
fn post_transform_plugins_run_last() {
    let sink = Arc::new(RecordingSink::new());
    let options = addon_options(json!({
        "babel": {
            "plugins": ["a"],
            "postTransformPlugins": [["z", { "late": true }]]
        }
    }));

    let assembly = assembler(&sink)
        .assemble(AssemblyInput {
            addon_options: &options,
            is_class_properties_required: true,
        })
        .expect("assemble");

    assert_eq!(assembly.plugins.first().map(|p| p.id()), Some("a"));
    assert_eq!(
        assembly.plugins.last(),
        Some(&PluginDescriptor::with_options("z", json!({ "late": true })))
    );
    assert_eq!(assembly.plugins.len(), 4);
}

#[test]
fn disabled_decorator_transforms_are_skipped() {
    let sink = Arc::new(RecordingSink::new());
    let options = addon_options(json!({
        "ember-cli-babel": { "disableDecoratorTransforms": true }
    }));

    let assembly = assembler(&sink)
        .assemble(AssemblyInput {
            addon_options: &options,
            is_class_properties_required: true,
        })
        .expect("assemble");

    assert!(assembly.plugins.is_empty());
}

#[test]
fn caller_options_are_never_mutated() {
    let sink = Arc::new(RecordingSink::new());
    let options = addon_options(json!({
        "babel": { "plugins": ["a"], "loose": true, "blah": true },
        "ember-cli-babel": { "enableTypeScriptTransform": true }
    }));
    let before = options.clone();

    let assembly = assembler(&sink)
        .assemble(AssemblyInput {
            addon_options: &options,
            is_class_properties_required: true,
        })
        .expect("assemble");

    assert_eq!(options, before);
    assert_eq!(options.babel.as_ref().map(|b| b.plugins.len()), Some(1));
    assert_eq!(assembly.options.extra.get("blah"), Some(&json!(true)));
    assert!(assembly.options.plugins.is_empty());
}

#[test]
fn loose_mode_reaches_class_properties() {
    let sink = Arc::new(RecordingSink::new());
    let options = addon_options(json!({ "babel": { "loose": true } }));

    let assembly = assembler(&sink)
        .assemble(AssemblyInput {
            addon_options: &options,
            is_class_properties_required: true,
        })
        .expect("assemble");

    assert_eq!(assembly.plugins[1].option("loose"), Some(&json!(true)));
}

#[test]
fn transpiler_options_include_plugins() {
    let sink = Arc::new(RecordingSink::new());
    let options = addon_options(json!({ "babel": { "sourceMaps": "inline" } }));

    let assembly = assembler(&sink)
        .assemble(AssemblyInput {
            addon_options: &options,
            is_class_properties_required: false,
        })
        .expect("assemble");

    let value = assembly.to_transpiler_options().expect("serialize");
    assert_eq!(value["sourceMaps"], json!("inline"));
    assert_eq!(
        value["plugins"],
        json!([["@babel/plugin-proposal-decorators", { "legacy": true }]])
    );
}

#[test]
fn resolved_identifiers_are_recognised_on_rerun() {
    let sink = Arc::new(RecordingSink::new());
    let assembler = assembler(&sink).with_resolver(Arc::new(NodeModulesResolver::new("/srv/app")));
    let first = assembler
        .assemble(AssemblyInput {
            addon_options: &AddonOptions::default(),
            is_class_properties_required: true,
        })
        .expect("first run");

    // feed the resolved list back in as user plugins
    let babel = json!({ "plugins": serde_json::to_value(&first.plugins).expect("serialize") });
    let options = addon_options(json!({ "babel": babel }));
    let second = assembler
        .assemble(AssemblyInput {
            addon_options: &options,
            is_class_properties_required: true,
        })
        .expect("second run");

    assert_eq!(second.plugins, first.plugins);
    assert_eq!(sink.len(), 2);
}

#[test]
fn empty_project_name_is_a_precondition_failure() {
    let err = PluginListAssembler::new(Project::new(" "))
        .assemble(AssemblyInput {
            addon_options: &AddonOptions::default(),
            is_class_properties_required: true,
        })
        .unwrap_err();

    assert!(matches!(err, AssemblyError::MissingInput(_)));
}

#[test]
fn plan_config_drives_assembly() {
    let plan = PlanConfig::from_value(json!({
        "project": "from-plan",
        "class_properties_required": false,
        "babel": { "plugins": ["@babel/plugin-proposal-decorators"] }
    }))
    .expect("plan");
    let sink = Arc::new(RecordingSink::new());

    let assembly = PluginListAssembler::for_plan(&plan)
        .with_sink(sink.clone())
        .assemble(AssemblyInput::from(&plan))
        .expect("assemble");

    assert_eq!(assembly.plugins.len(), 1);
    let warnings = sink.messages();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("from-plan has added the decorators plugin to its build"));
}
