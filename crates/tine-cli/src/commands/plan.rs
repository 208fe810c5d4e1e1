//! Plan command: assemble the plugin list and print it.

use std::io::{self, Write};
use std::sync::Arc;

use tine_assembler::{AssemblyInput, NodeModulesResolver, PluginListAssembler, RecordingSink};

use crate::cli::PlanArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

pub fn execute(args: PlanArgs) -> Result<()> {
    let plan = utils::load_plan(&args.source)?;

    let sink = Arc::new(RecordingSink::new());
    let mut assembler = PluginListAssembler::for_plan(&plan).with_sink(sink.clone());
    if let Some(root) = &args.resolve_from {
        assembler = assembler.with_resolver(Arc::new(NodeModulesResolver::new(root)));
    }

    let assembly = assembler.assemble(AssemblyInput::from(&plan))?;

    for message in sink.messages() {
        ui::warning(&message);
    }

    let output = if args.full {
        assembly.to_transpiler_options()?
    } else {
        serde_json::to_value(&assembly.plugins)?
    };
    let rendered = if args.compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    writeln!(io::stdout().lock(), "{rendered}")?;

    if args.deny_warnings && assembly.warnings_emitted > 0 {
        return Err(CliError::WarningsDenied(assembly.warnings_emitted));
    }

    tracing::info!(plugins = assembly.plugins.len(), "plugin list assembled");
    Ok(())
}
