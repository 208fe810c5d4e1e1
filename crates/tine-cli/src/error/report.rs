//! Miette diagnostic conversion for CLI errors.

use miette::Report;
use tine_assembler::AssemblyError;
use tine_config::ConfigError;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::Assembly(AssemblyError::UnsatisfiableOrder {
            plugin,
            after,
            before,
        }) => miette::miette!(
            "Cannot place {plugin}: it has to run after {after} but before {before}\n\n\
             Hint: Reorder the plugins in your babel options so that {after} comes before {before}"
        ),
        _ => miette::miette!("{}", err),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::NotFound { root } => miette::miette!(
            "No plan file found in {}\n\nHint: Create tine.toml or tine.json, or pass --config <path>",
            root.display()
        ),
        other => match other.hint() {
            Some(hint) => miette::miette!("Configuration error: {}\n\nHint: {}", other, hint),
            None => miette::miette!("Configuration error: {}", other),
        },
    }
}
