//! Command-line interface definition, using clap's derive macros.
//!
//! - `tine plan` - assemble the plugin list and print it as JSON
//! - `tine check` - validate the plan file without assembling

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, PlanArgs, PlanSource};

/// Tine - transpiler plugin-list assembler
#[derive(Parser, Debug)]
#[command(
    name = "tine",
    version,
    about = "Assemble transpiler plugin lists for a project",
    long_about = "Tine decides which transform plugins (TypeScript, decorators, class properties)\n\
                  a project needs, in which order and with which options, and warns when the\n\
                  project already added one of them by hand."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
