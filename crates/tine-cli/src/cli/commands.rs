use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available Tine subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the plugin list and print it as JSON
    ///
    /// Reads tine.toml or tine.json from the project root (or --config),
    /// applies TINE_* environment overrides, and prints the final list to
    /// stdout. Warnings about manually added plugins go to stderr.
    Plan(PlanArgs),

    /// Validate the plan file
    Check(CheckArgs),
}

/// Where to find the plan
#[derive(Args, Debug, Clone)]
pub struct PlanSource {
    /// Project root containing tine.toml or tine.json
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Explicit plan file (relative to --root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub source: PlanSource,

    /// Resolve injected plugins to <DIR>/node_modules/<package>
    #[arg(long, value_name = "DIR")]
    pub resolve_from: Option<PathBuf>,

    /// Print the whole transpiler options object instead of just the plugins
    #[arg(long)]
    pub full: bool,

    /// Single-line JSON output
    #[arg(long)]
    pub compact: bool,

    /// Exit with an error if any warning was emitted
    #[arg(long)]
    pub deny_warnings: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: PlanSource,
}
