//! Check command: load and validate the plan without assembling.

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking plan...");
    let plan = utils::load_plan(&args.source)?;

    let plugins = plan
        .addon
        .babel
        .as_ref()
        .map_or(0, |babel| babel.plugins.len() + babel.post_transform_plugins.len());
    ui::success(&format!(
        "Plan for {} is valid ({} user plugin{})",
        plan.project,
        plugins,
        if plugins == 1 { "" } else { "s" }
    ));
    Ok(())
}
