use tine_config::{PlanConfig, PlanLoader, validate_schema};

use crate::cli::PlanSource;
use crate::error::{CliError, Result};

/// Load and validate the plan described by `source`.
pub(crate) fn load_plan(source: &PlanSource) -> Result<PlanConfig> {
    if !source.root.is_dir() {
        return Err(CliError::DirectoryNotFound(source.root.clone()));
    }

    let mut loader = PlanLoader::new(&source.root);
    if let Some(file) = &source.config {
        loader = loader.with_file(file);
    }

    let plan = loader.load()?;
    validate_schema(&plan)?;
    tracing::debug!(project = %plan.project, "plan loaded");
    Ok(plan)
}
