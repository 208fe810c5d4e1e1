// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_project_name() -> String {
    "the app".to_string()
}
