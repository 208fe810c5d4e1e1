/// Read-only view of the consuming project.
pub trait ProjectInfo: Send + Sync {
    /// Name used in warnings.
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ProjectInfo for Project {
    fn name(&self) -> &str {
        &self.name
    }
}
