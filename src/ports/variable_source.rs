use std::collections::HashMap;

/// Port for the variable namespace consulted by script substitution.
pub trait VariableSource: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads variables from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl VariableSource for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Explicit variable map.
#[derive(Debug, Clone, Default)]
pub struct MapVariables(HashMap<String, String>);

impl MapVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }
}

impl VariableSource for MapVariables {
    fn var(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}
