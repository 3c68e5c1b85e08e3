use crate::domain::AppError;
use crate::ports::{BundledScript, ScriptBundle};

/// Script bundle holding an explicit list of scripts.
///
/// `InMemoryScriptBundle::empty()` disables injection entirely.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScriptBundle {
    scripts: Vec<BundledScript>,
}

impl InMemoryScriptBundle {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_script(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.scripts.push(BundledScript::new(name, content));
        self
    }
}

impl ScriptBundle for InMemoryScriptBundle {
    fn scripts(&self) -> Result<Vec<BundledScript>, AppError> {
        Ok(self.scripts.clone())
    }
}
