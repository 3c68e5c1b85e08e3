use std::sync::{Arc, OnceLock};

use super::config::ZtpConfig;
use crate::domain::AppError;
use crate::ports::{MetaTemplateSource, ProcessEnvironment, ScriptBundle, VariableSource};
use crate::services::{
    DirectoryMetaTemplates, DirectoryScriptBundle, EmbeddedMetaTemplates, EmbeddedScriptBundle,
    InMemoryScriptBundle, ScriptInjector, TemplateExecutor, TemplateStore,
};

static SHARED: OnceLock<AppContext> = OnceLock::new();

/// Application context holding the store and the injection collaborators.
#[derive(Clone)]
pub struct AppContext {
    store: Arc<TemplateStore>,
    injector: ScriptInjector,
}

impl AppContext {
    pub fn new(
        store: Arc<TemplateStore>,
        scripts: Arc<dyn ScriptBundle>,
        vars: Arc<dyn VariableSource>,
    ) -> Self {
        Self { store, injector: ScriptInjector::new(scripts, vars) }
    }

    /// Build a context from configuration, loading any directory-backed assets now.
    pub fn from_config(config: &ZtpConfig) -> Result<Self, AppError> {
        let meta: Arc<dyn MetaTemplateSource> = match &config.meta_templates.dir {
            Some(dir) => Arc::new(DirectoryMetaTemplates::load(dir)?),
            None => Arc::new(EmbeddedMetaTemplates::new()),
        };
        let scripts: Arc<dyn ScriptBundle> = match (&config.scripts.dir, config.scripts.enabled) {
            (_, false) => Arc::new(InMemoryScriptBundle::empty()),
            (Some(dir), true) => Arc::new(DirectoryScriptBundle::load(dir)?),
            (None, true) => Arc::new(EmbeddedScriptBundle::new()),
        };

        Ok(Self::new(
            Arc::new(TemplateStore::with_meta_templates(meta)),
            scripts,
            Arc::new(ProcessEnvironment),
        ))
    }

    /// Process-wide context with embedded assets, created on first use.
    pub fn shared() -> &'static AppContext {
        SHARED.get_or_init(|| {
            Self::new(
                Arc::new(TemplateStore::new()),
                Arc::new(EmbeddedScriptBundle::new()),
                Arc::new(ProcessEnvironment),
            )
        })
    }

    pub fn store(&self) -> &Arc<TemplateStore> {
        &self.store
    }

    pub fn injector(&self) -> &ScriptInjector {
        &self.injector
    }

    /// Executor for `template_id` using this context's script injector.
    pub fn executor(
        &self,
        template_id: &str,
        parameters: &str,
    ) -> Result<TemplateExecutor, AppError> {
        Ok(TemplateExecutor::new(self.store.clone(), template_id, parameters)?
            .with_injector(self.injector.clone()))
    }
}
