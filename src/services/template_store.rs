//! Concurrent registry of generated templates.

use std::collections::{HashMap, hash_map::Entry};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use super::template_generator::generate_template;
use crate::domain::{
    AppError, DeploymentDescription, GeneratedTemplate, TemplateDescription, TemplateId,
};
use crate::ports::MetaTemplateSource;
use crate::services::EmbeddedMetaTemplates;

/// Store of generated templates keyed by identifier.
///
/// Mutations take the write lock; reads take the read lock and return copies,
/// so a later mutation never affects a value already handed out.
pub struct TemplateStore {
    meta: Arc<dyn MetaTemplateSource>,
    runtime: RwLock<HashMap<String, GeneratedTemplate>>,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TemplateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateStore").field("templates", &self.read().len()).finish()
    }
}

impl TemplateStore {
    /// Empty store using the embedded meta-templates.
    pub fn new() -> Self {
        Self::with_meta_templates(Arc::new(EmbeddedMetaTemplates::new()))
    }

    pub fn with_meta_templates(meta: Arc<dyn MetaTemplateSource>) -> Self {
        Self { meta, runtime: RwLock::new(HashMap::new()) }
    }

    /// Generate a template from `deployment` and store it under its id.
    ///
    /// Nothing is inserted unless both meta-templates render and the
    /// description parses.
    pub fn create(&self, deployment: &DeploymentDescription) -> Result<(), AppError> {
        let id = TemplateId::new(&deployment.id)?;
        if self.exists(&id) {
            return Err(AppError::AlreadyExists(id.into()));
        }

        let generated = generate_template(self.meta.as_ref(), deployment)?;

        match self.write().entry(id.into()) {
            Entry::Occupied(entry) => Err(AppError::AlreadyExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                info!(template_id = %entry.key(), "created template");
                debug!(template_id = %entry.key(), content = %generated.content, "generated content");
                entry.insert(generated);
                Ok(())
            }
        }
    }

    pub fn delete(&self, template_id: &str) -> Result<(), AppError> {
        match self.write().remove(template_id) {
            Some(_) => {
                info!(template_id, "deleted template");
                Ok(())
            }
            None => Err(AppError::NotFound(template_id.to_string())),
        }
    }

    pub fn exists(&self, template_id: &str) -> bool {
        self.read().contains_key(template_id)
    }

    pub fn get(&self, template_id: &str) -> Result<GeneratedTemplate, AppError> {
        self.read()
            .get(template_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(template_id.to_string()))
    }

    pub fn get_content(&self, template_id: &str) -> Result<String, AppError> {
        self.read()
            .get(template_id)
            .map(|t| t.content.clone())
            .ok_or_else(|| AppError::NotFound(template_id.to_string()))
    }

    pub fn get_description(&self, template_id: &str) -> Result<TemplateDescription, AppError> {
        self.read()
            .get(template_id)
            .map(|t| t.description.clone())
            .ok_or_else(|| AppError::NotFound(template_id.to_string()))
    }

    pub fn list_ids(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    pub fn list_descriptions(&self) -> Vec<TemplateDescription> {
        self.read().values().map(|t| t.description.clone()).collect()
    }

    /// Template id to content.
    pub fn list_contents(&self) -> HashMap<String, String> {
        self.read().iter().map(|(id, t)| (id.clone(), t.content.clone())).collect()
    }

    pub fn list_meta_templates(&self) -> Vec<String> {
        self.meta.list()
    }

    pub fn meta_template_content(&self, name: &str) -> Result<String, AppError> {
        self.meta.content(name)
    }

    // A panic while holding the lock cannot leave a half-written entry, so
    // poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, GeneratedTemplate>> {
        self.runtime.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, GeneratedTemplate>> {
        self.runtime.write().unwrap_or_else(PoisonError::into_inner)
    }
}
