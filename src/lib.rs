//! ztp: generate cloud-init user-data templates from deployment descriptions
//! and render them into base64-encoded provisioning payloads.
//!
//! Templates are created once in a [`TemplateStore`] and rendered any number
//! of times by a [`TemplateExecutor`], which also injects the bundled setup
//! scripts. Script placeholders (`{{ .Name }}`) are resolved from environment
//! variables named by [`to_env_var_name`], e.g. `CallbackUrl` reads
//! `CALLBACK_URL`.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

pub use app::AppContext;
pub use domain::{
    AppError, CloudConfig, DeploymentDescription, FileSpec, GeneratedTemplate, ParameterSpec,
    RuntimeParameters, TemplateDescription, WriteFile, to_env_var_name,
};
pub use ports::{BundledScript, MapVariables, ProcessEnvironment, ScriptBundle, VariableSource};
pub use services::{
    DirectoryScriptBundle, EmbeddedScriptBundle, InMemoryScriptBundle, ScriptInjector,
    TemplateExecutor, TemplateStore,
};

/// Executor for a template in the process-wide store.
pub fn retrieve_executor(template_id: &str, parameters: &str) -> Result<TemplateExecutor, AppError> {
    AppContext::shared().executor(template_id, parameters)
}
