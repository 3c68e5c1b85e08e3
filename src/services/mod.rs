mod directory_assets;
mod embedded_assets;
mod memory_script_bundle;
mod script_injector;
mod template_executor;
mod template_generator;
mod template_store;

pub use directory_assets::{DirectoryMetaTemplates, DirectoryScriptBundle};
pub use embedded_assets::{EmbeddedMetaTemplates, EmbeddedScriptBundle};
pub use memory_script_bundle::InMemoryScriptBundle;
pub use script_injector::{
    INJECTED_SCRIPT_PREFIX, PER_ONCE_SCRIPTS_DIR, ScriptInjector, ScriptPlaceholder,
    injected_script_path, placeholders, substitute_variables,
};
pub use template_executor::TemplateExecutor;
pub use template_generator::generate_template;
pub use template_store::TemplateStore;
