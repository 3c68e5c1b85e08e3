mod meta_template_source;
mod script_bundle;
mod variable_source;

pub use meta_template_source::{CONTENT_META_TEMPLATE, DESCRIPTION_META_TEMPLATE, MetaTemplateSource};
pub use script_bundle::{BundledScript, ScriptBundle, hash_content};
pub use variable_source::{MapVariables, ProcessEnvironment, VariableSource};
