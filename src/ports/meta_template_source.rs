use crate::domain::AppError;

/// Meta-template rendering the description record.
pub const DESCRIPTION_META_TEMPLATE: &str = "description.json.j2";
/// Meta-template rendering the cloud-config document.
pub const CONTENT_META_TEMPLATE: &str = "template.yaml.j2";

/// Port for the read-only meta-templates used to generate templates.
pub trait MetaTemplateSource: Send + Sync {
    /// Names of all available meta-templates.
    fn list(&self) -> Vec<String>;

    /// Source text of a meta-template.
    fn content(&self, name: &str) -> Result<String, AppError>;
}
