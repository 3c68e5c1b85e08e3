mod template_id;
pub mod validation;

pub use template_id::TemplateId;
