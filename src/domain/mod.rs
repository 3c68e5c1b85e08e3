pub mod cloud_config;
pub mod deployment;
pub mod env_name;
pub mod error;
pub mod identifiers;
pub mod parameters;
pub mod template;

pub use cloud_config::{CLOUD_CONFIG_HEADER, CloudConfig, WriteFile, has_cloud_config_header};
pub use deployment::{DeploymentDescription, FileSpec, ParameterSpec};
pub use env_name::to_env_var_name;
pub use error::AppError;
pub use identifiers::TemplateId;
pub use parameters::RuntimeParameters;
pub use template::{GeneratedTemplate, TemplateDescription};
