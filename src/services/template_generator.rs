//! Generation of concrete templates from deployment descriptions.
//!
//! Meta-templates use `[[[ ]]]` / `[% %]` / `[# #]` delimiters so that runtime
//! placeholders written as `{{ .Name }}` pass through generation as plain text.

use minijinja::syntax::SyntaxConfig;
use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};

use crate::domain::{AppError, DeploymentDescription, GeneratedTemplate, TemplateDescription};
use crate::ports::{CONTENT_META_TEMPLATE, DESCRIPTION_META_TEMPLATE, MetaTemplateSource};

/// Render both meta-templates against a description.
pub fn generate_template(
    meta: &dyn MetaTemplateSource,
    deployment: &DeploymentDescription,
) -> Result<GeneratedTemplate, AppError> {
    let context = Value::from_serialize(deployment);

    let description_json = render_meta_template(meta, DESCRIPTION_META_TEMPLATE, &context)?;
    let content = render_meta_template(meta, CONTENT_META_TEMPLATE, &context)?;

    let description: TemplateDescription = serde_json::from_str(&description_json)
        .map_err(|e| AppError::parse_error("generated description", e))?;

    Ok(GeneratedTemplate { description, content })
}

fn render_meta_template(
    meta: &dyn MetaTemplateSource,
    name: &str,
    context: &Value,
) -> Result<String, AppError> {
    let source = meta.content(name)?;

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    let syntax = SyntaxConfig::builder()
        .block_delimiters("[%", "%]")
        .variable_delimiters("[[[", "]]]")
        .comment_delimiters("[#", "#]")
        .build()
        .map_err(|err| {
            AppError::config_error(format!("Failed to configure meta template syntax: {}", err))
        })?;
    env.set_syntax(syntax);

    env.add_template(name, &source)
        .map_err(|err| AppError::parse_error(format!("meta template {}", name), err))?;
    env.get_template(name)
        .map_err(|err| AppError::render_error(name, err))?
        .render(context)
        .map_err(|err| AppError::render_error(name, err))
}
