//! Rendering of stored templates into encoded user-data payloads.
//!
//! Placeholders are written `{{ .Name }}` (the leading dot is optional). Block
//! and comment delimiters start with `<`, which generation always escapes in
//! user text, so shell such as `${#VAR}` or `{% raw %}` renders unchanged.

use std::borrow::Cow;
use std::sync::{Arc, LazyLock};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use minijinja::syntax::SyntaxConfig;
use minijinja::{Environment, UndefinedBehavior, Value};
use regex::Regex;
use tracing::{error, info};

use crate::domain::{AppError, RuntimeParameters};
use crate::services::{ScriptInjector, TemplateStore};

/// Executes one stored template with one set of parameters.
pub struct TemplateExecutor {
    store: Arc<TemplateStore>,
    injector: ScriptInjector,
    template_id: String,
    parameters: RuntimeParameters,
}

impl TemplateExecutor {
    /// Validate that the template exists and the parameters are a JSON object.
    ///
    /// Nothing is rendered until [`TemplateExecutor::execute`].
    pub fn new(
        store: Arc<TemplateStore>,
        template_id: &str,
        parameters: &str,
    ) -> Result<Self, AppError> {
        if !store.exists(template_id) {
            return Err(AppError::NotFound(template_id.to_string()));
        }
        let parameters = RuntimeParameters::parse(parameters)?;

        info!(template_id, parameters = parameters.len(), "created template executor");

        Ok(Self {
            store,
            injector: ScriptInjector::default(),
            template_id: template_id.to_string(),
            parameters,
        })
    }

    /// Replace the script injector (bundle and variable source).
    pub fn with_injector(mut self, injector: ScriptInjector) -> Self {
        self.injector = injector;
        self
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn parameters(&self) -> &RuntimeParameters {
        &self.parameters
    }

    /// Render, inject scripts and base64-encode the result.
    pub fn execute(&self) -> Result<String, AppError> {
        let user_data = self.render_user_data().inspect_err(|err| {
            error!(template_id = %self.template_id, %err, "template execution failed");
        })?;
        Ok(STANDARD.encode(user_data))
    }

    /// The decoded payload: rendered document with scripts injected.
    pub fn render_user_data(&self) -> Result<Vec<u8>, AppError> {
        let rendered = self.render()?;
        self.injector.inject(rendered.into_bytes())
    }

    /// Render the stored content against the parameters, before injection.
    pub fn render(&self) -> Result<String, AppError> {
        let content = self.store.get_content(&self.template_id)?;
        let source = strip_dotted_references(&content);

        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_syntax(runtime_syntax()?);
        env.add_template(&self.template_id, &source)
            .map_err(|err| AppError::render_error(&self.template_id, err))?;
        env.get_template(&self.template_id)
            .map_err(|err| AppError::render_error(&self.template_id, err))?
            .render(Value::from_serialize(&self.parameters))
            .map_err(|err| AppError::render_error(&self.template_id, err))
    }
}

static DOTTED_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(-?\s*)\.(\w)").expect("dotted reference pattern is valid")
});

/// Rewrite `{{ .Name` to `{{ Name` so both spellings resolve the same parameter.
pub(crate) fn strip_dotted_references(content: &str) -> Cow<'_, str> {
    DOTTED_REFERENCE.replace_all(content, "{{${1}${2}")
}

fn runtime_syntax() -> Result<SyntaxConfig, AppError> {
    SyntaxConfig::builder()
        .block_delimiters("<%", "%>")
        .variable_delimiters("{{", "}}")
        .comment_delimiters("<#", "#>")
        .build()
        .map_err(|err| {
            AppError::config_error(format!("Failed to configure runtime template syntax: {}", err))
        })
}
