//! Injection of bundled setup scripts into a rendered cloud-config document.
//!
//! Scripts may contain `{{ .Name }}` placeholders. These are resolved from a
//! [`VariableSource`] (by default the process environment) using the
//! upper-snake-case form of `Name`, never from the request's parameters.
//! Placeholders without a non-empty variable are left as written.

use std::borrow::Cow;
use std::sync::{Arc, LazyLock};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::{Captures, Regex};
use tracing::{debug, info};

use crate::domain::{
    AppError, CLOUD_CONFIG_HEADER, CloudConfig, WriteFile, has_cloud_config_header,
    to_env_var_name,
};
use crate::ports::{BundledScript, ProcessEnvironment, ScriptBundle, VariableSource};
use crate::services::EmbeddedScriptBundle;

/// Directory cloud-init runs once, after first boot, in file name order.
pub const PER_ONCE_SCRIPTS_DIR: &str = "/var/lib/cloud/scripts/per-once";
/// Prefix that sorts injected scripts after every other per-once script.
pub const INJECTED_SCRIPT_PREFIX: &str = "zzzz-";

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*\.(\w+)\s*\}\}").expect("placeholder pattern is valid")
});

/// A placeholder found in a script and the variable it resolves from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptPlaceholder {
    pub identifier: String,
    pub variable: String,
}

/// Destination path of an injected script.
pub fn injected_script_path(script_name: &str) -> String {
    format!("{}/{}{}", PER_ONCE_SCRIPTS_DIR, INJECTED_SCRIPT_PREFIX, script_name)
}

/// Distinct placeholders referenced by `script`, in order of first use.
pub fn placeholders(script: &str) -> Vec<ScriptPlaceholder> {
    let mut found: Vec<ScriptPlaceholder> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(script) {
        let identifier = &caps[1];
        if !found.iter().any(|p| p.identifier == identifier) {
            found.push(ScriptPlaceholder {
                identifier: identifier.to_string(),
                variable: to_env_var_name(identifier),
            });
        }
    }
    found
}

/// Replace placeholders whose variable is set and non-empty.
pub fn substitute_variables<'a>(script: &'a str, vars: &dyn VariableSource) -> Cow<'a, str> {
    PLACEHOLDER.replace_all(script, |caps: &Captures| {
        let variable = to_env_var_name(&caps[1]);
        match vars.var(&variable) {
            Some(value) if !value.is_empty() => value,
            _ => caps[0].to_string(),
        }
    })
}

/// Merges the script bundle into rendered documents.
#[derive(Clone)]
pub struct ScriptInjector {
    bundle: Arc<dyn ScriptBundle>,
    vars: Arc<dyn VariableSource>,
}

impl Default for ScriptInjector {
    fn default() -> Self {
        Self::new(Arc::new(EmbeddedScriptBundle::new()), Arc::new(ProcessEnvironment))
    }
}

impl ScriptInjector {
    pub fn new(bundle: Arc<dyn ScriptBundle>, vars: Arc<dyn VariableSource>) -> Self {
        Self { bundle, vars }
    }

    /// Shell scripts in the bundle, in enumeration order.
    pub fn shell_scripts(&self) -> Result<Vec<BundledScript>, AppError> {
        Ok(self.bundle.scripts()?.into_iter().filter(BundledScript::is_shell_script).collect())
    }

    pub fn variables(&self) -> &dyn VariableSource {
        self.vars.as_ref()
    }

    /// Add every shell script as a deferred, executable `write_files` entry.
    ///
    /// With no shell scripts the input is returned byte for byte. An existing
    /// entry at an injected script's path is replaced.
    pub fn inject(&self, user_data: Vec<u8>) -> Result<Vec<u8>, AppError> {
        let scripts = self.shell_scripts()?;
        if scripts.is_empty() {
            info!("No scripts found to inject");
            return Ok(user_data);
        }

        let mut config = CloudConfig::parse(&user_data)?;

        for script in &scripts {
            let rendered = substitute_variables(&script.content, self.vars.as_ref());
            let path = injected_script_path(&script.name);
            let replaced = config.upsert_write_file(WriteFile {
                path: path.clone(),
                content: STANDARD.encode(rendered.as_bytes()),
                encoding: Some("base64".to_string()),
                permissions: Some("0755".to_string()),
                defer: true,
                ..WriteFile::default()
            });
            debug!(script = %script.name, sha256 = %script.sha256, %path, replaced, "injected script");
        }
        info!(count = scripts.len(), "injected setup scripts");

        let yaml = config.to_yaml()?;
        if !has_cloud_config_header(&user_data) {
            return Ok(yaml.into_bytes());
        }
        Ok(format!("{}\n{}", CLOUD_CONFIG_HEADER, yaml).into_bytes())
    }
}
