//! Process configuration (`ztp.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZtpConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub scripts: ScriptsConfig,
    #[serde(default)]
    pub meta_templates: MetaTemplatesConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptsConfig {
    /// When false, payloads are produced without injected scripts.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Directory replacing the embedded script bundle.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for ScriptsConfig {
    fn default() -> Self {
        Self { enabled: true, dir: None }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetaTemplatesConfig {
    /// Directory replacing the embedded meta-templates.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl ZtpConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(AppError::config_error(format!(
                "Invalid log level '{}': must be one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ZtpConfig, AppError> {
    let config: ZtpConfig = toml::from_str(content)
        .map_err(|e| AppError::config_error(format!("Malformed ztp config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from `path`, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<ZtpConfig, AppError> {
    match path {
        Some(path) => parse_config_content(&fs::read_to_string(path)?),
        None => Ok(ZtpConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_config_content("").unwrap();

        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert!(config.scripts.enabled);
        assert_eq!(config.scripts.dir, None);
        assert_eq!(config.meta_templates.dir, None);
    }

    #[test]
    fn parses_all_sections() {
        let toml = r#"
[logging]
level = "debug"
json = true

[scripts]
enabled = false
dir = "/opt/ztp/scripts"

[meta_templates]
dir = "/opt/ztp/meta"
"#;
        let config = parse_config_content(toml).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert!(!config.scripts.enabled);
        assert_eq!(config.scripts.dir, Some(PathBuf::from("/opt/ztp/scripts")));
        assert_eq!(config.meta_templates.dir, Some(PathBuf::from("/opt/ztp/meta")));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = parse_config_content("[scripts]\ndirectory = \"/tmp\"\n").unwrap_err();
        assert!(err.to_string().contains("Malformed ztp config"));
    }

    #[test]
    fn rejects_invalid_log_level() {
        let err = parse_config_content("[logging]\nlevel = \"loud\"\n").unwrap_err();
        assert!(err.to_string().contains("Invalid log level 'loud'"));
    }
}
