use std::path::Path;

use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::AppError;
use crate::ports::{BundledScript, MetaTemplateSource, ScriptBundle};

static META_TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/meta");
static SCRIPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scripts");

/// Meta-templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedMetaTemplates;

impl EmbeddedMetaTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl MetaTemplateSource for EmbeddedMetaTemplates {
    fn list(&self) -> Vec<String> {
        META_TEMPLATES_DIR.files().map(|file| file_name(file.path())).collect()
    }

    fn content(&self, name: &str) -> Result<String, AppError> {
        let file = META_TEMPLATES_DIR
            .get_file(name)
            .ok_or_else(|| AppError::NotFound(format!("meta template {}", name)))?;
        file.contents_utf8().map(str::to_string).ok_or_else(|| {
            AppError::config_error(format!("Meta template is not UTF-8: {}", name))
        })
    }
}

/// Setup scripts compiled into the binary, in embedded directory order.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedScriptBundle;

impl EmbeddedScriptBundle {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptBundle for EmbeddedScriptBundle {
    fn scripts(&self) -> Result<Vec<BundledScript>, AppError> {
        let mut scripts = Vec::new();
        for entry in SCRIPTS_DIR.entries() {
            if let DirEntry::File(file) = entry {
                let name = file_name(file.path());
                let content = file.contents_utf8().ok_or_else(|| {
                    AppError::config_error(format!("Bundled script is not UTF-8: {}", name))
                })?;
                scripts.push(BundledScript::new(name, content));
            }
        }
        Ok(scripts)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name().map(|name| name.to_string_lossy().to_string()).unwrap_or_default()
}
