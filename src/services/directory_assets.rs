//! Asset sources backed by directories on disk.
//!
//! Both load their files fully into memory when constructed, so later reads
//! never touch the filesystem.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::{
    BundledScript, CONTENT_META_TEMPLATE, DESCRIPTION_META_TEMPLATE, MetaTemplateSource,
    ScriptBundle,
};

/// Meta-templates read from a directory.
#[derive(Debug, Clone)]
pub struct DirectoryMetaTemplates {
    files: BTreeMap<String, String>,
}

impl DirectoryMetaTemplates {
    /// Load every file in `dir`. Both required meta-templates must be present.
    pub fn load(dir: &Path) -> Result<Self, AppError> {
        let mut files = BTreeMap::new();
        for (name, content) in read_files(dir, |_| true)? {
            files.insert(name, content);
        }

        for required in [DESCRIPTION_META_TEMPLATE, CONTENT_META_TEMPLATE] {
            if !files.contains_key(required) {
                return Err(AppError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("meta template {} missing from {}", required, dir.display()),
                )));
            }
        }

        Ok(Self { files })
    }
}

impl MetaTemplateSource for DirectoryMetaTemplates {
    fn list(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }

    fn content(&self, name: &str) -> Result<String, AppError> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("meta template {}", name)))
    }
}

/// Shell scripts read from a directory, kept in the platform's `read_dir` order.
///
/// Files without the `.sh` extension are never read.
#[derive(Debug, Clone)]
pub struct DirectoryScriptBundle {
    scripts: Vec<BundledScript>,
}

impl DirectoryScriptBundle {
    pub fn load(dir: &Path) -> Result<Self, AppError> {
        let scripts = read_files(dir, |name| name.ends_with(".sh"))?
            .into_iter()
            .map(|(name, content)| BundledScript::new(name, content))
            .collect();
        Ok(Self { scripts })
    }
}

impl ScriptBundle for DirectoryScriptBundle {
    fn scripts(&self) -> Result<Vec<BundledScript>, AppError> {
        Ok(self.scripts.clone())
    }
}

fn read_files(
    dir: &Path,
    wanted: impl Fn(&str) -> bool,
) -> Result<Vec<(String, String)>, AppError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !wanted(&name) {
            continue;
        }
        let content = fs::read_to_string(entry.path())?;
        files.push((name, content));
    }
    Ok(files)
}
