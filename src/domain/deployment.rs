//! Deployment descriptions: the structured input from which templates are generated.

use serde::{Deserialize, Serialize};

/// A runtime parameter the generated template expects.
///
/// `name` is written in PascalCase and is the identifier referenced by
/// placeholders in commands and file contents (`{{ .ServerName }}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A file to write on the provisioned machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSpec {
    pub path: String,
    #[serde(default)]
    pub content: String,
}

/// Caller-supplied description of a deployment, consumed once by template creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentDescription {
    /// Lowercase identifier, also the store key.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
    #[serde(default)]
    pub update_packages: bool,
    #[serde(default)]
    pub upgrade_packages: bool,
    #[serde(default)]
    pub packages: Vec<String>,
    #[serde(default)]
    pub commands: Vec<String>,
    #[serde(default)]
    pub files: Vec<FileSpec>,
}

impl DeploymentDescription {
    /// Minimal description with identifier, display name and free text.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.parameters.push(ParameterSpec { name: name.into(), description: description.into() });
        self
    }

    pub fn with_packages<I, S>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.packages.extend(packages.into_iter().map(Into::into));
        self
    }

    pub fn with_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commands.extend(commands.into_iter().map(Into::into));
        self
    }

    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.push(FileSpec { path: path.into(), content: content.into() });
        self
    }

    pub fn with_package_update(mut self, update: bool, upgrade: bool) -> Self {
        self.update_packages = update;
        self.upgrade_packages = upgrade;
        self
    }
}
