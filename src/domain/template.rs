use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Machine-readable description of a generated template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDescription {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Parameter name to parameter description.
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

/// A template held by the store: its description and renderable content.
///
/// Immutable once created; replaced only by delete-then-recreate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedTemplate {
    pub description: TemplateDescription,
    pub content: String,
}
