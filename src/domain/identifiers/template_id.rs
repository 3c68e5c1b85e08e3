use serde::{Deserialize, Deserializer};

use super::validation::validate_template_identifier;
use crate::domain::AppError;

/// A validated template identifier.
///
/// Guarantees:
/// - Non-empty
/// - Contains only ASCII lowercase letters, digits, `-`, or `_`
/// - No path traversal components
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(String);

impl TemplateId {
    /// Validate and create a new instance.
    pub fn new(id: &str) -> Result<Self, AppError> {
        if validate_template_identifier(id) {
            Ok(Self(id.to_string()))
        } else {
            Err(AppError::InvalidTemplateId(id.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for TemplateId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for TemplateId {
    fn as_ref(&self) -> &str {
        self
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TemplateId> for String {
    fn from(val: TemplateId) -> Self {
        val.0
    }
}

impl<'de> Deserialize<'de> for TemplateId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TemplateId::new(&s).map_err(serde::de::Error::custom)
    }
}
