//! Structured view of a cloud-config document.
//!
//! Only `write_files` is modelled; every other top-level key is carried through
//! an open mapping so that it round-trips unchanged.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use super::AppError;

/// Marker line that cloud-init requires at the top of a cloud-config document.
pub const CLOUD_CONFIG_HEADER: &str = "#cloud-config";

/// A `write_files` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WriteFile {
    pub path: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub defer: bool,
    /// Keys such as `owner` or `append` that are not interpreted here.
    #[serde(flatten)]
    pub extra: Mapping,
}

/// A cloud-config document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloudConfig {
    #[serde(flatten)]
    pub other: Mapping,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub write_files: Vec<WriteFile>,
}

impl CloudConfig {
    /// Parse a rendered document. An empty document yields an empty config.
    pub fn parse(bytes: &[u8]) -> Result<Self, AppError> {
        let value: Value = serde_yaml::from_slice(bytes)
            .map_err(|e| AppError::parse_error("user data as YAML", e))?;
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_yaml::from_value(value).map_err(|e| AppError::parse_error("user data as YAML", e))
    }

    /// Serialize back to YAML text, without the header marker.
    pub fn to_yaml(&self) -> Result<String, AppError> {
        serde_yaml::to_string(self).map_err(|e| AppError::parse_error("cloud config", e))
    }

    /// Insert an entry, replacing any existing entry with the same path in place.
    ///
    /// Returns true when an existing entry was replaced.
    pub fn upsert_write_file(&mut self, entry: WriteFile) -> bool {
        match self.write_files.iter_mut().find(|existing| existing.path == entry.path) {
            Some(existing) => {
                *existing = entry;
                true
            }
            None => {
                self.write_files.push(entry);
                false
            }
        }
    }
}

/// True when the raw document starts with the cloud-config header marker.
pub fn has_cloud_config_header(bytes: &[u8]) -> bool {
    bytes.starts_with(CLOUD_CONFIG_HEADER.as_bytes())
}

fn is_false(value: &bool) -> bool {
    !*value
}
