//! Runtime parameters: the rendering context for one template execution.

use serde::Serialize;
use serde_json::{Map, Value};

use super::AppError;

/// A JSON object of caller-supplied values.
///
/// Values stay loosely typed for rendering. The typed accessors fail on a
/// value of the wrong type instead of substituting a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RuntimeParameters(Map<String, Value>);

impl RuntimeParameters {
    /// Parse raw JSON text. Anything other than a JSON object is rejected.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| AppError::parse_error("parameters", e))?;
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(AppError::parse_error(
                "parameters",
                format!("expected a JSON object, got {}", json_type_name(&other)),
            )),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn string(&self, key: &str) -> Result<Option<&str>, AppError> {
        self.typed(key, "string", Value::as_str)
    }

    pub fn integer(&self, key: &str) -> Result<Option<i64>, AppError> {
        self.typed(key, "integer", Value::as_i64)
    }

    pub fn boolean(&self, key: &str) -> Result<Option<bool>, AppError> {
        self.typed(key, "boolean", Value::as_bool)
    }

    /// Array of strings; a non-string element is an error, not skipped.
    pub fn string_list(&self, key: &str) -> Result<Option<Vec<String>>, AppError> {
        let Some(items) = self.typed(key, "array", Value::as_array)? else {
            return Ok(None);
        };
        items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    AppError::parse_error(
                        format!("parameter '{}'", key),
                        format!("expected array of strings, found {}", json_type_name(item)),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    fn typed<'a, T>(
        &'a self,
        key: &str,
        expected: &str,
        cast: impl Fn(&'a Value) -> Option<T>,
    ) -> Result<Option<T>, AppError> {
        match self.0.get(key) {
            None => Ok(None),
            Some(value) => cast(value).map(Some).ok_or_else(|| {
                AppError::parse_error(
                    format!("parameter '{}'", key),
                    format!("expected {}, found {}", expected, json_type_name(value)),
                )
            }),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
