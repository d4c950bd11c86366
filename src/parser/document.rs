//! Top-level token document access.

use serde_json::{Map, Value};

use crate::error::{Result, TokenError};

/// A parsed token document: a JSON object holding core and semantic sections.
#[derive(Debug, Clone)]
pub struct Document {
    root: Map<String, Value>,
}

impl Document {
    /// Parse a JSON source string. The root must be an object.
    pub fn parse(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source).map_err(|e| TokenError::Json {
            message: e.to_string(),
        })?;

        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(TokenError::Json {
                message: format!("expected a top-level object, found {}", json_kind(&other)),
            }),
        }
    }

    /// Get a top-level section that must be an object.
    pub fn section(&self, key: &str) -> Result<&Map<String, Value>> {
        object_at(&self.root, key, "the token document")
    }

    /// Get an object nested one level inside a top-level section.
    pub fn subsection(&self, section: &str, key: &str) -> Result<&Map<String, Value>> {
        object_at(self.section(section)?, key, section)
    }
}

fn object_at<'a>(
    map: &'a Map<String, Value>,
    key: &str,
    section: &str,
) -> Result<&'a Map<String, Value>> {
    map.get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| TokenError::MissingKey {
            key: key.to_string(),
            section: section.to_string(),
        })
}

/// Name a JSON value's type for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
