// src/core/models.rs

use crate::core::media;
use crate::error::{SelectError, UploadError};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

/// Placeholder shown for any extracted field the backend could not fill.
pub const NOT_FOUND: &str = "Not Found";

// --- Selected File ---

/// A document the user picked, held in memory until replaced or reset.
///
/// The bytes are shared so an upload already in flight keeps its own handle
/// while the user moves on to another file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads a file from disk, declaring its media type from the extension.
    pub fn from_path(path: &Path) -> Result<Self, SelectError> {
        let metadata = std::fs::metadata(path).map_err(|source| SelectError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(SelectError::NotAFile(path.to_path_buf()));
        }
        let bytes = std::fs::read(path).map_err(|source| SelectError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, media::media_type_for(path), bytes))
    }

    pub fn is_image(&self) -> bool {
        media::is_image(&self.media_type)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// --- Validation Result ---

/// What the backend extracted for a single key.
///
/// Keeps "the server sent nothing" apart from "the server sent an empty value";
/// both render as [`NOT_FOUND`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedValue {
    Found(String),
    Empty,
    Missing,
}

impl ExtractedValue {
    pub fn as_display(&self) -> &str {
        match self {
            ExtractedValue::Found(value) => value,
            ExtractedValue::Empty | ExtractedValue::Missing => NOT_FOUND,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ExtractedValue::Found(_))
    }
}

impl From<Value> for ExtractedValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ExtractedValue::Missing,
            Value::String(s) if s.is_empty() => ExtractedValue::Empty,
            Value::String(s) => ExtractedValue::Found(s),
            Value::Bool(false) => ExtractedValue::Empty,
            Value::Number(n) if n.as_f64() == Some(0.0) => ExtractedValue::Empty,
            other => ExtractedValue::Found(other.to_string()),
        }
    }
}

/// The payload returned by `/validate`.
///
/// Only the outer shape is checked. Missing fields fall back to empty values and
/// fields of an unexpected type are converted to text rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub validation_result: Value,
    pub summary: String,
    pub key_info: Vec<(String, ExtractedValue)>,
}

impl ValidationResult {
    /// Parses a response body, which must be a JSON object.
    pub fn from_json(body: &str) -> Result<Self, UploadError> {
        let Value::Object(mut object) = serde_json::from_str(body)? else {
            return Err(UploadError::NotAnObject);
        };
        Ok(Self {
            validation_result: object.remove("validationResult").unwrap_or(Value::Null),
            summary: summary_text(object.remove("summary").unwrap_or(Value::Null)),
            key_info: key_info_entries(object.remove("key_info").unwrap_or(Value::Null)),
        })
    }

    /// The validation outcome as indented JSON.
    pub fn pretty_outcome(&self) -> String {
        serde_json::to_string_pretty(&self.validation_result)
            .unwrap_or_else(|_| self.validation_result.to_string())
    }
}

fn summary_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

// Keeps the server's key order. Arrays are keyed by index; any other
// non-object value yields no entries.
fn key_info_entries(value: Value) -> Vec<(String, ExtractedValue)> {
    match value {
        Value::Object(map) => map.into_iter().map(|(k, v)| (k, ExtractedValue::from(v))).collect(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), ExtractedValue::from(v)))
            .collect(),
        _ => Vec::new(),
    }
}
