//! Model file reading

use std::fs;
use std::path::Path;

use super::document::ModelDocument;
use crate::error::Result;

/// Read a model file from disk
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid JSON.
pub fn read_model<P: AsRef<Path>>(path: P) -> Result<ModelDocument> {
    let content = fs::read_to_string(path)?;
    parse_model(&content)
}

/// Parse a model from a JSON string
///
/// # Errors
/// Returns an error if the JSON is malformed or not an object.
pub fn parse_model(content: &str) -> Result<ModelDocument> {
    let doc: ModelDocument = serde_json::from_str(content)?;
    Ok(doc)
}
