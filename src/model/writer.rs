//! Model file writing

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::document::ModelDocument;
use crate::error::Result;

/// Write a model document to disk
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_model<P: AsRef<Path>>(model: &ModelDocument, path: P, indent: usize) -> Result<()> {
    let json = serialize_model(model, indent)?;
    fs::write(path, json)?;
    Ok(())
}

/// Serialize a model document to a JSON string with `indent` spaces per level
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn serialize_model(model: &ModelDocument, indent: usize) -> Result<String> {
    let indent_str = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent_str.as_bytes());

    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    model.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf)?)
}
