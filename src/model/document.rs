//! Model document structure and texture fixing

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::resource::{self, PathPrefix};

/// A Minecraft Java model document.
///
/// Wraps the raw JSON object so fields this tool does not understand
/// (parent, elements, display transforms, ...) survive a rewrite untouched
/// and in their original order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelDocument {
    data: Map<String, Value>,
}

impl ModelDocument {
    /// Look up a top-level field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// The "textures" mapping, if present and an object.
    #[must_use]
    pub fn textures(&self) -> Option<&Map<String, Value>> {
        self.data.get("textures").and_then(Value::as_object)
    }

    /// Rewrite every texture value so its path sits under `prefix`.
    ///
    /// Values starting with `#` (references to other texture slots) are left
    /// unchanged. The first invalid entry aborts the fix; callers skip the
    /// whole file rather than writing a partially repaired document.
    ///
    /// # Errors
    /// Returns [`Error::MissingTextures`] if the document has no "textures"
    /// field, [`Error::TexturesNotAnObject`] if that field is not an object,
    /// [`Error::TextureNotAString`] for a non-string value, and
    /// [`Error::MalformedResourceLocation`] for an unparseable value.
    pub fn fix_textures(&mut self, prefix: PathPrefix) -> Result<()> {
        let textures = self.data.get_mut("textures").ok_or(Error::MissingTextures)?;
        let entries = textures.as_object_mut().ok_or(Error::TexturesNotAnObject)?;

        for (key, value) in entries {
            let raw = value.as_str().ok_or_else(|| Error::TextureNotAString {
                key: key.clone(),
            })?;
            *value = Value::String(resource::normalize_texture(raw, prefix)?);
        }

        Ok(())
    }
}
