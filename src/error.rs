//! Error types for `modelfix`

use thiserror::Error;

/// The error type for `modelfix` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    // ==================== Model Errors ====================
    /// The model document has no "textures" mapping.
    #[error("'textures' doesn't exist")]
    MissingTextures,

    /// The "textures" field exists but is not a JSON object.
    #[error("'textures' is not an object")]
    TexturesNotAnObject,

    /// A texture value is not a string.
    #[error("the resource location for '{key}' must be a string")]
    TextureNotAString {
        /// The texture slot whose value has the wrong type.
        key: String,
    },

    // ==================== Resource Location Errors ====================
    /// A texture string has zero or more than one ":" separator.
    #[error("'{value}' is not a valid resource location")]
    MalformedResourceLocation {
        /// The original string, for diagnostics.
        value: String,
    },
}

/// A specialized Result type for `modelfix` operations.
pub type Result<T> = std::result::Result<T, Error>;
