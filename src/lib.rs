//! # modelfix
//!
//! Fixes texture resource locations in Minecraft Java model files by
//! prefixing bare texture paths with `block/` or `item/` and rewriting the
//! files in place.
//!
//! ## Quick Start
//!
//! ### Fixing a whole resource pack folder
//!
//! ```no_run
//! use modelfix::batch::fix_directory;
//! use modelfix::resource::PathPrefix;
//!
//! let result = fix_directory("assets/mymod/models/item", PathPrefix::Item, 4);
//! println!("Fixed {} files", result.success_count);
//! ```
//!
//! ### Working with a single model
//!
//! ```no_run
//! use modelfix::model::{read_model, write_model};
//! use modelfix::resource::PathPrefix;
//!
//! let mut model = read_model("cube.json")?;
//! model.fix_textures(PathPrefix::Block)?;
//! write_model(&model, "cube.json", 4)?;
//! # Ok::<(), modelfix::Error>(())
//! ```
//!
//! ### Normalizing a resource location
//!
//! ```
//! use modelfix::resource::{normalize_texture, PathPrefix};
//!
//! let fixed = normalize_texture("wool", PathPrefix::Block)?;
//! assert_eq!(fixed, "minecraft:block/wool");
//! # Ok::<(), modelfix::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `modelfix` command-line binary

pub mod batch;
pub mod error;
pub mod model;
pub mod resource;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::batch::{BatchFixResult, find_model_files, fix_directory, fix_model_file};
    pub use crate::error::{Error, Result};
    pub use crate::model::{ModelDocument, parse_model, read_model, serialize_model, write_model};
    pub use crate::resource::{PathPrefix, ResourceLocation, normalize_texture};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
