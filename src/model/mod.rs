//! Minecraft Java model (JSON) module
//!
//! A model file is a single JSON object; the part this crate cares about is
//! its "textures" mapping. Reading, fixing, and writing are split so the
//! pure document operations stay testable without touching disk.

mod document;
mod reader;
mod writer;

pub use document::ModelDocument;
pub use reader::{parse_model, read_model};
pub use writer::{serialize_model, write_model};
