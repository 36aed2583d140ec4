//! Resource location parsing and texture path normalization
//!
//! Minecraft identifies assets with `namespace:path` resource locations.
//! Model files frequently carry bare paths like `"wool"` that newer game
//! versions expect to live under `block/` or `item/`; this module owns the
//! rule that rewrites them.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Namespace assumed when a resource location omits one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// The folder texture paths get prefixed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPrefix {
    /// Prefix bare paths with `block/`.
    Block,
    /// Prefix bare paths with `item/`.
    Item,
}

impl PathPrefix {
    /// The prefix as it appears inside a resource location path.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PathPrefix::Block => "block",
            PathPrefix::Item => "item",
        }
    }
}

impl fmt::Display for PathPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathPrefix {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "block" => Ok(PathPrefix::Block),
            "item" => Ok(PathPrefix::Item),
            _ => Err(format!("Invalid prefix '{s}'. Valid values: block, item")),
        }
    }
}

/// A parsed `namespace:path` resource location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocation {
    /// The mod/domain prefix, `minecraft` when omitted in the source text.
    pub namespace: String,
    /// The asset path within the namespace.
    pub path: String,
}

impl ResourceLocation {
    /// Parse a resource location string.
    ///
    /// A single bare path gets the `minecraft` namespace; one colon splits
    /// namespace from path. The empty string and strings with two or more
    /// colons are malformed. Casing is preserved as-is.
    ///
    /// # Errors
    /// Returns [`Error::MalformedResourceLocation`] on invalid input,
    /// carrying the original string.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::MalformedResourceLocation {
                value: raw.to_string(),
            });
        }

        let parts: Vec<&str> = raw.split(':').collect();
        match parts.as_slice() {
            [path] => Ok(ResourceLocation {
                namespace: DEFAULT_NAMESPACE.to_string(),
                path: (*path).to_string(),
            }),
            [namespace, path] => Ok(ResourceLocation {
                namespace: (*namespace).to_string(),
                path: (*path).to_string(),
            }),
            _ => Err(Error::MalformedResourceLocation {
                value: raw.to_string(),
            }),
        }
    }

    /// Return this location with its path placed under `prefix`.
    ///
    /// Paths already under `block/` or `item/` are left alone so that
    /// reprocessing an already-fixed model never double-prefixes. The check
    /// is against both literal folders, not the currently selected prefix:
    /// a `block/` path stays `block/` even when prefixing with `item`.
    #[must_use]
    pub fn prefixed(self, prefix: PathPrefix) -> Self {
        if self.path.starts_with("block/") || self.path.starts_with("item/") {
            return self;
        }
        ResourceLocation {
            path: format!("{}/{}", prefix.as_str(), self.path),
            ..self
        }
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

/// Normalize a texture value from a model's "textures" mapping.
///
/// Values starting with `#` are references to another texture slot; they are
/// never namespaced or prefixed and come back unchanged, whatever follows
/// the `#`. Everything else is parsed, prefixed if necessary, and
/// re-serialized as `namespace:path`.
///
/// # Errors
/// Returns [`Error::MalformedResourceLocation`] when the value is empty or
/// has more than one `:` separator.
pub fn normalize_texture(raw: &str, prefix: PathPrefix) -> Result<String> {
    if raw.starts_with('#') {
        return Ok(raw.to_string());
    }

    let location = ResourceLocation::parse(raw)?;
    Ok(location.prefixed(prefix).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_path_gets_namespace_and_prefix() {
        let fixed = normalize_texture("blah", PathPrefix::Item).unwrap();
        assert_eq!(fixed, "minecraft:item/blah");
    }

    #[test]
    fn namespaced_path_keeps_namespace() {
        let fixed = normalize_texture("mymod:custom/foo", PathPrefix::Block).unwrap();
        assert_eq!(fixed, "mymod:block/custom/foo");
    }

    #[test]
    fn already_prefixed_path_is_unchanged() {
        let fixed = normalize_texture("minecraft:block/foo", PathPrefix::Block).unwrap();
        assert_eq!(fixed, "minecraft:block/foo");
    }

    #[test]
    fn other_literal_prefix_is_left_alone() {
        // Idempotence wins over correctness: block/ stays block/ even when
        // prefixing with item.
        let fixed = normalize_texture("ns:block/stone", PathPrefix::Item).unwrap();
        assert_eq!(fixed, "ns:block/stone");
    }

    #[test]
    fn bare_prefixed_path_only_gains_namespace() {
        let fixed = normalize_texture("item/stick", PathPrefix::Block).unwrap();
        assert_eq!(fixed, "minecraft:item/stick");
    }

    #[test]
    fn reference_is_a_fixed_point() {
        let fixed = normalize_texture("#parent", PathPrefix::Item).unwrap();
        assert_eq!(fixed, "#parent");
        assert_eq!(normalize_texture("#0", PathPrefix::Block).unwrap(), "#0");
    }

    #[test]
    fn normalizing_twice_is_idempotent() {
        for raw in ["blah", "mymod:custom/foo", "item/stick", "#side"] {
            let once = normalize_texture(raw, PathPrefix::Item).unwrap();
            let twice = normalize_texture(&once, PathPrefix::Item).unwrap();
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn empty_string_is_malformed() {
        let err = normalize_texture("", PathPrefix::Block).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedResourceLocation { value } if value.is_empty()
        ));
    }

    #[test]
    fn two_colons_are_malformed() {
        let err = normalize_texture("a:b:c", PathPrefix::Block).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedResourceLocation { value } if value == "a:b:c"
        ));
    }

    #[test]
    fn casing_is_preserved() {
        let fixed = normalize_texture("MyMod:Foo", PathPrefix::Item).unwrap();
        assert_eq!(fixed, "MyMod:item/Foo");
    }

    #[test]
    fn prefix_parses_case_insensitively() {
        assert_eq!("block".parse::<PathPrefix>().unwrap(), PathPrefix::Block);
        assert_eq!("Item".parse::<PathPrefix>().unwrap(), PathPrefix::Item);
        assert!("chest".parse::<PathPrefix>().is_err());
    }
}
