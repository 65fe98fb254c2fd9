//! Icon catalog: name → vector path data
//!
//! The resolution engine passes icon names through untouched; mapping a
//! name to drawing instructions is the presentation layer's concern. The
//! catalog here is the default implementation of that capability: a
//! canonicalizing lookup over a TOML-defined table, with a built-in set and
//! a fallback shape for unknown names. Injected rather than global so tests
//! can swap it out.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading an icon catalog
#[derive(Error, Debug)]
pub enum IconError {
    #[error("Failed to read icon catalog file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse icon catalog TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Path data drawn when a name matches nothing: a centered circle.
pub const FALLBACK_PATH: &str = "M12 3a9 9 0 1 0 0 18a9 9 0 1 0 0-18z";

/// A catalog mapping canonical icon names to SVG path data.
#[derive(Debug, Clone)]
pub struct IconCatalog {
    /// Optional name for the catalog
    pub name: Option<String>,
    /// Path data keyed by canonical icon name
    paths: HashMap<String, String>,
}

/// TOML structure for deserializing catalogs
#[derive(Deserialize)]
struct TomlCatalog {
    metadata: Option<TomlMetadata>,
    icons: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

/// Built-in icon set covering common wireframe glyphs (24x24 grid).
const DEFAULT_ICONS: &str = r#"
[icons]
home = "M3 11l9-8l9 8v10h-6v-6h-6v6H3z"
search = "M10 4a6 6 0 1 1 0 12a6 6 0 0 1 0-12zm5 11l6 6"
menu = "M4 6h16M4 12h16M4 18h16"
close = "M5 5l14 14M19 5L5 19"
gear = "M12 8a4 4 0 1 0 0 8a4 4 0 0 0 0-8zm8 4l2 1l-1 3l-2-1a8 8 0 0 1-2 2l1 2l-3 1l-1-2a8 8 0 0 1-3 0l-1 2l-3-1l1-2a8 8 0 0 1-2-2l-2 1l-1-3l2-1a8 8 0 0 1 0-2l-2-1l1-3l2 1a8 8 0 0 1 2-2L7 3l3-1l1 2a8 8 0 0 1 3 0l1-2l3 1l-1 2a8 8 0 0 1 2 2l2-1l1 3l-2 1a8 8 0 0 1 0 2z"
user = "M12 4a4 4 0 1 1 0 8a4 4 0 0 1 0-8zm-8 16a8 8 0 0 1 16 0z"
heart = "M12 21l-8-8a5 5 0 0 1 8-6a5 5 0 0 1 8 6z"
star = "M12 2l3 7h7l-5 5l2 7l-7-4l-7 4l2-7l-5-5h7z"
plus = "M12 5v14M5 12h14"
minus = "M5 12h14"
check = "M4 12l5 5L20 6"
arrow-right = "M4 12h16m-6-6l6 6l-6 6"
arrow-left = "M20 12H4m6-6l-6 6l6 6"
chevron-down = "M6 9l6 6l6-6"
bell = "M12 3a6 6 0 0 1 6 6v4l2 3H4l2-3V9a6 6 0 0 1 6-6zm-2 15a2 2 0 0 0 4 0"
mail = "M3 5h18v14H3zm0 0l9 7l9-7"
calendar = "M4 5h16v16H4zm0 5h16M8 3v4m8-4v4"
image = "M4 4h16v16H4zm3 10l3-3l3 3l4-4l3 3"
trash = "M5 7h14m-9-3h4M7 7l1 13h8l1-13"
"#;

impl IconCatalog {
    /// Load a catalog from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, IconError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a catalog from a TOML string. Keys are canonicalized on load.
    pub fn from_str(content: &str) -> Result<Self, IconError> {
        let parsed: TomlCatalog = toml::from_str(content)?;

        let paths = parsed
            .icons
            .into_iter()
            .map(|(name, path)| (canonicalize(&name), path))
            .collect();

        Ok(IconCatalog {
            name: parsed.metadata.and_then(|m| m.name),
            paths,
        })
    }

    /// Look up a name after canonicalization.
    ///
    /// Returns None when the catalog has no such icon.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.paths.get(&canonicalize(name)).map(String::as_str)
    }

    /// Look up a name, falling back to the placeholder shape.
    pub fn lookup_or_fallback(&self, name: &str) -> &str {
        self.lookup(name).unwrap_or(FALLBACK_PATH)
    }

    /// Whether the catalog knows the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.paths.contains_key(&canonicalize(name))
    }

    /// Number of icons in the catalog.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Default for IconCatalog {
    fn default() -> Self {
        Self::from_str(DEFAULT_ICONS).expect("Default icon set should be valid TOML")
    }
}

/// Canonical form of an icon name: trimmed, lowercased, separators
/// normalized to dashes.
pub fn canonicalize(name: &str) -> String {
    name.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == '_' || c.is_whitespace() { '-' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_common_icons() {
        let catalog = IconCatalog::default();
        assert!(catalog.contains("home"));
        assert!(catalog.contains("search"));
        assert!(catalog.contains("arrow-right"));
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_canonicalize_forms() {
        assert_eq!(canonicalize("Home"), "home");
        assert_eq!(canonicalize("  arrow right "), "arrow-right");
        assert_eq!(canonicalize("arrow_right"), "arrow-right");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = IconCatalog::default();
        assert_eq!(catalog.lookup("HOME"), catalog.lookup("home"));
        assert!(catalog.lookup("Arrow Right").is_some());
    }

    #[test]
    fn test_unknown_name_falls_back() {
        let catalog = IconCatalog::default();
        assert_eq!(catalog.lookup("no-such-icon"), None);
        assert_eq!(catalog.lookup_or_fallback("no-such-icon"), FALLBACK_PATH);
    }

    #[test]
    fn test_parse_custom_catalog() {
        let toml_str = r#"
[metadata]
name = "Product icons"

[icons]
logo = "M0 0h24v24H0z"
"#;
        let catalog = IconCatalog::from_str(toml_str).expect("Should parse");
        assert_eq!(catalog.name.as_deref(), Some("Product icons"));
        assert_eq!(catalog.lookup("logo"), Some("M0 0h24v24H0z"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = IconCatalog::from_str("not toml [[[[");
        assert!(result.is_err());
    }
}
