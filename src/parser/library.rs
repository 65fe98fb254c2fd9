//! Component library: named, reusable node templates with variants

use std::collections::HashMap;

use serde_yaml::Value;

use crate::error::SpecError;

/// A stored component definition: variant name → ordered node templates.
#[derive(Debug, Clone)]
pub struct ComponentDef {
    pub name: String,
    variants: HashMap<String, Vec<Value>>,
}

impl ComponentDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: HashMap::new(),
        }
    }

    /// Add a variant. Later definitions of the same variant name win.
    pub fn add_variant(&mut self, variant: impl Into<String>, nodes: Vec<Value>) {
        self.variants.insert(variant.into(), nodes);
    }

    /// Get the node templates of a variant.
    pub fn variant(&self, name: &str) -> Option<&[Value]> {
        self.variants.get(name).map(Vec::as_slice)
    }

    pub fn has_variant(&self, name: &str) -> bool {
        self.variants.contains_key(name)
    }

    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }
}

/// Read-only registry of component definitions.
///
/// Loaded once per render request; resolution deep-copies variant templates
/// before substituting into them, so the library is never mutated.
#[derive(Debug, Clone, Default)]
pub struct ComponentLibrary {
    components: HashMap<String, ComponentDef>,
}

impl ComponentLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a library document.
    ///
    /// The root is a mapping of component name → variant mapping → node
    /// sequence. A bare node sequence under a component name is shorthand
    /// for a single `default` variant. Empty or null input yields an empty
    /// library.
    pub fn from_str(source: &str) -> Result<Self, SpecError> {
        let root: Value = serde_yaml::from_str(source).map_err(SpecError::Library)?;
        Self::from_value(root)
    }

    fn from_value(root: Value) -> Result<Self, SpecError> {
        let mut library = Self::new();

        let map = match root {
            Value::Null => return Ok(library),
            Value::Mapping(map) => map,
            _ => return Err(SpecError::LibraryShape),
        };

        for (key, body) in map {
            let Some(name) = key.as_str() else { continue };
            let mut def = ComponentDef::new(name);

            match body {
                // Shorthand: the component body is the default variant
                Value::Sequence(nodes) => def.add_variant("default", nodes),
                Value::Mapping(variants) => {
                    for (variant_key, nodes) in variants {
                        let Some(variant) = variant_key.as_str() else {
                            continue;
                        };
                        let nodes = match nodes {
                            Value::Sequence(seq) => seq,
                            // A single node where a sequence is expected
                            node @ Value::Mapping(_) => vec![node],
                            _ => Vec::new(),
                        };
                        def.add_variant(variant, nodes);
                    }
                }
                _ => {}
            }

            library.components.insert(name.to_string(), def);
        }

        Ok(library)
    }

    /// Get a component definition by name.
    pub fn get(&self, name: &str) -> Option<&ComponentDef> {
        self.components.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
