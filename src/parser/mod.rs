//! Parsing of wireframe documents and component libraries
//!
//! Input is YAML; the engine only cares about the mapping/sequence/scalar
//! data model underneath, decoded into [`ast::SpecNode`] values up front.

pub mod ast;
pub mod library;

pub use ast::{ChildrenSpec, ComponentRef, Edge, EdgeInsets, Flow, Outline, SpecNode};
pub use library::{ComponentDef, ComponentLibrary};

use serde_yaml::Value;

use crate::error::SpecError;

/// A parsed wireframe document: top-level nodes in document order.
///
/// The raw values are kept alongside the decoded nodes because component
/// templates substitute into raw values before re-decoding.
#[derive(Debug, Clone)]
pub struct SpecDocument {
    pub nodes: Vec<Value>,
}

impl SpecDocument {
    /// Decode every top-level node.
    pub fn decoded(&self) -> Vec<SpecNode> {
        self.nodes.iter().map(SpecNode::from_value).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Parse a wireframe document.
///
/// Accepts a sequence of nodes, a mapping with a `frames` sequence, or an
/// empty/null document.
pub fn parse_document(source: &str) -> Result<SpecDocument, SpecError> {
    let root: Value = serde_yaml::from_str(source).map_err(SpecError::Document)?;

    let nodes = match root {
        Value::Null => Vec::new(),
        Value::Sequence(seq) => seq,
        Value::Mapping(map) => match map.get("frames") {
            Some(Value::Sequence(seq)) => seq.clone(),
            _ => return Err(SpecError::DocumentShape),
        },
        _ => return Err(SpecError::DocumentShape),
    };

    Ok(SpecDocument { nodes })
}

/// Parse a component library document.
pub fn parse_library(source: &str) -> Result<ComponentLibrary, SpecError> {
    ComponentLibrary::from_str(source)
}
