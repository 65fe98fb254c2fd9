//! Wireframer - a resolution engine for declarative UI mock-ups
//!
//! This library turns a wireframe document of nested, templated,
//! component-referencing nodes into a concrete tree of primitive drawing
//! instructions, and computes per-edge border-collapse flags that a
//! presentation layer consumes when painting.
//!
//! # Example
//!
//! ```rust
//! let spec = "
//! - frame:
//!     title: Home
//!     children:
//!       - box:
//!           outline: thin
//! ";
//!
//! let result = wireframer::resolve_spec(spec, "").unwrap();
//! assert_eq!(result.frames.len(), 1);
//! assert!(result.diagnostics.is_empty());
//! ```

pub mod error;
pub mod generate;
pub mod icons;
pub mod layout;
pub mod parser;
pub mod resolve;
pub mod template;

pub use error::SpecError;
pub use icons::IconCatalog;
pub use layout::{analyze, CollapseMap, EdgeFlags};
pub use parser::{parse_document, parse_library, ComponentLibrary, SpecDocument};
pub use resolve::{Diagnostic, NodeId, ResolveOptions, ResolvedNode, Resolver};

/// Everything one render request produces: the resolved forest, the
/// border-collapse side-table, and any degradation notes.
#[derive(Debug)]
pub struct Resolution {
    /// Resolved top-level nodes in document order
    pub frames: Vec<ResolvedNode>,
    /// Collapse flags per frame/box, keyed by node identity
    pub collapse: CollapseMap,
    /// Notes about content that resolved in degraded form
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve a wireframe document against a component library with default
/// options.
///
/// # Example
///
/// ```rust
/// let components = "
/// Button:
///   default:
///     - box:
///         outline: thin
///         children:
///           - text: \"{{label}}\"
/// ";
///
/// let result = wireframer::resolve_spec("- Button:\n    label: Save\n", components).unwrap();
/// assert_eq!(result.frames.len(), 1);
/// ```
pub fn resolve_spec(spec: &str, components: &str) -> Result<Resolution, SpecError> {
    resolve_spec_with_options(spec, components, ResolveOptions::default())
}

/// Resolve with explicit options (seeded randomness, variant defaults,
/// nesting limits).
///
/// # Example
///
/// ```rust
/// use wireframer::ResolveOptions;
///
/// let spec = "- chart:\n    func: random\n    samples: 8\n";
/// let options = ResolveOptions::new().with_seed(7);
/// let first = wireframer::resolve_spec_with_options(spec, "", options.clone()).unwrap();
/// let second = wireframer::resolve_spec_with_options(spec, "", options).unwrap();
/// assert_eq!(
///     format!("{:?}", first.frames),
///     format!("{:?}", second.frames),
/// );
/// ```
pub fn resolve_spec_with_options(
    spec: &str,
    components: &str,
    options: ResolveOptions,
) -> Result<Resolution, SpecError> {
    let document = parse_document(spec)?;
    let library = parse_library(components)?;

    let mut resolver = Resolver::new(&library, options);
    let frames = resolver.resolve_document(&document);
    let diagnostics = resolver.into_diagnostics();

    let collapse = layout::analyze(&frames);

    Ok(Resolution {
        frames,
        collapse,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_empty_inputs() {
        let result = resolve_spec("", "").expect("Should resolve");
        assert!(result.frames.is_empty());
        assert!(result.collapse.is_empty());
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_resolve_invalid_document() {
        let result = resolve_spec("frames: [unterminated", "");
        assert!(matches!(result, Err(SpecError::Document(_))));
    }

    #[test]
    fn test_stacked_boxes_collapse_end_to_end() {
        let spec = "
- frame:
    padding: 0
    gap: 0
    children:
      - box:
          outline: thin
      - box:
          outline: thin
";
        let result = resolve_spec(spec, "").expect("Should resolve");
        let frame = &result.frames[0];
        let children = frame.children();
        assert_eq!(children.len(), 2);

        let upper = result.collapse[&children[0].id()];
        let lower = result.collapse[&children[1].id()];
        assert!(upper.bottom && !upper.top);
        assert!(lower.top && !lower.bottom);
        assert!(!upper.left && !upper.right && !lower.left && !lower.right);
        assert_eq!(result.collapse[&frame.id()], EdgeFlags::NONE);
    }

    #[test]
    fn test_component_resolves_through_pipeline() {
        let components = "
Button:
  default:
    - box:
        outline: thin
        children:
          - text: \"{{label}}\"
";
        let result =
            resolve_spec("- Button:\n    label: Save\n", components).expect("Should resolve");
        let ResolvedNode::Box(button) = &result.frames[0] else {
            panic!("Expected Box");
        };
        let ResolvedNode::Text(text) = &button.children[0] else {
            panic!("Expected Text");
        };
        assert_eq!(text.content, "Save");
    }

    #[test]
    fn test_diagnostics_accumulate() {
        let spec = "
- Ghost: {}
- Phantom: {}
- mystery: {}
";
        let result = resolve_spec(spec, "").expect("Should resolve");
        assert_eq!(result.frames.len(), 3);
        assert_eq!(result.diagnostics.len(), 3);
    }
}
