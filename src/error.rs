//! Error types for loading wireframe documents and component libraries

use thiserror::Error;

/// Errors raised while loading input documents.
///
/// Everything past the outer parse degrades locally into diagnostics
/// (see [`crate::resolve::Diagnostic`]) instead of failing the request.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The wireframe document is not valid YAML
    #[error("failed to parse wireframe document: {0}")]
    Document(#[source] serde_yaml::Error),

    /// The component library is not valid YAML
    #[error("failed to parse component library: {0}")]
    Library(#[source] serde_yaml::Error),

    /// The document root is neither a node sequence nor a `frames:` mapping
    #[error("wireframe document root must be a sequence of nodes")]
    DocumentShape,

    /// The library root is not a mapping of component names
    #[error("component library root must be a mapping of component names")]
    LibraryShape,
}
