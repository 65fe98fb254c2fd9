//! Resolution of spec nodes into a concrete drawing tree

pub mod diag;
pub mod node;
pub mod resolver;

pub use diag::{Diagnostic, DiagnosticCategory};
pub use node::{
    collect_icon_names, BoxNode, ChartNode, CloudNode, CursorNode, FrameNode, GlobeNode, IconNode,
    MapNode, NodeId, ResolvedNode, TextNode,
};
pub use resolver::Resolver;

/// Tunables for one resolution pass.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Variant used when an instance names none
    pub default_variant: String,

    /// Maximum component nesting depth before expansion falls back
    pub max_depth: usize,

    /// Seed for the generator random source; entropy when absent
    pub seed: Option<u64>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            default_variant: "default".to_string(),
            max_depth: 32,
            seed: None,
        }
    }
}

impl ResolveOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback variant name.
    pub fn with_default_variant(mut self, variant: impl Into<String>) -> Self {
        self.default_variant = variant.into();
        self
    }

    /// Set the component nesting limit.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Seed the generator random source for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
