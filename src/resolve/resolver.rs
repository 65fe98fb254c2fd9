//! Component expansion
//!
//! Walks spec nodes one at a time: primitives resolve in place (recursing
//! into children, pre-computing procedural data), component references
//! expand via library lookup, deep copy, substitution against the instance
//! properties, and recursive resolution under that instance scope.
//! Malformed content degrades into fallback nodes plus diagnostics; nothing
//! here returns an error.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_yaml::{Mapping, Value};

use crate::generate::chart::sample_series;
use crate::generate::cloud::{jitter, scatter};
use crate::generate::globe::trajectory;
use crate::generate::path2d::sample_path;
use crate::parser::ast::{self, ChildrenSpec, ComponentRef, Outline, SpecNode};
use crate::parser::{ComponentLibrary, SpecDocument};

use super::diag::{Diagnostic, DiagnosticCategory};
use super::node::{
    BoxNode, ChartNode, CloudNode, CursorNode, FrameNode, GlobeNode, IconNode, MapNode, NodeId,
    ResolvedNode, TextNode,
};
use super::ResolveOptions;

/// Expands one document into a resolved forest.
///
/// Create one per render request; the library is shared read-only, all
/// produced structures are freshly allocated.
pub struct Resolver<'a> {
    library: &'a ComponentLibrary,
    options: ResolveOptions,
    rng: StdRng,
    diagnostics: Vec<Diagnostic>,
    next_id: u32,
    /// Component names currently being expanded, for cycle detection
    resolving: Vec<String>,
}

impl<'a> Resolver<'a> {
    pub fn new(library: &'a ComponentLibrary, options: ResolveOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            library,
            options,
            rng,
            diagnostics: Vec::new(),
            next_id: 0,
            resolving: Vec::new(),
        }
    }

    /// Resolve every top-level node of a document under an empty scope.
    pub fn resolve_document(&mut self, doc: &SpecDocument) -> Vec<ResolvedNode> {
        let scope = Mapping::new();
        let mut resolved = Vec::new();
        for value in &doc.nodes {
            resolved.extend(self.resolve_value(value, &scope));
        }
        resolved
    }

    /// Diagnostics accumulated so far, in emission order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the resolver, returning its diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Resolve one raw node value under the given scope.
    pub fn resolve_value(&mut self, value: &Value, scope: &Mapping) -> Vec<ResolvedNode> {
        self.resolve_node(SpecNode::from_value(value), scope)
    }

    fn resolve_node(&mut self, node: SpecNode, scope: &Mapping) -> Vec<ResolvedNode> {
        match node {
            SpecNode::Frame(spec) => {
                let id = self.alloc();
                let children = self.resolve_children(&spec.children, scope);
                vec![ResolvedNode::Frame(FrameNode {
                    id,
                    title: spec.title,
                    width: spec.width,
                    height: spec.height,
                    direction: spec.direction,
                    padding: spec.padding,
                    gap: spec.gap,
                    background: spec.background,
                    children,
                })]
            }
            SpecNode::Box(spec) => {
                let id = self.alloc();
                let children = self.resolve_children(&spec.children, scope);
                vec![ResolvedNode::Box(BoxNode {
                    id,
                    outline: spec.outline,
                    padding: spec.padding,
                    gap: spec.gap,
                    direction: spec.direction,
                    grow: spec.grow,
                    width: spec.width,
                    height: spec.height,
                    fill: spec.fill,
                    link: spec.link,
                    children,
                })]
            }
            SpecNode::Text(spec) => vec![ResolvedNode::Text(TextNode {
                id: self.alloc(),
                content: spec.content,
                size: spec.size,
                weight: spec.weight,
                color: spec.color,
            })],
            SpecNode::Icon(spec) => vec![ResolvedNode::Icon(IconNode {
                id: self.alloc(),
                name: spec.name,
                size: spec.size,
            })],
            SpecNode::Cursor(spec) => vec![ResolvedNode::Cursor(CursorNode {
                id: self.alloc(),
                kind: spec.kind,
                x: spec.x,
                y: spec.y,
                label: spec.label,
            })],
            SpecNode::Map(spec) => {
                let points = sample_path(spec.path, spec.width, spec.height, &mut self.rng);
                vec![ResolvedNode::Map(MapNode {
                    id: self.alloc(),
                    width: spec.width,
                    height: spec.height,
                    points,
                })]
            }
            SpecNode::Chart(spec) => {
                let points = sample_series(
                    spec.func,
                    spec.from,
                    spec.to,
                    spec.samples,
                    spec.noise,
                    &mut self.rng,
                );
                vec![ResolvedNode::Chart(ChartNode {
                    id: self.alloc(),
                    style: spec.style,
                    points,
                })]
            }
            SpecNode::Globe(spec) => {
                let track = trajectory(
                    spec.route,
                    &spec.waypoints,
                    spec.altitude,
                    spec.detail,
                    &mut self.rng,
                );
                vec![ResolvedNode::Globe(GlobeNode {
                    id: self.alloc(),
                    altitude: spec.altitude,
                    track,
                })]
            }
            SpecNode::Cloud(spec) => {
                let mut points = scatter(spec.spread, spec.count, &mut self.rng);
                jitter(&mut points, spec.noise, &mut self.rng);
                vec![ResolvedNode::Cloud(CloudNode {
                    id: self.alloc(),
                    points,
                })]
            }
            SpecNode::Component(reference) => self.resolve_component(&reference),
            SpecNode::Unknown => {
                self.diag(DiagnosticCategory::UnknownNode, "unrecognized node shape");
                vec![self.empty_box()]
            }
        }
    }

    /// Expand a component instance into resolved nodes.
    fn resolve_component(&mut self, reference: &ComponentRef) -> Vec<ResolvedNode> {
        let name = &reference.name;

        if self.resolving.iter().any(|n| n == name) {
            self.diag(
                DiagnosticCategory::Recursion,
                format!("component '{}' instantiates itself", name),
            );
            return vec![self.placeholder(name)];
        }
        if self.resolving.len() >= self.options.max_depth {
            self.diag(
                DiagnosticCategory::Recursion,
                format!("component nesting exceeds depth {}", self.options.max_depth),
            );
            return vec![self.placeholder(name)];
        }

        let Some(def) = self.library.get(name) else {
            self.diag(
                DiagnosticCategory::Component,
                format!("no component named '{}'", name),
            );
            return vec![self.placeholder(name)];
        };

        let variant = ast::get_str(&reference.props, "variant")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| self.options.default_variant.clone());

        let Some(templates) = def.variant(&variant) else {
            self.diag(
                DiagnosticCategory::Variant,
                format!("component '{}' has no variant '{}'", name, variant),
            );
            return vec![self.empty_box()];
        };

        // Deep copy before substitution; the library is shared and must
        // never observe instance-specific rewrites
        let templates = templates.to_vec();

        self.resolving.push(name.clone());
        let mut resolved = Vec::new();
        for template in &templates {
            let substituted = crate::template::substitute_value(template, &reference.props);
            resolved.extend(self.resolve_value(&substituted, &reference.props));
        }
        self.resolving.pop();

        // A link on the instance lands on the first resolved node, and only
        // when that node is a box
        if let Some(link) = ast::get_str(&reference.props, "link") {
            if let Some(ResolvedNode::Box(first)) = resolved.first_mut() {
                first.link = Some(link);
            }
        }

        resolved
    }

    /// Resolve a children field into a list of resolved nodes.
    fn resolve_children(&mut self, children: &ChildrenSpec, scope: &Mapping) -> Vec<ResolvedNode> {
        match children {
            ChildrenSpec::None => Vec::new(),
            ChildrenSpec::Nodes(nodes) => {
                let mut resolved = Vec::new();
                for value in nodes {
                    resolved.extend(self.resolve_value(value, scope));
                }
                resolved
            }
            ChildrenSpec::Each { source, template } => {
                let Some(items) = scope.get(source.as_str()).and_then(Value::as_sequence) else {
                    self.diag(
                        DiagnosticCategory::Each,
                        format!("'$each' source '{}' is not an array in scope", source),
                    );
                    return Vec::new();
                };
                let Some(template) = template else {
                    self.diag(
                        DiagnosticCategory::Each,
                        format!("'$each' over '{}' has no template", source),
                    );
                    return Vec::new();
                };

                let items = items.clone();
                let mut resolved = Vec::new();
                for item in &items {
                    let mut child_scope = scope.clone();
                    child_scope.insert(
                        Value::String("item".to_string()),
                        Value::Mapping(normalize_item(item)),
                    );
                    let substituted =
                        crate::template::substitute_value(template, &child_scope);
                    // A sequence-valued template flattens one level
                    match substituted {
                        Value::Sequence(seq) => {
                            for value in &seq {
                                resolved.extend(self.resolve_value(value, &child_scope));
                            }
                        }
                        value => resolved.extend(self.resolve_value(&value, &child_scope)),
                    }
                }
                resolved
            }
            ChildrenSpec::Slot => {
                // Projection reads the instantiating caller's own children
                // from the instance scope; absence is not an error
                let Some(projected) = scope.get("children").and_then(Value::as_sequence) else {
                    return Vec::new();
                };
                let projected = projected.clone();
                let mut resolved = Vec::new();
                for value in &projected {
                    resolved.extend(self.resolve_value(value, scope));
                }
                resolved
            }
        }
    }

    /// Dashed-outline placeholder labeled with the unresolvable name.
    fn placeholder(&mut self, name: &str) -> ResolvedNode {
        let id = self.alloc();
        let label = ResolvedNode::Text(TextNode {
            id: self.alloc(),
            content: format!("[{}]", name),
            size: None,
            weight: None,
            color: None,
        });
        let mut fallback = BoxNode::empty(id);
        fallback.outline = Outline::Dashed;
        fallback.padding = crate::parser::ast::EdgeInsets::uniform(8.0);
        fallback.children.push(label);
        ResolvedNode::Box(fallback)
    }

    fn empty_box(&mut self) -> ResolvedNode {
        ResolvedNode::Box(BoxNode::empty(self.alloc()))
    }

    fn alloc(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    fn diag(&mut self, category: DiagnosticCategory, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(category, message));
    }
}

/// Normalize an `$each` item into the mapping bound as `item`.
///
/// Bare strings (and other scalars) become a one-field `{label: item}`
/// record; mappings pass through.
fn normalize_item(item: &Value) -> Mapping {
    match item {
        Value::Mapping(map) => map.clone(),
        other => {
            let label = match other {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => String::new(),
            };
            let mut map = Mapping::new();
            map.insert(Value::String("label".to_string()), Value::String(label));
            map
        }
    }
}
