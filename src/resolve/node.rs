//! Resolved node tree
//!
//! The output of resolution: primitive drawing instructions only, every
//! template substituted and every procedural series pre-computed. Nodes are
//! owned exclusively by the tree that contains them; identities are
//! sequential [`NodeId`]s assigned during resolution, which the collapse
//! side-table keys on.

use serde::Serialize;

use crate::generate::{Point2, Point3};
use crate::parser::ast::{CursorKind, EdgeInsets, Flow, Outline};

/// Identity of a resolved node within one resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub u32);

/// A fully resolved drawing instruction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedNode {
    Frame(FrameNode),
    Box(BoxNode),
    Text(TextNode),
    Icon(IconNode),
    Cursor(CursorNode),
    Map(MapNode),
    Chart(ChartNode),
    Globe(GlobeNode),
    Cloud(CloudNode),
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameNode {
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    pub direction: Flow,
    pub padding: EdgeInsets,
    pub gap: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    pub children: Vec<ResolvedNode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoxNode {
    pub id: NodeId,
    pub outline: Outline,
    pub padding: EdgeInsets,
    pub gap: f64,
    pub direction: Flow,
    pub grow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub children: Vec<ResolvedNode>,
}

impl BoxNode {
    /// An empty, undecorated box (the all-purpose fallback node).
    pub fn empty(id: NodeId) -> Self {
        Self {
            id,
            outline: Outline::None,
            padding: EdgeInsets::zero(),
            gap: 0.0,
            direction: Flow::Column,
            grow: false,
            width: None,
            height: None,
            fill: None,
            link: None,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TextNode {
    pub id: NodeId,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IconNode {
    pub id: NodeId,
    /// Icon name, passed through untouched; the presentation layer maps it
    /// to path data via its icon capability
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CursorNode {
    pub id: NodeId,
    pub kind: CursorKind,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapNode {
    pub id: NodeId,
    pub width: f64,
    pub height: f64,
    pub points: Vec<Point2>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartNode {
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    pub points: Vec<Point2>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GlobeNode {
    pub id: NodeId,
    pub altitude: f64,
    pub track: Vec<Point3>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CloudNode {
    pub id: NodeId,
    pub points: Vec<Point3>,
}

impl ResolvedNode {
    pub fn id(&self) -> NodeId {
        match self {
            ResolvedNode::Frame(n) => n.id,
            ResolvedNode::Box(n) => n.id,
            ResolvedNode::Text(n) => n.id,
            ResolvedNode::Icon(n) => n.id,
            ResolvedNode::Cursor(n) => n.id,
            ResolvedNode::Map(n) => n.id,
            ResolvedNode::Chart(n) => n.id,
            ResolvedNode::Globe(n) => n.id,
            ResolvedNode::Cloud(n) => n.id,
        }
    }

    /// Children of container nodes; leaves yield an empty slice.
    pub fn children(&self) -> &[ResolvedNode] {
        match self {
            ResolvedNode::Frame(n) => &n.children,
            ResolvedNode::Box(n) => &n.children,
            _ => &[],
        }
    }

    /// Total node count of this subtree, including self.
    pub fn subtree_len(&self) -> usize {
        1 + self.children().iter().map(ResolvedNode::subtree_len).sum::<usize>()
    }
}

/// Collect every icon name in a resolved forest, in document order.
pub fn collect_icon_names(nodes: &[ResolvedNode]) -> Vec<&str> {
    let mut names = Vec::new();
    fn visit<'a>(node: &'a ResolvedNode, names: &mut Vec<&'a str>) {
        if let ResolvedNode::Icon(icon) = node {
            names.push(icon.name.as_str());
        }
        for child in node.children() {
            visit(child, names);
        }
    }
    for node in nodes {
        visit(node, &mut names);
    }
    names
}
