//! Border-collapse analysis
//!
//! A single downward walk over the resolved tree. Each call carries an
//! explicit context value: the set of edges on which an adjacent border is
//! already present for the current node. Bordered boxes consume that
//! context as their collapse flags; unbordered wrappers forward it to the
//! children that actually touch the corresponding edges. Sibling adjacency
//! is added along the way wherever a container stacks children with no gap.
//!
//! Axis handling is direction-aware: in a column the top/bottom pair is
//! first/last-sensitive while left/right is shared by every sibling; a row
//! swaps the pairs.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::parser::ast::{Edge, EdgeInsets, Flow};
use crate::resolve::{NodeId, ResolvedNode};

/// Collapse state of a node's four edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EdgeFlags {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl EdgeFlags {
    pub const NONE: EdgeFlags = EdgeFlags {
        top: false,
        right: false,
        bottom: false,
        left: false,
    };

    pub fn get(self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    pub fn set(&mut self, edge: Edge) {
        match edge {
            Edge::Top => self.top = true,
            Edge::Right => self.right = true,
            Edge::Bottom => self.bottom = true,
            Edge::Left => self.left = true,
        }
    }

    pub fn any(self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

/// Collapse flags per container node, keyed by node identity.
pub type CollapseMap = BTreeMap<NodeId, EdgeFlags>;

/// Compute collapse flags for every frame and box in the forest.
pub fn analyze(nodes: &[ResolvedNode]) -> CollapseMap {
    let mut flags = CollapseMap::new();
    for node in nodes {
        walk(node, EdgeFlags::NONE, &mut flags);
    }
    flags
}

/// Container-shaped view of a node; leaves yield `None`.
struct Container<'a> {
    id: NodeId,
    bordered: bool,
    padding: EdgeInsets,
    gap: f64,
    direction: Flow,
    grow: bool,
    main_size: Option<f64>,
    children: &'a [ResolvedNode],
}

impl Container<'_> {
    /// A container is content-sized when nothing stretches it: its trailing
    /// edge then hugs the last child.
    fn content_sized(&self) -> bool {
        !self.grow && self.main_size.is_none()
    }
}

fn container(node: &ResolvedNode) -> Option<Container<'_>> {
    match node {
        // Frame chrome is a device outline, not a box border; it never
        // fuses with content
        ResolvedNode::Frame(frame) => Some(Container {
            id: frame.id,
            bordered: false,
            padding: frame.padding,
            gap: frame.gap,
            direction: frame.direction,
            grow: false,
            main_size: match frame.direction {
                Flow::Column => frame.height,
                Flow::Row => frame.width,
            },
            children: &frame.children,
        }),
        ResolvedNode::Box(boxed) => Some(Container {
            id: boxed.id,
            bordered: boxed.outline.is_visible(),
            padding: boxed.padding,
            gap: boxed.gap,
            direction: boxed.direction,
            grow: boxed.grow,
            main_size: match boxed.direction {
                Flow::Column => boxed.height,
                Flow::Row => boxed.width,
            },
            children: &boxed.children,
        }),
        _ => None,
    }
}

fn child_grows(node: &ResolvedNode) -> bool {
    matches!(node, ResolvedNode::Box(boxed) if boxed.grow)
}

fn walk(node: &ResolvedNode, inherited: EdgeFlags, flags: &mut CollapseMap) {
    let Some(current) = container(node) else {
        return;
    };

    // A bordered box consumes the inherited adjacency as its own collapse
    // flags; an unbordered one has no border line to suppress.
    flags.insert(
        current.id,
        if current.bordered {
            inherited
        } else {
            EdgeFlags::NONE
        },
    );

    // Whether this container offers an adjacent border to children on the
    // given inner edge. Padding on an edge always blocks it.
    let available = |edge: Edge| -> bool {
        if !current.padding.is_open(edge) {
            return false;
        }
        if current.bordered {
            true
        } else {
            inherited.get(edge)
        }
    };

    let (lead, trail) = current.direction.main_edges();
    let count = current.children.len();

    for (index, child) in current.children.iter().enumerate() {
        let first = index == 0;
        let last = index + 1 == count;
        let touches_trailing = current.content_sized() || child_grows(child);

        let mut ctx = EdgeFlags::NONE;

        if current.bordered {
            // Main axis: the leading edge belongs to the first child, the
            // trailing edge to the last child that reaches it
            if first && available(lead) {
                ctx.set(lead);
            }
            if last && touches_trailing && available(trail) {
                ctx.set(trail);
            }
            // Cross axis: every sibling spans both edges
            let (cross_a, cross_b) = current.direction.cross_edges();
            if available(cross_a) {
                ctx.set(cross_a);
            }
            if available(cross_b) {
                ctx.set(cross_b);
            }
        } else {
            // Transparent wrapper: forward inherited adjacency selectively
            // so fusion propagates across layout-only boxes
            if first {
                if available(Edge::Top) {
                    ctx.set(Edge::Top);
                }
                if available(Edge::Left) {
                    ctx.set(Edge::Left);
                }
            }
            if last && touches_trailing {
                if available(Edge::Bottom) {
                    ctx.set(Edge::Bottom);
                }
                if available(Edge::Right) {
                    ctx.set(Edge::Right);
                }
            }
        }

        // Sibling adjacency: with no gap along the main axis, facing
        // borders fuse when both sides actually reach the shared edge
        if current.gap == 0.0 {
            if !first && border_reaches(&current.children[index - 1], trail) {
                ctx.set(lead);
            }
            if !last && border_reaches(&current.children[index + 1], lead) {
                ctx.set(trail);
            }
        }

        walk(child, ctx, flags);
    }
}

/// Whether a node presents a border at the given edge: bordered itself, or
/// an unbordered container whose edge-adjacent children carry one through
/// an unpadded path.
fn border_reaches(node: &ResolvedNode, edge: Edge) -> bool {
    let Some(current) = container(node) else {
        return false;
    };
    if current.bordered {
        return true;
    }
    if !current.padding.is_open(edge) {
        return false;
    }

    let (lead, trail) = current.direction.main_edges();
    if edge == lead {
        current
            .children
            .first()
            .is_some_and(|child| border_reaches(child, edge))
    } else if edge == trail {
        current
            .children
            .last()
            .is_some_and(|child| border_reaches(child, edge))
    } else {
        // Cross-axis edges are shared by all siblings; a fused line needs
        // every one of them to reach it
        !current.children.is_empty()
            && current
                .children
                .iter()
                .all(|child| border_reaches(child, edge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::{EdgeInsets, Outline};
    use crate::resolve::{BoxNode, FrameNode, TextNode};

    fn bordered(id: u32, children: Vec<ResolvedNode>) -> BoxNode {
        let mut node = BoxNode::empty(NodeId(id));
        node.outline = Outline::Thin;
        node.children = children;
        node
    }

    fn frame(id: u32, children: Vec<ResolvedNode>) -> FrameNode {
        FrameNode {
            id: NodeId(id),
            title: None,
            width: None,
            height: None,
            direction: Flow::Column,
            padding: EdgeInsets::zero(),
            gap: 0.0,
            background: None,
            children,
        }
    }

    fn text(id: u32) -> ResolvedNode {
        ResolvedNode::Text(TextNode {
            id: NodeId(id),
            content: String::new(),
            size: None,
            weight: None,
            color: None,
        })
    }

    fn flags_of(map: &CollapseMap, id: u32) -> EdgeFlags {
        *map.get(&NodeId(id)).expect("node should have flags")
    }

    #[test]
    fn test_stacked_boxes_share_one_border() {
        // Two thin-outlined boxes in a zero-gap, zero-padding column frame:
        // exactly the facing edges collapse
        let root = ResolvedNode::Frame(frame(
            0,
            vec![
                ResolvedNode::Box(bordered(1, vec![])),
                ResolvedNode::Box(bordered(2, vec![])),
            ],
        ));
        let map = analyze(std::slice::from_ref(&root));

        let upper = flags_of(&map, 1);
        let lower = flags_of(&map, 2);
        assert!(upper.bottom);
        assert!(lower.top);
        assert!(!upper.top && !upper.left && !upper.right);
        assert!(!lower.bottom && !lower.left && !lower.right);
        assert_eq!(flags_of(&map, 0), EdgeFlags::NONE);
    }

    #[test]
    fn test_gap_suppresses_sibling_collapse() {
        let mut shell = frame(
            0,
            vec![
                ResolvedNode::Box(bordered(1, vec![])),
                ResolvedNode::Box(bordered(2, vec![])),
            ],
        );
        shell.gap = 8.0;
        let map = analyze(&[ResolvedNode::Frame(shell)]);
        assert_eq!(flags_of(&map, 1), EdgeFlags::NONE);
        assert_eq!(flags_of(&map, 2), EdgeFlags::NONE);
    }

    #[test]
    fn test_cross_axis_collapses_for_every_child() {
        // Column parent with a border and zero padding: all three children
        // fuse left and right, not only the first and last
        let parent = bordered(
            0,
            vec![
                ResolvedNode::Box(bordered(1, vec![])),
                ResolvedNode::Box(bordered(2, vec![])),
                ResolvedNode::Box(bordered(3, vec![])),
            ],
        );
        let map = analyze(&[ResolvedNode::Box(parent)]);
        for id in [1, 2, 3] {
            let f = flags_of(&map, id);
            assert!(f.left, "child {} should collapse left", id);
            assert!(f.right, "child {} should collapse right", id);
        }
    }

    #[test]
    fn test_main_axis_first_last_exclusivity() {
        // A gap keeps siblings apart, isolating parent-edge fusion: only
        // the first child may collapse top, only the last may collapse
        // bottom, while the cross axis stays uniform
        let mut parent = bordered(
            0,
            vec![
                ResolvedNode::Box(bordered(1, vec![])),
                ResolvedNode::Box(bordered(2, vec![])),
                ResolvedNode::Box(bordered(3, vec![])),
            ],
        );
        parent.gap = 12.0;
        let map = analyze(&[ResolvedNode::Box(parent)]);
        assert!(flags_of(&map, 1).top);
        assert!(!flags_of(&map, 2).top);
        assert!(!flags_of(&map, 3).top);
        assert!(!flags_of(&map, 1).bottom);
        assert!(!flags_of(&map, 2).bottom);
        assert!(flags_of(&map, 3).bottom);
    }

    #[test]
    fn test_parent_padding_blocks_collapse() {
        let mut parent = bordered(0, vec![ResolvedNode::Box(bordered(1, vec![]))]);
        parent.padding = EdgeInsets {
            top: 4.0,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        };
        let map = analyze(&[ResolvedNode::Box(parent)]);
        let child = flags_of(&map, 1);
        assert!(!child.top);
        assert!(child.bottom && child.left && child.right);
    }

    #[test]
    fn test_row_direction_swaps_axes() {
        let mut parent = bordered(
            0,
            vec![
                ResolvedNode::Box(bordered(1, vec![])),
                ResolvedNode::Box(bordered(2, vec![])),
            ],
        );
        parent.direction = Flow::Row;
        let map = analyze(&[ResolvedNode::Box(parent)]);
        let first = flags_of(&map, 1);
        let second = flags_of(&map, 2);
        assert!(first.left, "first child fuses with the parent's left edge");
        assert!(first.right, "first child fuses with its right neighbor");
        assert!(second.left);
        assert!(second.right);
        // Cross axis in a row is top/bottom, shared by both children
        assert!(first.top && first.bottom && second.top && second.bottom);
    }

    #[test]
    fn test_unbordered_wrapper_passes_context_through() {
        // bordered parent > plain wrapper > bordered inner box: fusion
        // propagates across the layout-only wrapper
        let wrapper = {
            let mut node = BoxNode::empty(NodeId(1));
            node.children = vec![ResolvedNode::Box(bordered(2, vec![]))];
            node
        };
        let parent = bordered(0, vec![ResolvedNode::Box(wrapper)]);
        let map = analyze(&[ResolvedNode::Box(parent)]);
        assert_eq!(flags_of(&map, 1), EdgeFlags::NONE);
        let inner = flags_of(&map, 2);
        assert!(inner.top && inner.bottom && inner.left && inner.right);
    }

    #[test]
    fn test_wrapper_padding_blocks_pass_through() {
        let wrapper = {
            let mut node = BoxNode::empty(NodeId(1));
            node.padding = EdgeInsets::uniform(2.0);
            node.children = vec![ResolvedNode::Box(bordered(2, vec![]))];
            node
        };
        let parent = bordered(0, vec![ResolvedNode::Box(wrapper)]);
        let map = analyze(&[ResolvedNode::Box(parent)]);
        assert_eq!(flags_of(&map, 2), EdgeFlags::NONE);
    }

    #[test]
    fn test_sibling_collapse_through_unbordered_wrapper() {
        // The second sibling is a plain wrapper whose first child carries
        // the border; the facing edges still fuse
        let wrapped = {
            let mut node = BoxNode::empty(NodeId(2));
            node.children = vec![ResolvedNode::Box(bordered(3, vec![]))];
            node
        };
        let shell = frame(
            0,
            vec![
                ResolvedNode::Box(bordered(1, vec![])),
                ResolvedNode::Box(wrapped),
            ],
        );
        let map = analyze(&[ResolvedNode::Frame(shell)]);
        assert!(flags_of(&map, 1).bottom, "upper box fuses downward");
        assert!(flags_of(&map, 3).top, "wrapped box fuses upward");
    }

    #[test]
    fn test_unbordered_sibling_without_border_does_not_fuse() {
        let shell = frame(
            0,
            vec![
                ResolvedNode::Box(bordered(1, vec![])),
                ResolvedNode::Box(BoxNode::empty(NodeId(2))),
            ],
        );
        let map = analyze(&[ResolvedNode::Frame(shell)]);
        assert!(!flags_of(&map, 1).bottom);
    }

    #[test]
    fn test_fixed_size_parent_needs_growing_child() {
        // A parent with an explicit height is not content-sized: the last
        // child only reaches its bottom border by growing
        let mut parent = bordered(0, vec![ResolvedNode::Box(bordered(1, vec![]))]);
        parent.height = Some(400.0);
        let map = analyze(&[ResolvedNode::Box(parent.clone())]);
        assert!(!flags_of(&map, 1).bottom);
        assert!(flags_of(&map, 1).top);

        let mut growing = bordered(1, vec![]);
        growing.grow = true;
        parent.children = vec![ResolvedNode::Box(growing)];
        let map = analyze(&[ResolvedNode::Box(parent)]);
        assert!(flags_of(&map, 1).bottom);
    }

    #[test]
    fn test_leaves_have_no_flags() {
        let shell = frame(0, vec![text(1)]);
        let map = analyze(&[ResolvedNode::Frame(shell)]);
        assert!(map.get(&NodeId(1)).is_none());
        assert_eq!(map.len(), 1);
    }
}
