//! End-to-end border-collapse scenarios through the public pipeline

use wireframer::{resolve_spec, EdgeFlags, NodeId, Resolution};

fn flags(result: &Resolution, id: NodeId) -> EdgeFlags {
    *result.collapse.get(&id).expect("node should have flags")
}

#[test]
fn test_two_stacked_boxes_share_one_horizontal_line() {
    let spec = r#"
- frame:
    padding: 0
    gap: 0
    children:
      - box:
          outline: thin
      - box:
          outline: thin
"#;

    let result = resolve_spec(spec, "").expect("Should resolve");
    let frame = &result.frames[0];
    let children = frame.children();

    let upper = flags(&result, children[0].id());
    let lower = flags(&result, children[1].id());

    // One shared line between the pair; all outer edges stay doubled-free
    assert!(upper.bottom);
    assert!(lower.top);
    assert!(!upper.top && !upper.left && !upper.right);
    assert!(!lower.bottom && !lower.left && !lower.right);
    assert_eq!(flags(&result, frame.id()), EdgeFlags::NONE);
}

#[test]
fn test_gap_keeps_both_borders() {
    let spec = r#"
- frame:
    padding: 0
    gap: 12
    children:
      - box:
          outline: thin
      - box:
          outline: thin
"#;

    let result = resolve_spec(spec, "").expect("Should resolve");
    let children = result.frames[0].children();
    assert_eq!(flags(&result, children[0].id()), EdgeFlags::NONE);
    assert_eq!(flags(&result, children[1].id()), EdgeFlags::NONE);
}

#[test]
fn test_cross_axis_symmetry_in_bordered_column() {
    let spec = r#"
- box:
    outline: thin
    padding: 0
    gap: 6
    children:
      - box:
          outline: thin
      - box:
          outline: thin
      - box:
          outline: thin
"#;

    let result = resolve_spec(spec, "").expect("Should resolve");
    let children = result.frames[0].children();
    assert_eq!(children.len(), 3);

    // Every child fuses left and right with the parent, not only first/last
    for child in children {
        let f = flags(&result, child.id());
        assert!(f.left && f.right, "child {:?} should fuse both cross edges", child.id());
    }

    // Main axis stays exclusive under the gap
    assert!(flags(&result, children[0].id()).top);
    assert!(!flags(&result, children[1].id()).top);
    assert!(!flags(&result, children[1].id()).bottom);
    assert!(flags(&result, children[2].id()).bottom);
}

#[test]
fn test_padding_blocks_parent_fusion() {
    let spec = r#"
- box:
    outline: thin
    padding: 8
    children:
      - box:
          outline: thin
"#;

    let result = resolve_spec(spec, "").expect("Should resolve");
    let child = &result.frames[0].children()[0];
    assert_eq!(flags(&result, child.id()), EdgeFlags::NONE);
}

#[test]
fn test_row_layout_fuses_vertical_line() {
    let spec = r#"
- frame:
    padding: 0
    gap: 0
    direction: row
    children:
      - box:
          outline: thin
      - box:
          outline: thin
"#;

    let result = resolve_spec(spec, "").expect("Should resolve");
    let children = result.frames[0].children();

    let left = flags(&result, children[0].id());
    let right = flags(&result, children[1].id());
    assert!(left.right && !left.left);
    assert!(right.left && !right.right);
    assert!(!left.top && !left.bottom && !right.top && !right.bottom);
}

#[test]
fn test_component_boxes_participate_in_collapse() {
    // Collapse analysis runs on the resolved tree, so borders that arrive
    // via component expansion fuse like hand-written ones
    let components = r#"
Row:
  default:
    - box:
        outline: thin
"#;

    let spec = r#"
- frame:
    padding: 0
    gap: 0
    children:
      - Row: {}
      - Row: {}
"#;

    let result = resolve_spec(spec, components).expect("Should resolve");
    let children = result.frames[0].children();
    assert!(flags(&result, children[0].id()).bottom);
    assert!(flags(&result, children[1].id()).top);
}

#[test]
fn test_fusion_propagates_through_plain_wrapper() {
    let spec = r#"
- box:
    outline: thin
    padding: 0
    children:
      - box:
          padding: 0
          children:
            - box:
                outline: thin
"#;

    let result = resolve_spec(spec, "").expect("Should resolve");
    let wrapper = &result.frames[0].children()[0];
    let inner = &wrapper.children()[0];

    assert_eq!(flags(&result, wrapper.id()), EdgeFlags::NONE);
    let f = flags(&result, inner.id());
    assert!(f.top && f.bottom && f.left && f.right);
}

#[test]
fn test_grow_rule_on_fixed_height_parent() {
    let spec = r#"
- box:
    outline: thin
    padding: 0
    height: 500
    children:
      - box:
          outline: thin
      - box:
          outline: thin
          grow: true
"#;

    let result = resolve_spec(spec, "").expect("Should resolve");
    let children = result.frames[0].children();

    // The fixed-height parent is not content-sized; only the growing last
    // child reaches its bottom border
    assert!(flags(&result, children[0].id()).top);
    assert!(flags(&result, children[1].id()).bottom);

    let spec_static = spec.replace("          grow: true\n", "");
    let result = resolve_spec(&spec_static, "").expect("Should resolve");
    let children = result.frames[0].children();
    assert!(!flags(&result, children[1].id()).bottom);
}
