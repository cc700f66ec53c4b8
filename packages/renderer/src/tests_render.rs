use crate::{render_block, render_page, VNode};
use blockpress_editor::{Block, BlockKind, InteractionMode, StyleMap};

fn block(kind: BlockKind, content: &str) -> Block {
    Block::new("b-1", kind, content)
}

fn tag_of(node: &VNode) -> &str {
    match node {
        VNode::Element { tag, .. } => tag,
        VNode::Text { .. } => panic!("expected element"),
    }
}

fn children_of(node: &VNode) -> &[VNode] {
    match node {
        VNode::Element { children, .. } => children,
        VNode::Text { .. } => panic!("expected element"),
    }
}

#[test]
fn test_heading_renders_as_h2_with_content() {
    let node = render_block(
        &block(BlockKind::Heading, "Welcome"),
        InteractionMode::Preview,
        false,
    );

    assert_eq!(tag_of(&node), "h2");
    assert_eq!(node.attr("class"), Some("block-heading"));
    assert_eq!(children_of(&node)[0], VNode::text("Welcome"));
}

#[test]
fn test_spacing_defaults_applied_when_unset() {
    let node = render_block(
        &block(BlockKind::Text, "body"),
        InteractionMode::Preview,
        false,
    );

    assert_eq!(node.style("padding"), Some("1rem"));
    assert_eq!(node.style("margin"), Some("0.5rem"));
}

#[test]
fn test_block_styles_override_defaults_and_pass_through() {
    let mut b = block(BlockKind::Text, "body");
    b.style = [("padding", "2rem"), ("letterSpacing", "0.1em")]
        .into_iter()
        .collect::<StyleMap>();

    let node = render_block(&b, InteractionMode::Preview, false);

    assert_eq!(node.style("padding"), Some("2rem"));
    assert_eq!(node.style("margin"), Some("0.5rem"));
    // Unrecognized properties ride along
    assert_eq!(node.style("letterSpacing"), Some("0.1em"));
}

#[test]
fn test_edit_mode_carries_id_and_selection_marker() {
    let b = block(BlockKind::Button, "Click me");

    let unselected = render_block(&b, InteractionMode::Edit, false);
    assert_eq!(unselected.attr("data-block-id"), Some("b-1"));
    assert_eq!(unselected.attr("data-selected"), None);

    let selected = render_block(&b, InteractionMode::Edit, true);
    assert_eq!(selected.attr("data-selected"), Some("true"));
}

#[test]
fn test_preview_output_carries_no_editing_markers() {
    let node = render_block(&block(BlockKind::Button, "Click me"), InteractionMode::Preview, true);

    assert_eq!(node.attr("data-block-id"), None);
    assert_eq!(node.attr("data-selected"), None);
}

#[test]
fn test_form_controls_disabled_only_in_preview() {
    let b = block(BlockKind::Form, "Contact Form");

    let preview = render_block(&b, InteractionMode::Preview, false);
    let disabled = children_of(&preview)
        .iter()
        .skip(1) // h3 title
        .filter(|c| c.attr("disabled").is_some())
        .count();
    assert_eq!(disabled, 4); // name, email, message, submit

    let edit = render_block(&b, InteractionMode::Edit, false);
    assert!(children_of(&edit).iter().all(|c| c.attr("disabled").is_none()));
}

#[test]
fn test_page_renders_in_sequence_order() {
    let blocks = vec![
        Block::new("a", BlockKind::Heading, "Title"),
        Block::new("b", BlockKind::Text, "Body"),
        Block::new("c", BlockKind::Button, "Go"),
    ];

    let page = render_page(&blocks, InteractionMode::Edit, Some("b"));

    let tags: Vec<&str> = page.nodes.iter().map(tag_of).collect();
    assert_eq!(tags, vec!["h2", "p", "button"]);

    assert_eq!(page.nodes[1].attr("data-selected"), Some("true"));
    assert_eq!(page.nodes[0].attr("data-selected"), None);
}

#[test]
fn test_vnode_serialization() {
    let node = render_block(
        &block(BlockKind::Heading, "Welcome"),
        InteractionMode::Preview,
        false,
    );

    let json = serde_json::to_string(&node).unwrap();
    let back: VNode = serde_json::from_str(&json).unwrap();

    assert_eq!(node, back);
}

#[test]
fn test_rendering_is_pure() {
    let b = block(BlockKind::Image, "Image placeholder");

    let first = render_block(&b, InteractionMode::Edit, true);
    let second = render_block(&b, InteractionMode::Edit, true);

    assert_eq!(first, second);
}
