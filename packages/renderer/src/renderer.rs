//! Block → VNode rendering.
//!
//! `(block, mode, selected) → VNode`, with rendering order = sequence
//! order at the page level. Edit-mode output carries the block id and
//! a selected marker so a canvas can wire up interaction; preview
//! output is the final page markup with interactive affordances
//! visible but disabled.

use crate::vdom::{VNode, VirtualPage};
use blockpress_editor::{Block, BlockKind, InteractionMode, DEFAULT_MARGIN, DEFAULT_PADDING};

/// Render one block
pub fn render_block(block: &Block, mode: InteractionMode, selected: bool) -> VNode {
    let node = match block.kind {
        BlockKind::Heading => VNode::element("h2")
            .with_attr("class", "block-heading")
            .with_child(VNode::text(&block.content)),

        BlockKind::Text => VNode::element("p")
            .with_attr("class", "block-text")
            .with_child(VNode::text(&block.content)),

        BlockKind::Button => {
            let button = VNode::element("button")
                .with_attr("class", "block-button")
                .with_child(VNode::text(&block.content));
            disable_in_preview(button, mode)
        }

        BlockKind::Image => VNode::element("div")
            .with_attr("class", "block-image-placeholder")
            .with_child(
                VNode::element("p").with_child(VNode::text(&block.content)),
            ),

        BlockKind::Form => render_form(block, mode),
    };

    let node = apply_block_styles(node, block);

    match mode {
        InteractionMode::Preview => node,
        InteractionMode::Edit => {
            let node = node.with_attr("data-block-id", &block.id);
            if selected {
                node.with_attr("data-selected", "true")
            } else {
                node
            }
        }
    }
}

/// Render a whole page in sequence order
pub fn render_page(
    blocks: &[Block],
    mode: InteractionMode,
    selected_id: Option<&str>,
) -> VirtualPage {
    VirtualPage {
        nodes: blocks
            .iter()
            .map(|block| render_block(block, mode, selected_id == Some(block.id.as_str())))
            .collect(),
    }
}

fn render_form(block: &Block, mode: InteractionMode) -> VNode {
    let name = disable_in_preview(
        VNode::element("input")
            .with_attr("type", "text")
            .with_attr("placeholder", "Name"),
        mode,
    );
    let email = disable_in_preview(
        VNode::element("input")
            .with_attr("type", "email")
            .with_attr("placeholder", "Email"),
        mode,
    );
    let message = disable_in_preview(
        VNode::element("textarea").with_attr("placeholder", "Message"),
        mode,
    );
    let submit = disable_in_preview(
        VNode::element("button").with_child(VNode::text("Submit")),
        mode,
    );

    VNode::element("div")
        .with_attr("class", "block-form")
        .with_child(
            VNode::element("h3").with_child(VNode::text(&block.content)),
        )
        .with_children(vec![name, email, message, submit])
}

/// Interactive controls stay visible in preview but take no input
fn disable_in_preview(node: VNode, mode: InteractionMode) -> VNode {
    if mode.is_preview() {
        node.with_attr("disabled", "disabled")
    } else {
        node
    }
}

fn apply_block_styles(mut node: VNode, block: &Block) -> VNode {
    // Spacing falls back to the creation defaults when unset
    node = node.with_style(
        "padding",
        block.style.get("padding").unwrap_or(DEFAULT_PADDING),
    );
    node = node.with_style(
        "margin",
        block.style.get("margin").unwrap_or(DEFAULT_MARGIN),
    );

    for (property, value) in block.style.iter() {
        node = node.with_style(property.clone(), value.clone());
    }

    node
}
