//! # Blockpress Renderer
//!
//! Pure rendering from the block model to a virtual node tree.
//!
//! The renderer is a function of its arguments and nothing else: it
//! never mutates a block, never reaches into a session, and renders
//! the same inputs to the same tree every time. Mode and selection
//! arrive as plain values; preview output carries no editing markers
//! at all.

mod renderer;
mod vdom;

#[cfg(test)]
mod tests_render;

pub use renderer::{render_block, render_page};
pub use vdom::{VNode, VirtualPage};
