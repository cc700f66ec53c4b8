//! # Blockpress Editor
//!
//! Core page editing engine for Blockpress.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ catalog: block type definitions             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Ordered block sequence, versioned        │
//! │  - Apply mutations with validation          │
//! │  - Selection + edit/preview mode gating     │
//! │  - Save hand-off as an immutable snapshot   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: blocks → VNode tree               │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The document is the source of truth**: rendered trees are derived views
//! 2. **One mutation surface**: every edit funnels through [`EditSession`]
//! 3. **Atomic mutations**: an operation either fully applies or changes nothing
//! 4. **Recoverable errors**: a rejected operation never ends the session
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blockpress_editor::{BlockKind, Catalog, EditSession};
//!
//! let mut session = EditSession::new("home", Catalog::default());
//!
//! // Add a heading; it becomes the selected block
//! let block = session.add_block(BlockKind::Heading)?;
//!
//! // Edit it through the property panel binding
//! session.set_style(&block.id, "color", "#333333")?;
//!
//! // Hand the ordered block list to a persistence collaborator
//! let snapshot = session.save();
//! ```

mod block;
mod catalog;
mod document;
mod errors;
mod inline;
mod mode;
mod mutations;
mod notices;
mod panel;
mod selection;
mod session;

pub use block::{Block, StyleMap, DEFAULT_MARGIN, DEFAULT_PADDING, RECOGNIZED_STYLE_PROPERTIES};
pub use catalog::{BlockKind, BlockTypeDefinition, Catalog};
pub use document::Document;
pub use errors::EditorError;
pub use inline::{EditKey, InlineController, InlineEdit, KeyOutcome};
pub use mode::InteractionMode;
pub use mutations::{BlockPatch, Mutation, MutationError, MutationResult};
pub use notices::{Notice, NoticeSink, NullNotices, TracingNotices};
pub use panel::{PanelView, PropertyPanel, StyleField};
pub use selection::Selection;
pub use session::EditSession;
