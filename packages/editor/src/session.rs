//! # Edit Session
//!
//! The single owned state container for one editing session: document,
//! catalog, selection, and interaction mode live here, and the
//! operations below are the only mutation surface. Presentational
//! components (palette, canvas, property panel) hold no private state
//! of each other's — they all go through the session.

use crate::block::Block;
use crate::catalog::{BlockKind, Catalog};
use crate::document::Document;
use crate::errors::EditorError;
use crate::mode::InteractionMode;
use crate::mutations::{BlockPatch, Mutation};
use crate::notices::{Notice, NoticeSink, NullNotices};
use crate::selection::Selection;
use blockpress_common::IDGenerator;

/// One user's editing session over one page
pub struct EditSession {
    document: Document,
    catalog: Catalog,
    selection: Selection,
    mode: InteractionMode,
    ids: IDGenerator,
    notices: Box<dyn NoticeSink>,
}

impl EditSession {
    /// Create a session over an empty document
    pub fn new(page_name: &str, catalog: Catalog) -> Self {
        Self {
            document: Document::new(),
            catalog,
            selection: Selection::new(),
            mode: InteractionMode::Edit,
            ids: IDGenerator::new(page_name),
            notices: Box::new(NullNotices),
        }
    }

    /// Create a session seeded with blocks from a template collaborator
    pub fn with_blocks(
        page_name: &str,
        catalog: Catalog,
        blocks: Vec<Block>,
    ) -> Result<Self, EditorError> {
        let mut session = Self::new(page_name, catalog);
        session.document = Document::with_blocks(blocks)?;

        // Fresh ids must not collide with seeded ones
        for block in session.document.blocks() {
            session.ids.observe(&block.id);
        }

        Ok(session)
    }

    /// Swap in a notification sink (defaults to dropping notices)
    pub fn with_notices(mut self, notices: Box<dyn NoticeSink>) -> Self {
        self.notices = notices;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selection.selected_id()
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.selection
            .selected_id()
            .and_then(|id| self.document.get(id))
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// Add a new block of `kind` to the end of the page. The block is
    /// seeded from its catalog entry and becomes the selected block.
    pub fn add_block(&mut self, kind: BlockKind) -> Result<Block, EditorError> {
        let definition = self
            .catalog
            .get(kind)
            .ok_or_else(|| EditorError::UnknownBlockKind(kind.to_string()))?
            .clone();

        let block = Block::from_definition(self.ids.new_id(), &definition);
        self.document.apply(Mutation::InsertBlock {
            block: block.clone(),
        })?;
        self.selection.select(&block.id);

        tracing::debug!(id = %block.id, kind = %kind, "block added");
        self.notices.notify(Notice::BlockAdded {
            label: definition.label,
        });

        Ok(block)
    }

    /// Partially update a block. A stale id is reported, not fatal:
    /// the caller may hold a reference to a block another control has
    /// already deleted.
    pub fn update_block(&mut self, id: &str, patch: BlockPatch) -> Result<(), EditorError> {
        self.document
            .apply(Mutation::UpdateBlock {
                block_id: id.to_string(),
                patch,
            })
            .map_err(|e| {
                tracing::warn!(id, %e, "update rejected");
                e
            })?;
        Ok(())
    }

    /// Set one style property, retaining all others
    pub fn set_style(&mut self, id: &str, property: &str, value: &str) -> Result<(), EditorError> {
        self.document.apply(Mutation::SetStyle {
            block_id: id.to_string(),
            property: property.to_string(),
            value: value.to_string(),
        })?;
        Ok(())
    }

    /// Delete a block and clear the selection.
    ///
    /// The clear is unconditional: deleting any block returns the
    /// editor to an unselected state, whether or not that block was
    /// the selected one. Keeping this a single coordinating operation
    /// means no other component has to observe deletes.
    pub fn delete_block(&mut self, id: &str) -> Result<(), EditorError> {
        self.document.apply(Mutation::RemoveBlock {
            block_id: id.to_string(),
        })?;
        self.selection.clear();

        tracing::debug!(id, "block removed");
        self.notices.notify(Notice::BlockRemoved);

        Ok(())
    }

    /// Reorder: splice the block at `from_index` out and reinsert it
    /// at `to_index`. Rejections leave the order untouched.
    pub fn move_block(&mut self, from_index: usize, to_index: usize) -> Result<(), EditorError> {
        self.document.apply(Mutation::MoveBlock {
            from_index,
            to_index,
        })?;
        Ok(())
    }

    /// Select a block. Inert during preview; selecting a missing block
    /// is rejected.
    pub fn select(&mut self, id: &str) -> Result<(), EditorError> {
        if self.mode.is_preview() {
            return Ok(());
        }
        if !self.document.contains(id) {
            return Err(EditorError::BlockNotFound(id.to_string()));
        }
        self.selection.select(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Flip between edit and preview. Entering preview clears the
    /// selection; returning to edit does not restore it.
    pub fn toggle_mode(&mut self) -> InteractionMode {
        self.mode = self.mode.toggle();
        if self.mode.is_preview() {
            self.selection.clear();
        }

        tracing::debug!(mode = %self.mode, "mode toggled");
        self.notices.notify(Notice::ModeChanged { mode: self.mode });

        self.mode
    }

    /// Hand the current ordered block sequence to a persistence or
    /// publish collaborator. The collaborator receives an owned deep
    /// copy; edits made after this call cannot reach it.
    pub fn save(&self) -> Vec<Block> {
        let snapshot = self.document.snapshot();

        tracing::debug!(blocks = snapshot.len(), "page saved");
        self.notices.notify(Notice::PageSaved);

        snapshot
    }
}
