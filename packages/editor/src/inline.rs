//! # Inline Edit Sub-State
//!
//! Per-block, presentation-only editing state. A rendered block in
//! edit mode may open an inline editor seeded with its current
//! content; the buffer lives here, beside the block's presentation,
//! never inside the document. Cancelling discards the buffer without
//! touching the document at all.

use crate::errors::EditorError;
use crate::mutations::BlockPatch;
use crate::session::EditSession;

/// The sub-state itself: viewing, or editing with a local buffer
#[derive(Debug, Clone, PartialEq)]
pub enum InlineEdit {
    Viewing,
    Editing { buffer: String },
}

/// Key events the inline editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Enter,
    CtrlEnter,
    Escape,
}

/// What a key or blur event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Committed,
    Cancelled,
    Ignored,
}

/// Controller for one rendered block's inline editor
#[derive(Debug, Clone, PartialEq)]
pub struct InlineController {
    block_id: String,
    state: InlineEdit,
}

impl InlineController {
    pub fn new(block_id: impl Into<String>) -> Self {
        Self {
            block_id: block_id.into(),
            state: InlineEdit::Viewing,
        }
    }

    pub fn block_id(&self) -> &str {
        &self.block_id
    }

    pub fn state(&self) -> &InlineEdit {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, InlineEdit::Editing { .. })
    }

    pub fn buffer(&self) -> Option<&str> {
        match &self.state {
            InlineEdit::Editing { buffer } => Some(buffer),
            InlineEdit::Viewing => None,
        }
    }

    /// Enter inline edit, seeding the buffer with the block's current
    /// content. Not enterable during preview, nor for a block that no
    /// longer exists.
    pub fn begin(&mut self, session: &EditSession) -> bool {
        if session.mode().is_preview() {
            return false;
        }
        let Some(block) = session.document().get(&self.block_id) else {
            return false;
        };

        self.state = InlineEdit::Editing {
            buffer: block.content.clone(),
        };
        true
    }

    /// Replace the local buffer. Ignored while viewing.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        if let InlineEdit::Editing { buffer } = &mut self.state {
            *buffer = text.into();
        }
    }

    /// Feed a key event. Enter commits single-line kinds; multi-line
    /// text blocks commit on Ctrl+Enter and keep plain Enter in the
    /// buffer; Escape always cancels.
    pub fn key(
        &mut self,
        key: EditKey,
        session: &mut EditSession,
    ) -> Result<KeyOutcome, EditorError> {
        if !self.is_editing() {
            return Ok(KeyOutcome::Ignored);
        }

        match key {
            EditKey::Escape => {
                self.state = InlineEdit::Viewing;
                Ok(KeyOutcome::Cancelled)
            }
            EditKey::Enter => {
                let multiline = session
                    .document()
                    .get(&self.block_id)
                    .map(|b| b.kind.is_multiline())
                    .unwrap_or(false);
                if multiline {
                    Ok(KeyOutcome::Ignored)
                } else {
                    self.commit(session)
                }
            }
            EditKey::CtrlEnter => self.commit(session),
        }
    }

    /// Loss of focus commits the buffer
    pub fn blur(&mut self, session: &mut EditSession) -> Result<KeyOutcome, EditorError> {
        if !self.is_editing() {
            return Ok(KeyOutcome::Ignored);
        }
        self.commit(session)
    }

    fn commit(&mut self, session: &mut EditSession) -> Result<KeyOutcome, EditorError> {
        let buffer = match std::mem::replace(&mut self.state, InlineEdit::Viewing) {
            InlineEdit::Editing { buffer } => buffer,
            InlineEdit::Viewing => return Ok(KeyOutcome::Ignored),
        };

        session.update_block(&self.block_id, BlockPatch::with_content(buffer))?;
        Ok(KeyOutcome::Committed)
    }
}
