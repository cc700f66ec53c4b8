//! # Property Panel Binding
//!
//! Data binding between the selection and the block being edited. The
//! panel renders the selected block's content and one field per
//! recognized style property; every edit funnels straight back into
//! the session. With no selection the panel collapses ([`view`]
//! returns `None`).
//!
//! [`view`]: PropertyPanel::view

use crate::block::RECOGNIZED_STYLE_PROPERTIES;
use crate::catalog::BlockKind;
use crate::errors::EditorError;
use crate::mutations::BlockPatch;
use crate::session::EditSession;

/// One recognized style property and its current value
#[derive(Debug, Clone, PartialEq)]
pub struct StyleField {
    pub property: &'static str,
    pub value: Option<String>,
}

/// Snapshot of the panel contents for the selected block
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub block_id: String,
    pub kind: BlockKind,
    pub content: String,
    pub styles: Vec<StyleField>,
}

/// Stateless binding helpers; all state lives in the session
pub struct PropertyPanel;

impl PropertyPanel {
    /// Panel contents, or `None` (collapsed) when nothing is selected
    pub fn view(session: &EditSession) -> Option<PanelView> {
        let block = session.selected_block()?;

        let styles = RECOGNIZED_STYLE_PROPERTIES
            .iter()
            .map(|&property| StyleField {
                property,
                value: block.style.get(property).map(str::to_string),
            })
            .collect();

        Some(PanelView {
            block_id: block.id.clone(),
            kind: block.kind,
            content: block.content.clone(),
            styles,
        })
    }

    /// Content field edit: applied immediately, not deferred
    pub fn set_content(session: &mut EditSession, value: &str) -> Result<(), EditorError> {
        let id = Self::selected(session)?;
        session.update_block(&id, BlockPatch::with_content(value))
    }

    /// Style field edit: single-key merge, all other properties kept
    pub fn set_style(
        session: &mut EditSession,
        property: &str,
        value: &str,
    ) -> Result<(), EditorError> {
        let id = Self::selected(session)?;
        session.set_style(&id, property, value)
    }

    /// The panel's delete affordance
    pub fn delete(session: &mut EditSession) -> Result<(), EditorError> {
        let id = Self::selected(session)?;
        session.delete_block(&id)
    }

    fn selected(session: &EditSession) -> Result<String, EditorError> {
        session
            .selected_id()
            .map(str::to_string)
            .ok_or(EditorError::NothingSelected)
    }
}
