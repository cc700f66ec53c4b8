//! Session-level behavior: selection coordination, mode gating,
//! notices, and the save hand-off.

use blockpress_editor::{
    BlockKind, BlockPatch, BlockTypeDefinition, Catalog, EditSession, EditorError, Notice,
    NoticeSink,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Collects notices so tests can assert on what was surfaced
#[derive(Default)]
struct RecordingNotices {
    seen: Rc<RefCell<Vec<Notice>>>,
}

impl NoticeSink for RecordingNotices {
    fn notify(&self, notice: Notice) {
        self.seen.borrow_mut().push(notice);
    }
}

fn recorded_session() -> (EditSession, Rc<RefCell<Vec<Notice>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = RecordingNotices { seen: seen.clone() };
    let session = EditSession::new("home", Catalog::default()).with_notices(Box::new(sink));
    (session, seen)
}

#[test]
fn test_add_on_empty_document_seeds_and_selects() {
    let mut session = EditSession::new("home", Catalog::default());

    let block = session.add_block(BlockKind::Heading).unwrap();

    assert_eq!(session.document().len(), 1);
    assert_eq!(block.content, "Your Heading Here");
    assert_eq!(session.selected_id(), Some(block.id.as_str()));
}

#[test]
fn test_add_with_kind_missing_from_catalog_is_rejected() {
    // A trimmed-down catalog without forms
    let catalog = Catalog::new(vec![BlockTypeDefinition::new(
        BlockKind::Heading,
        "Heading",
        "Your Heading Here",
    )]);
    let mut session = EditSession::new("home", catalog);

    let result = session.add_block(BlockKind::Form);

    assert_eq!(
        result,
        Err(EditorError::UnknownBlockKind("form".to_string()))
    );
    assert!(session.document().is_empty());
    assert!(session.selected_id().is_none());
}

#[test]
fn test_any_delete_clears_selection() {
    let mut session = EditSession::new("home", Catalog::default());
    let first = session.add_block(BlockKind::Heading).unwrap();
    let second = session.add_block(BlockKind::Text).unwrap();

    session.select(&first.id).unwrap();

    // Deleting a block that is NOT selected still clears the selection
    session.delete_block(&second.id).unwrap();

    assert!(session.selected_id().is_none());
    assert!(session.document().contains(&first.id));
}

#[test]
fn test_failed_delete_keeps_selection() {
    let mut session = EditSession::new("home", Catalog::default());
    let block = session.add_block(BlockKind::Heading).unwrap();

    assert!(session.delete_block("ghost").is_err());

    assert_eq!(session.selected_id(), Some(block.id.as_str()));
}

#[test]
fn test_preview_clears_selection_and_never_restores_it() {
    let mut session = EditSession::new("home", Catalog::default());
    session.add_block(BlockKind::Heading).unwrap();
    assert!(session.selected_id().is_some());

    let mode = session.toggle_mode();
    assert!(mode.is_preview());
    assert!(session.selected_id().is_none());

    let mode = session.toggle_mode();
    assert!(mode.is_edit());
    assert!(session.selected_id().is_none());
}

#[test]
fn test_select_is_inert_during_preview() {
    let mut session = EditSession::new("home", Catalog::default());
    let block = session.add_block(BlockKind::Heading).unwrap();
    session.toggle_mode();

    // Not an error, just gated out
    session.select(&block.id).unwrap();

    assert!(session.selected_id().is_none());
}

#[test]
fn test_select_with_stale_id_is_rejected() {
    let mut session = EditSession::new("home", Catalog::default());
    session.add_block(BlockKind::Heading).unwrap();

    assert_eq!(
        session.select("ghost"),
        Err(EditorError::BlockNotFound("ghost".to_string()))
    );
}

#[test]
fn test_save_returns_an_isolated_snapshot() {
    let mut session = EditSession::new("home", Catalog::default());
    session.add_block(BlockKind::Heading).unwrap();
    let text = session.add_block(BlockKind::Text).unwrap();

    let snapshot = session.save();
    assert_eq!(snapshot.len(), 2);

    session.delete_block(&text.id).unwrap();
    session
        .update_block(&snapshot[0].id, BlockPatch::with_content("changed"))
        .unwrap();

    // The hand-off is untouched by edits made after it
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].content, "Your Heading Here");
}

#[test]
fn test_session_survives_rejected_operations() {
    let mut session = EditSession::new("home", Catalog::default());
    session.add_block(BlockKind::Heading).unwrap();

    assert!(session
        .update_block("ghost", BlockPatch::with_content("x"))
        .is_err());
    assert!(session.move_block(0, 5).is_err());
    assert!(session.delete_block("ghost").is_err());

    // Still fully usable
    let block = session.add_block(BlockKind::Button).unwrap();
    assert_eq!(session.document().len(), 2);
    assert_eq!(session.selected_id(), Some(block.id.as_str()));
}

#[test]
fn test_notices_for_add_remove_mode_save() {
    let (mut session, seen) = recorded_session();

    let block = session.add_block(BlockKind::Heading).unwrap();
    session.delete_block(&block.id).unwrap();
    session.toggle_mode();
    session.save();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 4);
    assert_eq!(
        seen[0],
        Notice::BlockAdded {
            label: "Heading".to_string()
        }
    );
    assert_eq!(seen[1], Notice::BlockRemoved);
    assert!(matches!(seen[2], Notice::ModeChanged { mode } if mode.is_preview()));
    assert_eq!(seen[3], Notice::PageSaved);
}

#[test]
fn test_rejected_operations_emit_no_notices() {
    let (mut session, seen) = recorded_session();

    let _ = session.delete_block("ghost");
    let _ = session.update_block("ghost", BlockPatch::with_content("x"));

    assert!(seen.borrow().is_empty());
}
