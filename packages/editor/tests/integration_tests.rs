//! Integration tests for editor crate

use blockpress_editor::{
    Block, BlockKind, Catalog, EditSession, InlineController, Mutation, PropertyPanel,
};

#[test]
fn test_full_editing_workflow() {
    let mut session = EditSession::new("landing", Catalog::default());

    // Palette → add
    let heading = session.add_block(BlockKind::Heading).unwrap();
    let button = session.add_block(BlockKind::Button).unwrap();

    // Property panel edits the selected block (the button, added last)
    PropertyPanel::set_content(&mut session, "Get started").unwrap();
    PropertyPanel::set_style(&mut session, "backgroundColor", "#3355ff").unwrap();

    // Inline edit on the heading
    session.select(&heading.id).unwrap();
    let mut inline = InlineController::new(&heading.id);
    assert!(inline.begin(&session));
    inline.set_buffer("Welcome aboard");
    inline
        .key(blockpress_editor::EditKey::Enter, &mut session)
        .unwrap();

    // Preview: panel collapses, selection gone
    session.toggle_mode();
    assert!(PropertyPanel::view(&session).is_none());

    // Save hand-off reflects all committed edits, in order
    let snapshot = session.save();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].content, "Welcome aboard");
    assert_eq!(snapshot[1].id, button.id);
    assert_eq!(snapshot[1].content, "Get started");
    assert_eq!(snapshot[1].style.get("backgroundColor"), Some("#3355ff"));
}

#[test]
fn test_template_seeded_session() {
    let blocks = vec![
        Block::new("tpl-1", BlockKind::Heading, "Launch faster"),
        Block::new("tpl-2", BlockKind::Text, "Everything you need."),
    ];

    let mut session = EditSession::with_blocks("landing", Catalog::default(), blocks).unwrap();

    assert_eq!(session.document().len(), 2);
    // Seeded documents start unselected
    assert!(session.selected_id().is_none());

    session.select("tpl-2").unwrap();
    assert_eq!(session.selected_block().unwrap().content, "Everything you need.");
}

#[test]
fn test_mutation_serialization() {
    let mutation = Mutation::MoveBlock {
        from_index: 1,
        to_index: 3,
    };

    // Serialize to JSON
    let json = serde_json::to_string(&mutation).unwrap();

    // Deserialize back
    let deserialized: Mutation = serde_json::from_str(&json).unwrap();

    assert_eq!(mutation, deserialized);
}
