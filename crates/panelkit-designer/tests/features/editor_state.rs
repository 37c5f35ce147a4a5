use panelkit_core::{Error, LayoutError};
use panelkit_designer::{EditorSettings, EditorState, LayoutTemplate, Panel, PanelImage, Point};

fn editor_with(template: LayoutTemplate) -> (EditorState, String) {
    let mut editor = EditorState::default();
    let page_id = editor.add_page(template).unwrap();
    (editor, page_id)
}

fn panels_of(editor: &EditorState, page_id: &str) -> Vec<Panel> {
    editor.book().page(page_id).unwrap().panels.clone()
}

#[test]
fn test_new_editor_is_clean() {
    let editor = EditorState::default();
    assert!(editor.book().is_empty());
    assert!(!editor.is_modified);
    assert!(!editor.can_undo());
    assert_eq!(editor.document_name, "Untitled");
}

#[test]
fn test_rotate_undo_redo() {
    let (mut editor, page_id) = editor_with(LayoutTemplate::TwoRows);
    let original = panels_of(&editor, &page_id);

    editor.rotate_page(&page_id).unwrap();
    let rotated = panels_of(&editor, &page_id);
    assert_ne!(rotated, original);
    assert_eq!(editor.undo_name(), Some("Rotate Page"));

    assert!(editor.undo().unwrap());
    assert_eq!(panels_of(&editor, &page_id), original);
    assert_eq!(editor.redo_name(), Some("Rotate Page"));

    assert!(editor.redo().unwrap());
    assert_eq!(panels_of(&editor, &page_id), rotated);
}

#[test]
fn test_symmetric_mirror_records_nothing() {
    let (mut editor, page_id) = editor_with(LayoutTemplate::FullPage);
    editor.mirror_page(&page_id).unwrap();
    assert_eq!(editor.undo_name(), Some("Add Page"));
}

#[test]
fn test_mirror_swaps_columns() {
    let (mut editor, page_id) = editor_with(LayoutTemplate::TwoColumns);
    let before = panels_of(&editor, &page_id);
    editor.mirror_page(&page_id).unwrap();
    let after = panels_of(&editor, &page_id);
    assert_eq!(after[0].drop_zone(), before[1].drop_zone());
    assert_eq!(editor.undo_name(), Some("Mirror Page"));
}

#[test]
fn test_drag_gap_is_clamped_to_min_panel_size() {
    let (mut editor, page_id) = editor_with(LayoutTemplate::TwoColumns);
    let gap = editor.resize_gaps(&page_id).unwrap().remove(0);

    // Right column is 375 wide; it may shrink to 40.
    let applied = editor.drag_gap(&page_id, &gap, 1000.0).unwrap();
    assert_eq!(applied, 335.0);

    let panels = panels_of(&editor, &page_id);
    assert_eq!(panels[1].drop_zone().width, 40.0);
    assert_eq!(panels[0].drop_zone().right(), 730.0);
}

#[test]
fn test_zero_drag_records_nothing() {
    let (mut editor, page_id) = editor_with(LayoutTemplate::TwoRows);
    let gap = editor.resize_gaps(&page_id).unwrap().remove(0);
    editor.drag_gap(&page_id, &gap, 0.0).unwrap();
    assert_eq!(editor.undo_name(), Some("Add Page"));
}

#[test]
fn test_assign_image_at_point() {
    let (mut editor, page_id) = editor_with(LayoutTemplate::Grid2x2);
    let first = panels_of(&editor, &page_id)[0].id.clone();

    let hit = editor
        .assign_image_at(&page_id, &Point::new(100.0, 100.0), PanelImage::new("a.png"))
        .unwrap();
    assert_eq!(hit, first);

    let previous = editor
        .assign_image(&page_id, &first, PanelImage::new("b.png"))
        .unwrap();
    assert_eq!(previous, Some(PanelImage::new("a.png")));

    let cleared = editor.clear_image(&page_id, &first).unwrap();
    assert_eq!(cleared, Some(PanelImage::new("b.png")));
    assert!(panels_of(&editor, &page_id)[0].image.is_none());

    editor.undo().unwrap();
    assert_eq!(
        panels_of(&editor, &page_id)[0].image,
        Some(PanelImage::new("b.png"))
    );
}

#[test]
fn test_image_dropped_in_gutter_is_rejected() {
    let (mut editor, page_id) = editor_with(LayoutTemplate::Grid2x2);
    let err = editor
        .assign_image_at(&page_id, &Point::new(400.0, 100.0), PanelImage::new("a.png"))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Layout(LayoutError::NoPanelAtPoint { .. })
    ));
    assert_eq!(editor.undo_name(), Some("Add Page"));
}

#[test]
fn test_assign_image_to_unknown_panel() {
    let (mut editor, page_id) = editor_with(LayoutTemplate::FullPage);
    let err = editor
        .assign_image(&page_id, "nope", PanelImage::new("a.png"))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_remove_and_move_pages_undo() {
    let mut editor = EditorState::default();
    let first = editor.add_page(LayoutTemplate::FullPage).unwrap();
    let second = editor.add_page(LayoutTemplate::TwoRows).unwrap();

    editor.move_page(1, 0).unwrap();
    assert_eq!(editor.book().page(&second).unwrap().number, 1);

    editor.remove_page(&first).unwrap();
    assert_eq!(editor.book().len(), 1);

    editor.undo().unwrap();
    editor.undo().unwrap();
    assert_eq!(editor.book().page(&first).unwrap().number, 1);
    assert_eq!(editor.book().page(&second).unwrap().number, 2);
}

#[test]
fn test_failed_structural_edit_leaves_history_alone() {
    let (mut editor, _) = editor_with(LayoutTemplate::FullPage);
    assert!(editor.move_page(0, 9).is_err());
    assert!(editor.remove_page("missing").is_err());
    assert_eq!(editor.book().len(), 1);
    assert_eq!(editor.undo_name(), Some("Add Page"));
}

#[test]
fn test_apply_template_replaces_panels() {
    let (mut editor, page_id) = editor_with(LayoutTemplate::FullPage);
    editor
        .apply_template(&page_id, LayoutTemplate::Grid2x3)
        .unwrap();
    assert_eq!(panels_of(&editor, &page_id).len(), 6);
    assert!(editor
        .apply_template("missing", LayoutTemplate::Grid2x3)
        .unwrap_err()
        .is_not_found());
}

#[test]
fn test_undo_depth_is_bounded() {
    let mut editor = EditorState::new(EditorSettings {
        max_undo_depth: 3,
        ..EditorSettings::default()
    });
    for _ in 0..5 {
        editor.add_default_page().unwrap();
    }

    let mut undone = 0;
    while editor.undo().unwrap() {
        undone += 1;
    }
    assert_eq!(undone, 3);
    assert_eq!(editor.book().len(), 2);
}

#[test]
fn test_new_edit_clears_redo() {
    let (mut editor, page_id) = editor_with(LayoutTemplate::TwoRows);
    editor.rotate_page(&page_id).unwrap();
    editor.undo().unwrap();
    assert!(editor.can_redo());

    editor
        .apply_template(&page_id, LayoutTemplate::Grid2x2)
        .unwrap();
    assert!(!editor.can_redo());
    assert!(!editor.redo().unwrap());
}

#[test]
fn test_panel_at_on_page() {
    let (editor, page_id) = editor_with(LayoutTemplate::TwoRows);
    let hit = editor
        .panel_at(&page_id, &Point::new(400.0, 1000.0))
        .unwrap()
        .unwrap();
    assert_eq!(hit.id, panels_of(&editor, &page_id)[1].id);
    assert!(editor
        .panel_at(&page_id, &Point::new(5.0, 5.0))
        .unwrap()
        .is_none());
}
