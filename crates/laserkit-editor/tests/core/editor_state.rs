use laserkit_editor::model::{Color, MirrorAxis, Point};
use laserkit_editor::{EditorState, GeometryEdit};
use laserkit_settings::EditorConfig;

fn triangle() -> Vec<Point> {
    vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 8.0)]
}

#[test]
fn test_import_records_one_add_per_path() {
    let mut state = EditorState::new();
    let ids = state.import_paths(vec![triangle(), triangle(), triangle()]).unwrap();
    assert_eq!(ids.len(), 3);
    assert_eq!(state.history.len(), 3);
    assert_eq!(state.history.listing().0, vec!["Add", "Add", "Add"]);

    state.undo().unwrap();
    assert_eq!(state.scene.len(), 2);
}

#[test]
fn test_delete_and_undo() {
    let mut state = EditorState::new();
    state.import_paths(vec![triangle(), triangle()]).unwrap();
    state.select_all();
    assert!(state.delete_selected().unwrap());
    assert!(state.scene.is_empty());
    state.undo().unwrap();
    assert_eq!(state.scene.len(), 2);
}

#[test]
fn test_locked_entities_are_left_alone() {
    let mut state = EditorState::new();
    let ids = state.import_paths(vec![triangle(), triangle()]).unwrap();
    state.scene.entity_mut(ids[0]).unwrap().locked = true;
    state.select_all();
    assert_eq!(state.selected_count(), 1);

    state.move_selected(5.0, 0.0).unwrap();
    assert_eq!(state.scene.entity(ids[0]).unwrap().bounds().min_x, 0.0);
    assert_eq!(state.scene.entity(ids[1]).unwrap().bounds().min_x, 5.0);
}

#[test]
fn test_nudge_uses_configured_step() {
    let mut config = EditorConfig::default();
    config.interaction.nudge_step = 0.5;
    let mut state = EditorState::with_config(config);
    let ids = state.import_paths(vec![triangle()]).unwrap();
    state.select_all();

    assert!(state.nudge_selected(4.0, 0.0).unwrap());
    assert_eq!(state.scene.entity(ids[0]).unwrap().bounds().min_x, 2.0);
    assert_eq!(state.history.undo_label(), Some("Nudge"));
}

#[test]
fn test_mirror_twice_restores() {
    let mut state = EditorState::new();
    let ids = state.import_paths(vec![triangle()]).unwrap();
    state.select_all();
    let before = state.scene.entity(ids[0]).unwrap().state();
    state.mirror_selected(MirrorAxis::Vertical).unwrap();
    assert_ne!(state.scene.entity(ids[0]).unwrap().state(), before);
    state.mirror_selected(MirrorAxis::Vertical).unwrap();
    assert_eq!(state.scene.entity(ids[0]).unwrap().state(), before);
}

#[test]
fn test_mirror_copy_uses_configured_gap() {
    let mut state = EditorState::new();
    state.import_paths(vec![triangle()]).unwrap();
    state.select_all();
    assert!(state.mirror_copy_selected(MirrorAxis::Horizontal).unwrap());
    assert_eq!(state.scene.len(), 2);
    assert_eq!(state.history.undo_label(), Some("Mirror Copy"));
}

#[test]
fn test_rotate_rejects_non_finite() {
    let mut state = EditorState::new();
    state.import_paths(vec![triangle()]).unwrap();
    state.select_all();
    assert!(state.rotate_selected_to(f64::NAN).is_err());
    assert!(state.rotate_selected_by(90.0).unwrap());
    assert_eq!(state.history.len(), 2);
}

#[test]
fn test_change_color() {
    let mut state = EditorState::new();
    let ids = state.import_paths(vec![triangle()]).unwrap();
    state.select_all();
    let color = Color::layer(3);
    assert!(state.change_selected_color(color).unwrap());
    assert!(!state.change_selected_color(color).unwrap());
    assert_eq!(state.scene.entity(ids[0]).unwrap().color(), Some(color));
}

#[test]
fn test_geometry_edit_clamps_size() {
    let mut state = EditorState::new();
    let ids = state.import_paths(vec![triangle()]).unwrap();
    state.select_all();
    let edit = GeometryEdit {
        x: Some(100.0),
        width: Some(0.0),
        ..Default::default()
    };
    assert!(state.set_selection_geometry(edit).unwrap());
    let b = state.scene.entity(ids[0]).unwrap().bounds();
    assert_eq!(b.min_x, 100.0);
    assert!((b.width() - state.config().interaction.min_extent).abs() < 1e-9);
}

#[test]
fn test_fiducial_lifecycle() {
    let mut state = EditorState::new();
    state.place_fiducial(Point::new(3.0, 4.0), 2.0).unwrap();
    assert!(state.set_fiducial_size(5.0).unwrap());
    assert!(state.remove_fiducial().unwrap());
    assert!(!state.remove_fiducial().unwrap());
    state.undo().unwrap();
    assert_eq!(state.scene.fiducial().unwrap().size, 5.0);
}

#[test]
fn test_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("editor.json");
    let mut config = EditorConfig::default();
    config.history.capacity = 2;
    config.save_to_file(&path).unwrap();

    let loaded = EditorConfig::load_from_file(&path).unwrap();
    let mut state = EditorState::with_config(loaded);
    state.import_paths(vec![triangle(), triangle(), triangle()]).unwrap();
    assert_eq!(state.history.len(), 2);
}
