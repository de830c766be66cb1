use laserkit_editor::model::{EntityKind, PathEntity, Point};
use laserkit_editor::{Alignment, DistributeAxis, EditCommand, EditorState, EntityId, SameSizeMode};

fn boxed(state: &mut EditorState, x: f64, y: f64, w: f64, h: f64) -> EntityId {
    state
        .add_entity(EntityKind::Path(PathEntity::new(vec![
            Point::new(x, y),
            Point::new(x + w, y),
            Point::new(x + w, y + h),
            Point::new(x, y + h),
        ])))
        .unwrap()
}

fn left(state: &EditorState, id: EntityId) -> f64 {
    state.scene.entity(id).unwrap().bounds().min_x
}

#[test]
fn test_align_left_records_only_moved() {
    let mut state = EditorState::new();
    let a = boxed(&mut state, 0.0, 0.0, 10.0, 10.0);
    let b = boxed(&mut state, 5.0, 20.0, 10.0, 10.0);
    state.select_all();

    assert!(state.align_selected(Alignment::Left).unwrap());
    assert_eq!(left(&state, a), 0.0);
    assert_eq!(left(&state, b), 0.0);

    let entry = state.history.entries().last().unwrap();
    match &entry.command {
        EditCommand::Align(changes) => {
            assert_eq!(changes.ids(), vec![b]);
            assert_eq!(changes.label, "Align Left");
        }
        other => panic!("unexpected {:?}", other),
    }

    // Second run finds everything aligned.
    assert!(!state.align_selected(Alignment::Left).unwrap());
}

#[test]
fn test_distribute_horizontal() {
    let mut state = EditorState::new();
    let a = boxed(&mut state, 0.0, 0.0, 10.0, 10.0);
    let b = boxed(&mut state, 15.0, 0.0, 10.0, 10.0);
    let c = boxed(&mut state, 50.0, 0.0, 10.0, 10.0);
    state.select_all();

    assert!(state.distribute_selected(DistributeAxis::Horizontal).unwrap());
    assert_eq!(left(&state, a), 0.0);
    assert_eq!(left(&state, b), 25.0);
    assert_eq!(left(&state, c), 50.0);

    state.undo().unwrap();
    assert_eq!(left(&state, b), 15.0);
}

#[test]
fn test_distribute_needs_three() {
    let mut state = EditorState::new();
    boxed(&mut state, 0.0, 0.0, 10.0, 10.0);
    boxed(&mut state, 40.0, 0.0, 10.0, 10.0);
    state.select_all();
    assert!(!state.distribute_selected(DistributeAxis::Horizontal).unwrap());
}

#[test]
fn test_same_size_width() {
    let mut state = EditorState::new();
    let a = boxed(&mut state, 0.0, 0.0, 10.0, 10.0);
    boxed(&mut state, 20.0, 0.0, 30.0, 5.0);
    state.select_all();

    assert!(state.same_size_selected(SameSizeMode::Width).unwrap());
    let ba = state.scene.entity(a).unwrap().bounds();
    assert!((ba.width() - 30.0).abs() < 1e-9);
    assert!((ba.height() - 10.0).abs() < 1e-9);
    assert_eq!(state.history.undo_label(), Some("Same Size"));
}

#[test]
fn test_align_to_page_uses_work_area() {
    let mut state = EditorState::new();
    let a = boxed(&mut state, 40.0, 40.0, 10.0, 10.0);
    state.select_all();

    assert!(state.align_selected_to_page(Alignment::Left).unwrap());
    let area = state.config().work_area;
    assert_eq!(left(&state, a), area.x);
    assert_eq!(state.history.undo_label(), Some("Align Left to Page"));
}
