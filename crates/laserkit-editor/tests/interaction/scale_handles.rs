use super::{editor_with_square, points};
use laserkit_editor::model::Point;
use laserkit_editor::{EditCommand, Handle, ScaleController};

#[test]
fn test_bottom_right_handle_doubles_square() {
    let (state, id) = editor_with_square(0.0, 0.0, 10.0);
    let before = points(&state, id);
    let mut scale = ScaleController::new(state.clone());

    assert!(scale.press(Handle::BottomRight, Point::new(10.0, 10.0)));
    scale.drag(Point::new(15.0, 15.0), false).unwrap();
    assert!(scale.release(Point::new(20.0, 20.0), false).unwrap());

    assert_eq!(
        points(&state, id),
        vec![
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(20.0, 20.0),
            Point::new(0.0, 20.0),
        ]
    );
    assert!(matches!(
        state.borrow().history.entries().last().map(|e| &e.command),
        Some(EditCommand::Scale(_))
    ));

    state.borrow_mut().undo().unwrap();
    assert_eq!(points(&state, id), before);
}

#[test]
fn test_handle_clamps_to_min_extent() {
    let (state, id) = editor_with_square(0.0, 0.0, 10.0);
    let mut scale = ScaleController::new(state.clone());

    scale.press(Handle::Right, Point::new(10.0, 5.0));
    scale.release(Point::new(-50.0, 5.0), false).unwrap();

    let b = state.borrow().scene.entity(id).unwrap().bounds();
    let min = state.borrow().config().interaction.min_extent;
    assert!((b.width() - min).abs() < 1e-9);
    assert_eq!(b.min_x, 0.0);
    assert_eq!(b.height(), 10.0);
}

#[test]
fn test_press_at_finds_grip() {
    let (state, _) = editor_with_square(0.0, 0.0, 10.0);
    let mut scale = ScaleController::new(state.clone());
    assert_eq!(scale.handles().len(), 8);
    assert!(!scale.press_at(Point::new(5.0, 5.0)));
    assert!(scale.press_at(Point::new(0.5, 0.5)));
    assert!(!scale.release(Point::new(0.5, 0.5), false).unwrap());
    assert_eq!(state.borrow().history.len(), 1);
}

#[test]
fn test_still_press_on_small_selection_records_nothing() {
    let (state, id) = editor_with_square(0.0, 0.0, 0.5);
    let before = points(&state, id);
    let mut scale = ScaleController::new(state.clone());

    assert!(scale.press(Handle::Right, Point::new(0.5, 0.25)));
    assert!(!scale.release(Point::new(0.5, 0.25), false).unwrap());

    assert_eq!(points(&state, id), before);
    assert_eq!(state.borrow().history.len(), 1);
}
