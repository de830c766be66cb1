use super::{editor_with_square, points};
use laserkit_editor::model::Point;
use laserkit_editor::DragMoveController;

#[test]
fn test_drag_records_one_move() {
    let (state, id) = editor_with_square(0.0, 0.0, 10.0);
    let mut drag = DragMoveController::new(state.clone());

    assert!(drag.press(Point::new(5.0, 5.0)));
    drag.drag(Point::new(6.0, 5.0)).unwrap();
    drag.drag(Point::new(8.0, 9.0)).unwrap();
    assert!(drag.release(Point::new(8.0, 9.0)).unwrap());

    assert_eq!(points(&state, id)[0], Point::new(3.0, 4.0));
    assert_eq!(state.borrow().history.len(), 2);
    assert_eq!(state.borrow().history.undo_label(), Some("Move"));

    state.borrow_mut().undo().unwrap();
    assert_eq!(points(&state, id)[0], Point::new(0.0, 0.0));
}

#[test]
fn test_zero_delta_drag_records_nothing() {
    let (state, id) = editor_with_square(0.0, 0.0, 10.0);
    let before = points(&state, id);
    let mut drag = DragMoveController::new(state.clone());

    assert!(drag.press(Point::new(5.0, 5.0)));
    drag.drag(Point::new(9.0, 9.0)).unwrap();
    assert!(!drag.release(Point::new(5.0, 5.0)).unwrap());

    assert_eq!(points(&state, id), before);
    assert_eq!(state.borrow().history.len(), 1);
}

#[test]
fn test_cancel_restores() {
    let (state, id) = editor_with_square(0.0, 0.0, 10.0);
    let before = points(&state, id);
    let mut drag = DragMoveController::new(state.clone());

    drag.press(Point::new(0.0, 0.0));
    drag.drag(Point::new(30.0, 30.0)).unwrap();
    drag.cancel().unwrap();
    assert!(!drag.is_active());
    assert_eq!(points(&state, id), before);
    assert_eq!(state.borrow().history.len(), 1);
}

#[test]
fn test_press_without_selection() {
    let (state, _) = editor_with_square(0.0, 0.0, 10.0);
    state.borrow_mut().deselect_all();
    let mut drag = DragMoveController::new(state);
    assert!(!drag.press(Point::new(1.0, 1.0)));
    assert!(!drag.release(Point::new(2.0, 2.0)).unwrap());
}
