use super::{editor_with_square, points};
use laserkit_editor::model::Point;
use laserkit_editor::NodeEditController;

#[test]
fn test_move_single_vertex() {
    let (state, id) = editor_with_square(0.0, 0.0, 10.0);
    let mut nodes = NodeEditController::new(state.clone());
    assert!(nodes.begin(id));
    assert_eq!(nodes.handles().len(), 4);

    assert_eq!(nodes.press(Point::new(10.5, 10.5)), Some(2));
    nodes.drag(Point::new(12.0, 11.0)).unwrap();
    assert!(nodes.release(Point::new(15.5, 12.5)).unwrap());

    let pts = points(&state, id);
    assert_eq!(pts[2], Point::new(15.0, 12.0));
    assert_eq!(pts[0], Point::new(0.0, 0.0));
    assert_eq!(state.borrow().history.undo_label(), Some("Edit Nodes"));

    state.borrow_mut().undo().unwrap();
    assert_eq!(points(&state, id)[2], Point::new(10.0, 10.0));
}

#[test]
fn test_press_away_from_nodes() {
    let (state, id) = editor_with_square(0.0, 0.0, 10.0);
    let mut nodes = NodeEditController::new(state.clone());
    nodes.begin(id);
    assert_eq!(nodes.press(Point::new(5.0, 5.0)), None);
    assert!(!nodes.is_active());
    nodes.end().unwrap();
    assert_eq!(nodes.target(), None);
}

#[test]
fn test_locked_path_cannot_be_edited() {
    let (state, id) = editor_with_square(0.0, 0.0, 10.0);
    state.borrow_mut().scene.entity_mut(id).unwrap().locked = true;
    let mut nodes = NodeEditController::new(state);
    assert!(!nodes.begin(id));
    assert!(nodes.handles().is_empty());
}
