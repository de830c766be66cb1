use super::{editor_with_square, points};
use laserkit_editor::model::Point;
use laserkit_editor::RotateController;

fn close(a: Point, b: Point) -> bool {
    a.distance_to(&b) < 1e-9
}

#[test]
fn test_quarter_turn() {
    let (state, id) = editor_with_square(0.0, 0.0, 10.0);
    let mut rotate = RotateController::new(state.clone());

    // Pointer sweeps from east of the center to south of it.
    assert!(rotate.press(Point::new(20.0, 5.0)));
    assert!(rotate.release(Point::new(5.0, 20.0), false).unwrap());

    let pts = points(&state, id);
    assert!(close(pts[0], Point::new(10.0, 0.0)));
    assert!(close(pts[2], Point::new(0.0, 10.0)));
    assert_eq!(state.borrow().history.undo_label(), Some("Rotate"));
}

#[test]
fn test_snap_rounds_to_step() {
    let (state, _) = editor_with_square(0.0, 0.0, 10.0);
    let mut rotate = RotateController::new(state.clone());

    rotate.press(Point::new(20.0, 5.0));
    // About 20 degrees of sweep.
    let a = 20f64.to_radians();
    let p = Point::new(5.0 + 15.0 * a.cos(), 5.0 + 15.0 * a.sin());
    rotate.drag(p, true).unwrap();
    assert!((rotate.angle().to_degrees() - 15.0).abs() < 1e-9);
    rotate.drag(p, false).unwrap();
    assert!((rotate.angle().to_degrees() - 20.0).abs() < 1e-6);
    rotate.cancel().unwrap();
}

#[test]
fn test_snap_to_zero_records_nothing() {
    let (state, id) = editor_with_square(0.0, 0.0, 10.0);
    let before = points(&state, id);
    let mut rotate = RotateController::new(state.clone());

    rotate.press(Point::new(20.0, 5.0));
    assert!(!rotate.release(Point::new(20.0, 6.0), true).unwrap());
    assert_eq!(points(&state, id), before);
    assert_eq!(state.borrow().history.len(), 1);
}
