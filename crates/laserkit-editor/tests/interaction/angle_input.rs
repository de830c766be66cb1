use super::editor_with_square;
use laserkit_editor::model::{Affine, Entity, EntityKind, TextEntity};
use laserkit_editor::AngleInputController;

#[test]
fn test_absolute_angle_on_text() {
    let (state, _) = editor_with_square(0.0, 0.0, 10.0);
    let text_id = state
        .borrow_mut()
        .add_entity(EntityKind::Text(
            TextEntity::new("LASER", "Sans", 10.0).with_transform(Affine::translation(50.0, 50.0)),
        ))
        .unwrap();
    state.borrow_mut().scene.select(&[text_id], false);

    let input = AngleInputController::new(state.clone());
    assert!(input.apply("45").unwrap());
    let heading = state
        .borrow()
        .scene
        .entity(text_id)
        .map(Entity::orientation)
        .unwrap();
    assert!((heading.to_degrees() - 45.0).abs() < 1e-9);

    // Same heading again: nothing to do.
    assert!(!input.apply("45").unwrap());
    assert_eq!(state.borrow().history.undo_label(), Some("Rotate"));
}

#[test]
fn test_unparsable_input() {
    let (state, _) = editor_with_square(0.0, 0.0, 10.0);
    let input = AngleInputController::new(state.clone());
    assert!(input.apply("").is_err());
    assert!(input.apply("12deg").is_err());
    assert_eq!(state.borrow().history.len(), 1);
}
