use laserkit_editor::model::{
    Affine, Bounds, Entity, EntityId, EntityState, ImageEntity, MirrorAxis, PathEntity, Point,
    TextEntity,
};
use lyon::geom::euclid::Angle;
use proptest::prelude::*;

fn square(id: u64) -> Entity {
    Entity::path(
        EntityId(id),
        PathEntity::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ])
        .with_closed(true),
    )
}

#[test]
fn test_protocols() {
    let text = Entity::text(EntityId(2), TextEntity::new("Hi", "Sans", 12.0));
    assert_eq!(square(1).protocol(), "points");
    assert_eq!(text.protocol(), "transform");
}

#[test]
fn test_protocol_mismatch_leaves_entity() {
    let mut entity = square(1);
    let before = entity.state();
    let err = entity.set_state(EntityState::Transform(Affine::identity()));
    assert!(err.is_err());
    assert_eq!(entity.state(), before);
}

#[test]
fn test_image_bounds_follow_transform() {
    let pixels = image::RgbaImage::new(20, 10);
    let entity = Entity::image(
        EntityId(3),
        ImageEntity::new(pixels, 1.0).with_transform(Affine::translation(5.0, 5.0)),
    );
    assert_eq!(entity.bounds(), Bounds::new(5.0, 5.0, 25.0, 15.0));
}

#[test]
fn test_mirror_is_self_inverse() {
    let mut entity = Entity::path(
        EntityId(1),
        PathEntity::new(vec![Point::new(1.0, 2.0), Point::new(7.0, 3.0), Point::new(4.0, 9.0)]),
    );
    let original = entity.state();
    for axis in [MirrorAxis::Horizontal, MirrorAxis::Vertical] {
        entity.set_state(entity.mirrored_state(axis)).unwrap();
        entity.set_state(entity.mirrored_state(axis)).unwrap();
    }
    assert_eq!(entity.state(), original);
}

#[test]
fn test_state_serializes() {
    let state = EntityState::Points(vec![Point::new(1.0, 2.0)]);
    let json = serde_json::to_string(&state).unwrap();
    let back: EntityState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}

proptest! {
    #[test]
    fn prop_state_round_trip_path(dx in -100.0f64..100.0, dy in -100.0f64..100.0) {
        let mut entity = square(1);
        let saved = entity.state();
        entity.set_state(entity.translated_state(dx, dy)).unwrap();
        entity.set_state(saved.clone()).unwrap();
        prop_assert_eq!(entity.state(), saved);
    }

    #[test]
    fn prop_state_round_trip_text(angle in -3.0f64..3.0, tx in -50.0f64..50.0) {
        let mut entity = Entity::text(
            EntityId(1),
            TextEntity::new("abc", "Sans", 10.0)
                .with_transform(Affine::rotation(Angle::radians(angle)).then_translate(
                    lyon::geom::euclid::default::Vector2D::new(tx, 0.0),
                )),
        );
        let saved = entity.state();
        entity.set_state(entity.rotated_state(0.5, Point::new(3.0, 4.0))).unwrap();
        entity.set_state(saved.clone()).unwrap();
        prop_assert_eq!(entity.state(), saved);
    }
}
