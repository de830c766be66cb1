use laserkit_editor::commands::{self, StateChanges};
use laserkit_editor::model::{Color, Entity, EntityId, EntityState, MirrorAxis, PathEntity, Point};
use laserkit_editor::scene::Scene;
use laserkit_editor::EditCommand;

fn path(scene: &mut Scene, pts: &[(f64, f64)]) -> EntityId {
    let id = scene.next_id();
    let entity = Entity::path(
        id,
        PathEntity::new(pts.iter().map(|(x, y)| Point::new(*x, *y)).collect()),
    );
    scene.add_entity(entity);
    id
}

fn points(scene: &Scene, id: EntityId) -> Vec<Point> {
    scene.entity(id).unwrap().points().unwrap().to_vec()
}

#[test]
fn test_delete_restores_draw_order() {
    let mut scene = Scene::new();
    let a = path(&mut scene, &[(0.0, 0.0)]);
    let b = path(&mut scene, &[(1.0, 1.0)]);
    let c = path(&mut scene, &[(2.0, 2.0)]);

    let mut cmd = EditCommand::delete(&scene, &[c, a]).unwrap();
    cmd.apply(&mut scene).unwrap();
    assert_eq!(scene.len(), 1);
    cmd.revert(&mut scene).unwrap();

    let order: Vec<EntityId> = scene.entities().map(|e| e.id).collect();
    assert_eq!(order, vec![a, b, c]);
}

#[test]
fn test_add_revert_apply() {
    let mut scene = Scene::new();
    let id = scene.next_id();
    let mut cmd = EditCommand::add(Entity::path(id, PathEntity::new(vec![Point::new(3.0, 3.0)])));
    cmd.apply(&mut scene).unwrap();
    assert!(scene.contains(id));
    cmd.revert(&mut scene).unwrap();
    assert!(!scene.contains(id));
    cmd.apply(&mut scene).unwrap();
    assert!(scene.contains(id));
}

#[test]
fn test_move_undo_is_exact() {
    let mut scene = Scene::new();
    let id = path(&mut scene, &[(0.1, 0.2), (3.3, 4.4)]);
    let before = points(&scene, id);

    let mut cmd = commands::translate(&scene, &[id], 0.7, -1.3).unwrap();
    cmd.apply(&mut scene).unwrap();
    cmd.revert(&mut scene).unwrap();
    assert_eq!(points(&scene, id), before);
}

#[test]
fn test_rotate_to_absolute() {
    let mut scene = Scene::new();
    let id = path(&mut scene, &[(0.0, 0.0), (10.0, 0.0)]);
    let mut cmd = commands::rotate_to(&scene, &[id], std::f64::consts::FRAC_PI_2).unwrap();
    cmd.apply(&mut scene).unwrap();
    let heading = scene.entity(id).unwrap().orientation();
    assert!((heading - std::f64::consts::FRAC_PI_2).abs() < 1e-9);

    // Already there: nothing to record.
    assert!(commands::rotate_to(&scene, &[id], std::f64::consts::FRAC_PI_2).is_none());
}

#[test]
fn test_mirror_copy_leaves_original() {
    let mut scene = Scene::new();
    let id = path(&mut scene, &[(0.0, 0.0), (10.0, 0.0), (10.0, 5.0)]);
    let original = points(&scene, id);

    let mut cmd = commands::mirror_copy(&mut scene, &[id], MirrorAxis::Horizontal, 5.0).unwrap();
    cmd.apply(&mut scene).unwrap();
    assert_eq!(scene.len(), 2);
    assert_eq!(points(&scene, id), original);

    let copy = scene.entities().map(|e| e.id).find(|c| *c != id).unwrap();
    let b = scene.entity(copy).unwrap().bounds();
    assert_eq!((b.min_x, b.max_x), (15.0, 25.0));

    cmd.revert(&mut scene).unwrap();
    assert_eq!(scene.len(), 1);
    cmd.apply(&mut scene).unwrap();
    assert!(scene.contains(copy));
}

#[test]
fn test_change_color_skips_same_color() {
    let mut scene = Scene::new();
    let id = path(&mut scene, &[(0.0, 0.0)]);
    let current = scene.entity(id).unwrap().color().unwrap();
    assert!(EditCommand::change_color(&scene, &[id], current).is_none());

    let red = Color::rgb(255, 0, 0);
    let mut cmd = EditCommand::change_color(&scene, &[id], red).unwrap();
    cmd.apply(&mut scene).unwrap();
    assert_eq!(scene.entity(id).unwrap().color(), Some(red));
    cmd.revert(&mut scene).unwrap();
    assert_eq!(scene.entity(id).unwrap().color(), Some(current));
}

#[test]
fn test_fiducial_commands() {
    let mut scene = Scene::new();
    let mut add = EditCommand::fiducial_add(&scene, Point::new(5.0, 5.0), 2.0);
    add.apply(&mut scene).unwrap();
    assert_eq!(scene.export_offset(), Point::new(-5.0, -5.0));

    let mut resize = EditCommand::fiducial_resize(&scene, 4.0).unwrap();
    resize.apply(&mut scene).unwrap();
    assert_eq!(scene.fiducial().unwrap().size, 4.0);

    let mut remove = EditCommand::fiducial_remove(&scene).unwrap();
    remove.apply(&mut scene).unwrap();
    assert!(scene.fiducial().is_none());
    assert_eq!(scene.export_offset(), Point::new(0.0, 0.0));

    remove.revert(&mut scene).unwrap();
    resize.revert(&mut scene).unwrap();
    assert_eq!(scene.fiducial().unwrap().size, 2.0);
    add.revert(&mut scene).unwrap();
    assert!(scene.fiducial().is_none());
}

#[test]
fn test_stale_entity_is_skipped() {
    let mut scene = Scene::new();
    let a = path(&mut scene, &[(0.0, 0.0)]);
    let b = path(&mut scene, &[(1.0, 0.0)]);
    let mut cmd = commands::translate(&scene, &[a, b], 1.0, 0.0).unwrap();
    scene.remove_entity(a);

    cmd.apply(&mut scene).unwrap();
    assert_eq!(points(&scene, b), vec![Point::new(2.0, 0.0)]);
}

#[test]
fn test_protocol_mismatch_is_reported() {
    let mut scene = Scene::new();
    let id = path(&mut scene, &[(0.0, 0.0)]);
    let changes = StateChanges::new(
        "Move",
        vec![laserkit_editor::StateChange {
            id,
            old: EntityState::Points(vec![Point::new(0.0, 0.0)]),
            new: EntityState::Transform(laserkit_editor::Affine::identity()),
        }],
    );
    let err = EditCommand::Move(changes).apply(&mut scene).unwrap_err();
    assert!(err.is_invariant_violation());
}
