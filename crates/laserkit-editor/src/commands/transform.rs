//! Move, rotate, mirror and resize builders.

use laserkit_core::constants::GEOMETRY_EPSILON;

use super::{EditCommand, StateChanges};
use crate::model::{normalize_angle, Bounds, Entity, EntityId, EntityState, MirrorAxis};
use crate::scene::Scene;

pub fn translate(scene: &Scene, ids: &[EntityId], dx: f64, dy: f64) -> Option<EditCommand> {
    translate_labeled(scene, ids, dx, dy, "Move")
}

/// Keyboard nudge; same as [`translate`] under its own label.
pub fn nudge(scene: &Scene, ids: &[EntityId], dx: f64, dy: f64) -> Option<EditCommand> {
    translate_labeled(scene, ids, dx, dy, "Nudge")
}

fn translate_labeled(
    scene: &Scene,
    ids: &[EntityId],
    dx: f64,
    dy: f64,
    label: &str,
) -> Option<EditCommand> {
    if dx.abs() <= GEOMETRY_EPSILON && dy.abs() <= GEOMETRY_EPSILON {
        return None;
    }
    let targets = ids
        .iter()
        .filter_map(|id| scene.entity(*id))
        .map(|e| (e.id, e.translated_state(dx, dy)));
    StateChanges::collect(scene, label, targets).map(EditCommand::Move)
}

/// Rotates each entity by `angle` radians about its own pivot.
pub fn rotate_by(scene: &Scene, ids: &[EntityId], angle: f64) -> Option<EditCommand> {
    if normalize_angle(angle).abs() <= GEOMETRY_EPSILON {
        return None;
    }
    let targets = ids
        .iter()
        .filter_map(|id| scene.entity(*id))
        .map(|e| (e.id, e.rotated_state(angle, e.pivot())));
    StateChanges::collect(scene, "Rotate", targets).map(EditCommand::Rotate)
}

/// Turns every entity to the absolute heading `angle` (radians).
///
/// Each entity's current orientation is measured first, so entities that
/// start at different headings all end up at the same one.
pub fn rotate_to(scene: &Scene, ids: &[EntityId], angle: f64) -> Option<EditCommand> {
    let targets = ids
        .iter()
        .filter_map(|id| scene.entity(*id))
        .filter_map(|e| {
            let delta = normalize_angle(angle - e.orientation());
            (delta.abs() > GEOMETRY_EPSILON).then(|| (e.id, e.rotated_state(delta, e.pivot())))
        });
    StateChanges::collect(scene, "Rotate", targets).map(EditCommand::Rotate)
}

/// Reflects each entity about its own bounding-box center.
pub fn mirror(scene: &Scene, ids: &[EntityId], axis: MirrorAxis) -> Option<EditCommand> {
    let label = match axis {
        MirrorAxis::Horizontal => "Mirror Horizontal",
        MirrorAxis::Vertical => "Mirror Vertical",
    };
    let targets = ids
        .iter()
        .filter_map(|id| scene.entity(*id))
        .map(|e| (e.id, e.mirrored_state(axis)));
    StateChanges::collect(scene, label, targets).map(EditCommand::Mirror)
}

/// Mirrored duplicates placed next to their originals. The originals are
/// never touched; reverting removes exactly the copies listed here.
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorCopy {
    pub axis: MirrorAxis,
    pub gap: f64,
    pub copy_ids: Vec<EntityId>,
    /// Copies not currently in the scene.
    pending: Vec<Entity>,
}

impl MirrorCopy {
    pub(crate) fn apply(&mut self, scene: &mut Scene) {
        for copy in self.pending.drain(..) {
            scene.add_entity(copy);
        }
    }

    pub(crate) fn revert(&mut self, scene: &mut Scene) {
        for id in self.copy_ids.iter().rev() {
            match scene.remove_entity(*id) {
                Some((_, copy)) => self.pending.insert(0, copy),
                None => tracing::warn!(entity = %id, "Mirror copy already gone"),
            }
        }
    }
}

/// Builds mirrored copies, offset by `gap` past the right edge
/// (horizontal) or the bottom edge (vertical) of each original.
pub fn mirror_copy(
    scene: &mut Scene,
    ids: &[EntityId],
    axis: MirrorAxis,
    gap: f64,
) -> Option<EditCommand> {
    let sources: Vec<Entity> = ids
        .iter()
        .filter_map(|id| scene.entity(*id).cloned())
        .collect();
    if sources.is_empty() {
        return None;
    }

    let mut pending = Vec::with_capacity(sources.len());
    for source in sources {
        let b = source.bounds();
        let (dx, dy) = match axis {
            MirrorAxis::Horizontal => (b.width() + gap, 0.0),
            MirrorAxis::Vertical => (0.0, b.height() + gap),
        };

        let mut copy = source.clone();
        copy.id = scene.next_id();
        copy.name = format!("{} (mirror)", source.name);
        copy.selected = false;
        copy.locked = false;
        if let Err(e) = copy.set_state(source.mirrored_state(axis)) {
            tracing::error!(entity = %source.id, error = %e, "Mirror copy failed");
            continue;
        }
        if let Err(e) = copy.set_state(copy.translated_state(dx, dy)) {
            tracing::error!(entity = %source.id, error = %e, "Mirror copy failed");
            continue;
        }
        pending.push(copy);
    }

    let copy_ids = pending.iter().map(|c| c.id).collect();
    Some(EditCommand::MirrorCopy(MirrorCopy {
        axis,
        gap,
        copy_ids,
        pending,
    }))
}

/// Target values for a numeric X/Y/W/H edit of the selection's bounds.
/// `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeometryEdit {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Moves and/or resizes the union bounds of `ids` to the values in `edit`,
/// mapping every entity through the same rectangle transform. Sizes are
/// clamped to `min_extent`, except on axes that have no extent to begin
/// with.
pub fn set_geometry(
    scene: &Scene,
    ids: &[EntityId],
    edit: GeometryEdit,
    min_extent: f64,
) -> Option<EditCommand> {
    let from = scene.bounds_of(ids)?;
    let width = match edit.width {
        Some(w) if from.width() > GEOMETRY_EPSILON => w.max(min_extent),
        _ => from.width(),
    };
    let height = match edit.height {
        Some(h) if from.height() > GEOMETRY_EPSILON => h.max(min_extent),
        _ => from.height(),
    };
    let to = Bounds::from_rect(
        edit.x.unwrap_or(from.min_x),
        edit.y.unwrap_or(from.min_y),
        width,
        height,
    );

    let targets = ids.iter().filter_map(|id| scene.entity(*id)).map(|e| {
        let state = if width == from.width() && height == from.height() {
            e.translated_state(to.min_x - from.min_x, to.min_y - from.min_y)
        } else {
            e.scaled_state(&from, &to)
        };
        (e.id, state)
    });
    StateChanges::collect(scene, "Resize/Move", targets).map(EditCommand::Move)
}

/// Snapshot helper for controllers: current state of every listed entity.
pub(crate) fn snapshot(scene: &Scene, ids: &[EntityId]) -> Vec<(EntityId, EntityState)> {
    ids.iter()
        .filter_map(|id| scene.entity(*id).map(|e| (*id, e.state())))
        .collect()
}
