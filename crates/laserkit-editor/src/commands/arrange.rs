//! Align, distribute and same-size builders.

use laserkit_core::constants::GEOMETRY_EPSILON;
use serde::{Deserialize, Serialize};

use super::{EditCommand, StateChanges};
use crate::model::{Bounds, Entity, EntityId};
use crate::scene::Scene;

/// Edge or center line to align to. Y grows downward, so `Top` is the
/// smallest y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Right,
    CenterHorizontal,
    Top,
    Bottom,
    CenterVertical,
}

impl Alignment {
    fn label(&self) -> &'static str {
        match self {
            Alignment::Left => "Align Left",
            Alignment::Right => "Align Right",
            Alignment::CenterHorizontal => "Align Horizontal Center",
            Alignment::Top => "Align Top",
            Alignment::Bottom => "Align Bottom",
            Alignment::CenterVertical => "Align Vertical Center",
        }
    }

    /// Translation that puts `b` on the reference line taken from `reference`.
    fn delta(&self, reference: &Bounds, b: &Bounds) -> (f64, f64) {
        match self {
            Alignment::Left => (reference.min_x - b.min_x, 0.0),
            Alignment::Right => (reference.max_x - b.max_x, 0.0),
            Alignment::CenterHorizontal => (reference.center().x - b.center().x, 0.0),
            Alignment::Top => (0.0, reference.min_y - b.min_y),
            Alignment::Bottom => (0.0, reference.max_y - b.max_y),
            Alignment::CenterVertical => (0.0, reference.center().y - b.center().y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributeAxis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameSizeMode {
    Width,
    Height,
    Both,
}

fn present<'a>(scene: &'a Scene, ids: &[EntityId]) -> Vec<&'a Entity> {
    ids.iter().filter_map(|id| scene.entity(*id)).collect()
}

/// Per-entity translations; entities already in place are excluded.
pub fn calculate_alignment_deltas(
    entities: &[&Entity],
    reference: &Bounds,
    alignment: Alignment,
) -> Vec<(EntityId, f64, f64)> {
    entities
        .iter()
        .filter_map(|e| {
            let (dx, dy) = alignment.delta(reference, &e.bounds());
            (dx.abs() > GEOMETRY_EPSILON || dy.abs() > GEOMETRY_EPSILON).then_some((e.id, dx, dy))
        })
        .collect()
}

fn aligned(scene: &Scene, entities: &[&Entity], reference: &Bounds, alignment: Alignment, label: &str) -> Option<EditCommand> {
    let targets = calculate_alignment_deltas(entities, reference, alignment)
        .into_iter()
        .filter_map(|(id, dx, dy)| Some((id, scene.entity(id)?.translated_state(dx, dy))));
    StateChanges::collect(scene, label, targets).map(EditCommand::Align)
}

/// Aligns the entities to a line taken from the union of their own bounds.
pub fn align(scene: &Scene, ids: &[EntityId], alignment: Alignment) -> Option<EditCommand> {
    let entities = present(scene, ids);
    let reference = Bounds::union_all(entities.iter().map(|e| e.bounds()))?;
    aligned(scene, &entities, &reference, alignment, alignment.label())
}

/// Aligns the entities to a line of the page rectangle.
pub fn align_to_page(
    scene: &Scene,
    ids: &[EntityId],
    page: &Bounds,
    alignment: Alignment,
) -> Option<EditCommand> {
    let entities = present(scene, ids);
    let label = format!("{} to Page", alignment.label());
    aligned(scene, &entities, page, alignment, &label)
}

/// Spaces entities evenly between the two outermost ones.
///
/// Entities are ordered by their leading edge. The first and last stay
/// where they are; the others are moved so all gaps are equal. Needs at
/// least three entities.
pub fn distribute(scene: &Scene, ids: &[EntityId], axis: DistributeAxis) -> Option<EditCommand> {
    let mut items: Vec<(&Entity, f64, f64)> = present(scene, ids)
        .into_iter()
        .map(|e| {
            let b = e.bounds();
            match axis {
                DistributeAxis::Horizontal => (e, b.min_x, b.width()),
                DistributeAxis::Vertical => (e, b.min_y, b.height()),
            }
        })
        .collect();
    if items.len() < 3 {
        return None;
    }
    items.sort_by(|a, b| a.1.total_cmp(&b.1));

    let (first, last) = (items[0], items[items.len() - 1]);
    let span = (last.1 + last.2) - first.1;
    let extents: f64 = items.iter().map(|i| i.2).sum();
    let gap = (span - extents) / (items.len() - 1) as f64;

    let mut cursor = first.1 + first.2 + gap;
    let mut targets = Vec::new();
    for (entity, lead, extent) in &items[1..items.len() - 1] {
        let delta = cursor - lead;
        if delta.abs() > GEOMETRY_EPSILON {
            let state = match axis {
                DistributeAxis::Horizontal => entity.translated_state(delta, 0.0),
                DistributeAxis::Vertical => entity.translated_state(0.0, delta),
            };
            targets.push((entity.id, state));
        }
        cursor += extent + gap;
    }

    let label = match axis {
        DistributeAxis::Horizontal => "Distribute Horizontally",
        DistributeAxis::Vertical => "Distribute Vertically",
    };
    StateChanges::collect(scene, label, targets).map(EditCommand::Move)
}

/// Scales each entity about its own center to the largest extent in the
/// group. Axes with zero extent are left alone.
pub fn same_size(scene: &Scene, ids: &[EntityId], mode: SameSizeMode) -> Option<EditCommand> {
    let entities = present(scene, ids);
    let max_w = entities.iter().map(|e| e.bounds().width()).fold(0.0, f64::max);
    let max_h = entities.iter().map(|e| e.bounds().height()).fold(0.0, f64::max);
    let (do_w, do_h) = match mode {
        SameSizeMode::Width => (true, false),
        SameSizeMode::Height => (false, true),
        SameSizeMode::Both => (true, true),
    };

    let targets = entities.iter().filter_map(|e| {
        let b = e.bounds();
        let w = if do_w && b.width() > GEOMETRY_EPSILON { max_w } else { b.width() };
        let h = if do_h && b.height() > GEOMETRY_EPSILON { max_h } else { b.height() };
        if (w - b.width()).abs() <= GEOMETRY_EPSILON && (h - b.height()).abs() <= GEOMETRY_EPSILON {
            return None;
        }
        let c = b.center();
        let to = Bounds::new(c.x - w / 2.0, c.y - h / 2.0, c.x + w / 2.0, c.y + h / 2.0);
        Some((e.id, e.scaled_state(&b, &to)))
    });
    StateChanges::collect(scene, "Same Size", targets).map(EditCommand::Scale)
}
