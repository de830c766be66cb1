//! Interaction controllers.
//!
//! Each controller is a short-lived state machine bound to one pointer
//! gesture. It is constructed with the shared editor state it works on,
//! snapshots the entities it will touch on press, mutates them live on every
//! move event, and on release records a single command holding the
//! before/after pairs. A gesture that ends where it started records
//! nothing, and `cancel` puts every snapshot back.

mod angle;
mod drag;
mod nodes;
mod rotate;
mod scale;

pub use angle::AngleInputController;
pub use drag::DragMoveController;
pub use nodes::NodeEditController;
pub use rotate::RotateController;
pub use scale::{resize_rect, Handle, ScaleController};

use laserkit_core::Result;

use crate::commands::transform::snapshot;
use crate::commands::{StateChange, StateChanges};
use crate::model::{Entity, EntityId, EntityState};
use crate::scene::Scene;

/// Geometry of the gesture's entities as it was on press.
#[derive(Debug, Clone, Default)]
pub(crate) struct GestureSnapshot {
    entries: Vec<(EntityId, EntityState)>,
}

impl GestureSnapshot {
    pub(crate) fn capture(scene: &Scene, ids: &[EntityId]) -> Self {
        Self {
            entries: snapshot(scene, ids),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets every entity to `f(entity at press)`. The entity is reset to its
    /// snapshot first, so `f` always derives from the pressed geometry.
    pub(crate) fn preview(
        &self,
        scene: &mut Scene,
        f: impl Fn(&Entity) -> EntityState,
    ) -> Result<()> {
        for (id, old) in &self.entries {
            if let Some(entity) = scene.entity_mut(*id) {
                entity.set_state(old.clone())?;
                let next = f(entity);
                entity.set_state(next)?;
            }
        }
        Ok(())
    }

    /// Puts the pressed geometry back.
    pub(crate) fn restore(&self, scene: &mut Scene) -> Result<()> {
        for (id, old) in &self.entries {
            if let Some(entity) = scene.entity_mut(*id) {
                entity.set_state(old.clone())?;
            }
        }
        Ok(())
    }

    /// Pairs each snapshot with the live state. Unchanged entities are left
    /// out; `None` when nothing moved.
    pub(crate) fn finish(&self, scene: &Scene, label: &str) -> Option<StateChanges> {
        let changes: Vec<StateChange> = self
            .entries
            .iter()
            .filter_map(|(id, old)| {
                let new = scene.entity(*id)?.state();
                (new != *old).then(|| StateChange {
                    id: *id,
                    old: old.clone(),
                    new,
                })
            })
            .collect();
        (!changes.is_empty()).then(|| StateChanges::new(label, changes))
    }
}
