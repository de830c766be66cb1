use laserkit_core::{Result, Shared};

use super::GestureSnapshot;
use crate::commands::EditCommand;
use crate::editor::EditorState;
use crate::model::{EntityId, Point};

struct RotateGesture {
    center: Point,
    start_angle: f64,
    angle: f64,
    pivots: Vec<(EntityId, Point)>,
    snapshot: GestureSnapshot,
}

/// Rotate handle: turns each selected entity about its own pivot by the
/// angle the pointer sweeps around the selection center.
pub struct RotateController {
    state: Shared<EditorState>,
    gesture: Option<RotateGesture>,
}

impl RotateController {
    pub fn new(state: Shared<EditorState>) -> Self {
        Self {
            state,
            gesture: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Current sweep in radians, after snapping.
    pub fn angle(&self) -> f64 {
        self.gesture.as_ref().map(|g| g.angle).unwrap_or(0.0)
    }

    pub fn press(&mut self, point: Point) -> bool {
        let state = self.state.borrow();
        let ids = state.scene.editable_selection();
        let Some(bounds) = state.scene.bounds_of(&ids) else {
            return false;
        };
        let center = bounds.center();
        let pivots = ids
            .iter()
            .filter_map(|id| state.scene.entity(*id).map(|e| (*id, e.pivot())))
            .collect();
        self.gesture = Some(RotateGesture {
            center,
            start_angle: (point.y - center.y).atan2(point.x - center.x),
            angle: 0.0,
            pivots,
            snapshot: GestureSnapshot::capture(&state.scene, &ids),
        });
        true
    }

    /// Live update. With `snap` the sweep is rounded to the configured step.
    pub fn drag(&mut self, point: Point, snap: bool) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let step = state.config().interaction.rotate_snap_degrees.to_radians();
        let Some(gesture) = self.gesture.as_mut() else {
            return Ok(());
        };

        let current = (point.y - gesture.center.y).atan2(point.x - gesture.center.x);
        let mut angle = current - gesture.start_angle;
        if snap && step > 0.0 {
            angle = (angle / step).round() * step;
        }
        gesture.angle = angle;

        let pivots = &gesture.pivots;
        gesture.snapshot.preview(&mut state.scene, |e| {
            if angle == 0.0 {
                return e.state();
            }
            let pivot = pivots
                .iter()
                .find(|(id, _)| *id == e.id)
                .map(|(_, p)| *p)
                .unwrap_or_else(|| e.pivot());
            e.rotated_state(angle, pivot)
        })
    }

    pub fn release(&mut self, point: Point, snap: bool) -> Result<bool> {
        self.drag(point, snap)?;
        let Some(gesture) = self.gesture.take() else {
            return Ok(false);
        };
        let mut state = self.state.borrow_mut();
        match gesture.snapshot.finish(&state.scene, "Rotate") {
            Some(changes) => {
                tracing::debug!(degrees = gesture.angle.to_degrees(), "Rotate gesture committed");
                state.record_applied(EditCommand::Rotate(changes));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn cancel(&mut self) -> Result<()> {
        if let Some(gesture) = self.gesture.take() {
            let mut state = self.state.borrow_mut();
            gesture.snapshot.restore(&mut state.scene)?;
        }
        Ok(())
    }
}
