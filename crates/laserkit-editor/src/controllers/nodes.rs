use laserkit_core::{Result, Shared};

use super::GestureSnapshot;
use crate::commands::EditCommand;
use crate::editor::EditorState;
use crate::model::{Bounds, EntityId, EntityState, Point};

struct NodeGesture {
    index: usize,
    start: Point,
    origin: Point,
    snapshot: GestureSnapshot,
}

/// Drags single vertices of one path.
///
/// `begin` picks the path, then each press/drag/release cycle moves the
/// vertex under the pointer and records one "Edit Nodes" entry.
pub struct NodeEditController {
    state: Shared<EditorState>,
    target: Option<EntityId>,
    gesture: Option<NodeGesture>,
}

impl NodeEditController {
    pub fn new(state: Shared<EditorState>) -> Self {
        Self {
            state,
            target: None,
            gesture: None,
        }
    }

    /// Starts editing `id`. Only editable paths have nodes.
    pub fn begin(&mut self, id: EntityId) -> bool {
        let editable = self
            .state
            .borrow()
            .scene
            .entity(id)
            .is_some_and(|e| e.is_editable() && e.as_path().is_some());
        self.target = editable.then_some(id);
        self.gesture = None;
        editable
    }

    pub fn target(&self) -> Option<EntityId> {
        self.target
    }

    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Square grips around each vertex, sized by the hit tolerance.
    pub fn handles(&self) -> Vec<Bounds> {
        let Some(id) = self.target else {
            return Vec::new();
        };
        let state = self.state.borrow();
        let size = state.config().interaction.hit_tolerance;
        state
            .scene
            .entity(id)
            .and_then(|e| e.points())
            .map(|pts| {
                pts.iter()
                    .map(|p| Bounds::new(p.x - size, p.y - size, p.x + size, p.y + size))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Grabs the vertex nearest `point`. Returns its index.
    pub fn press(&mut self, point: Point) -> Option<usize> {
        let id = self.target?;
        let state = self.state.borrow();
        let tolerance = state.config().interaction.hit_tolerance;
        let path = state.scene.entity(id)?.as_path()?;
        let index = path.nearest_point(point, tolerance)?;
        let origin = path.points()[index];
        self.gesture = Some(NodeGesture {
            index,
            start: point,
            origin,
            snapshot: GestureSnapshot::capture(&state.scene, &[id]),
        });
        Some(index)
    }

    pub fn drag(&mut self, point: Point) -> Result<()> {
        let Some(gesture) = &self.gesture else {
            return Ok(());
        };
        let moved = gesture
            .origin
            .translated(point.x - gesture.start.x, point.y - gesture.start.y);
        let index = gesture.index;
        let mut state = self.state.borrow_mut();
        gesture.snapshot.preview(&mut state.scene, |e| {
            let mut points = e.points().map(<[Point]>::to_vec).unwrap_or_default();
            if let Some(p) = points.get_mut(index) {
                *p = moved;
            }
            EntityState::Points(points)
        })
    }

    pub fn release(&mut self, point: Point) -> Result<bool> {
        self.drag(point)?;
        let Some(gesture) = self.gesture.take() else {
            return Ok(false);
        };
        let mut state = self.state.borrow_mut();
        match gesture.snapshot.finish(&state.scene, "Edit Nodes") {
            Some(changes) => {
                state.record_applied(EditCommand::Move(changes));
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

    /// Leaves node editing, abandoning any gesture in progress.
    pub fn end(&mut self) -> Result<()> {
        self.cancel()?;
        self.target = None;
        Ok(())
    }
}
