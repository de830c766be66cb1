use laserkit_core::{Result, Shared};

use super::GestureSnapshot;
use crate::commands::EditCommand;
use crate::editor::EditorState;
use crate::model::Point;

struct DragGesture {
    start: Point,
    snapshot: GestureSnapshot,
}

/// Moves the editable selection with the pointer.
pub struct DragMoveController {
    state: Shared<EditorState>,
    gesture: Option<DragGesture>,
}

impl DragMoveController {
    pub fn new(state: Shared<EditorState>) -> Self {
        Self {
            state,
            gesture: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Starts a drag. Returns `false` when nothing editable is selected.
    pub fn press(&mut self, point: Point) -> bool {
        let state = self.state.borrow();
        let ids = state.scene.editable_selection();
        let snapshot = GestureSnapshot::capture(&state.scene, &ids);
        if snapshot.is_empty() {
            return false;
        }
        self.gesture = Some(DragGesture {
            start: point,
            snapshot,
        });
        true
    }

    /// Live update: every entity sits at its pressed geometry translated by
    /// the pointer's total travel.
    pub fn drag(&mut self, point: Point) -> Result<()> {
        let Some(gesture) = &self.gesture else {
            return Ok(());
        };
        let (dx, dy) = (point.x - gesture.start.x, point.y - gesture.start.y);
        let mut state = self.state.borrow_mut();
        gesture
            .snapshot
            .preview(&mut state.scene, |e| e.translated_state(dx, dy))
    }

    /// Ends the drag and records one move if anything changed.
    pub fn release(&mut self, point: Point) -> Result<bool> {
        self.drag(point)?;
        let Some(gesture) = self.gesture.take() else {
            return Ok(false);
        };
        let mut state = self.state.borrow_mut();
        match gesture.snapshot.finish(&state.scene, "Move") {
            Some(changes) => {
                state.record_applied(EditCommand::Move(changes));
                Ok(true)
            }
            None => {
                tracing::debug!("Drag ended without movement");
                Ok(false)
            }
        }
    }

    /// Abandons the drag, restoring the pressed geometry.
    pub fn cancel(&mut self) -> Result<()> {
        if let Some(gesture) = self.gesture.take() {
            let mut state = self.state.borrow_mut();
            gesture.snapshot.restore(&mut state.scene)?;
        }
        Ok(())
    }
}
