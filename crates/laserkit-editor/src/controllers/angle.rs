use laserkit_core::{EditorError, Result, Shared};

use crate::editor::EditorState;

/// Numeric rotation field: turns the selection to an absolute heading.
pub struct AngleInputController {
    state: Shared<EditorState>,
}

impl AngleInputController {
    pub fn new(state: Shared<EditorState>) -> Self {
        Self { state }
    }

    /// Current heading of the primary selected entity, in degrees.
    pub fn current(&self) -> Option<f64> {
        let state = self.state.borrow();
        let id = state.scene.selection.primary()?;
        state.scene.entity(id).map(|e| e.orientation().to_degrees())
    }

    /// Parses `field` as degrees and rotates the selection to it. Input
    /// that is not a finite number is rejected without touching the scene.
    pub fn apply(&self, field: &str) -> Result<bool> {
        let trimmed = field.trim().trim_end_matches('°').trim();
        let degrees: f64 = trimmed.parse().map_err(|_| EditorError::InvalidInput {
            reason: format!("'{}' is not an angle", field),
        })?;
        self.state.borrow_mut().rotate_selected_to(degrees)
    }
}
