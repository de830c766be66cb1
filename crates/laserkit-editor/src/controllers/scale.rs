use laserkit_core::constants::GEOMETRY_EPSILON;
use laserkit_core::{Result, Shared};

use super::GestureSnapshot;
use crate::commands::EditCommand;
use crate::editor::EditorState;
use crate::model::{Bounds, Point};

/// The eight grips around the selection's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl Handle {
    pub const ALL: [Handle; 8] = [
        Handle::TopLeft,
        Handle::Top,
        Handle::TopRight,
        Handle::Right,
        Handle::BottomRight,
        Handle::Bottom,
        Handle::BottomLeft,
        Handle::Left,
    ];

    pub fn position(&self, b: &Bounds) -> Point {
        let c = b.center();
        match self {
            Handle::TopLeft => Point::new(b.min_x, b.min_y),
            Handle::Top => Point::new(c.x, b.min_y),
            Handle::TopRight => Point::new(b.max_x, b.min_y),
            Handle::Right => Point::new(b.max_x, c.y),
            Handle::BottomRight => Point::new(b.max_x, b.max_y),
            Handle::Bottom => Point::new(c.x, b.max_y),
            Handle::BottomLeft => Point::new(b.min_x, b.max_y),
            Handle::Left => Point::new(b.min_x, c.y),
        }
    }

    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            Handle::TopLeft | Handle::TopRight | Handle::BottomRight | Handle::BottomLeft
        )
    }

    fn moves_left(&self) -> bool {
        matches!(self, Handle::TopLeft | Handle::Left | Handle::BottomLeft)
    }

    fn moves_right(&self) -> bool {
        matches!(self, Handle::TopRight | Handle::Right | Handle::BottomRight)
    }

    fn moves_top(&self) -> bool {
        matches!(self, Handle::TopLeft | Handle::Top | Handle::TopRight)
    }

    fn moves_bottom(&self) -> bool {
        matches!(self, Handle::BottomLeft | Handle::Bottom | Handle::BottomRight)
    }

    /// Grip under `point`, if any lies within `tolerance`.
    pub fn at(bounds: &Bounds, point: Point, tolerance: f64) -> Option<Handle> {
        Handle::ALL
            .iter()
            .copied()
            .map(|h| (h, h.position(bounds).distance_to(&point)))
            .filter(|(_, d)| *d <= tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(h, _)| h)
    }
}

/// Computes the rectangle produced by dragging `handle` of `original` to
/// `to`. Each moved edge stops `min_extent` short of the fixed opposite
/// edge, or at the original extent when that is already smaller; an axis
/// with no extent is left as it is. With `uniform` (corners only) both axes
/// take the factor that changed most.
pub fn resize_rect(
    original: &Bounds,
    handle: Handle,
    to: Point,
    uniform: bool,
    min_extent: f64,
) -> Bounds {
    let mut r = *original;
    let has_w = original.width() > GEOMETRY_EPSILON;
    let has_h = original.height() > GEOMETRY_EPSILON;
    let floor_w = min_extent.min(original.width());
    let floor_h = min_extent.min(original.height());

    if has_w && handle.moves_left() {
        r.min_x = to.x.min(original.max_x - floor_w);
    }
    if has_w && handle.moves_right() {
        r.max_x = to.x.max(original.min_x + floor_w);
    }
    if has_h && handle.moves_top() {
        r.min_y = to.y.min(original.max_y - floor_h);
    }
    if has_h && handle.moves_bottom() {
        r.max_y = to.y.max(original.min_y + floor_h);
    }

    if uniform && handle.is_corner() && has_w && has_h {
        let sx = r.width() / original.width();
        let sy = r.height() / original.height();
        let s = if (sx - 1.0).abs() >= (sy - 1.0).abs() { sx } else { sy };
        let s = s
            .max(floor_w / original.width())
            .max(floor_h / original.height());
        let (w, h) = (original.width() * s, original.height() * s);
        if handle.moves_left() {
            r.min_x = original.max_x - w;
        } else {
            r.max_x = original.min_x + w;
        }
        if handle.moves_top() {
            r.min_y = original.max_y - h;
        } else {
            r.max_y = original.min_y + h;
        }
    }
    r
}

struct ScaleGesture {
    handle: Handle,
    original: Bounds,
    /// Handle position minus pointer position at press.
    offset: (f64, f64),
    snapshot: GestureSnapshot,
}

/// Scale handles around the editable selection's union bounds.
pub struct ScaleController {
    state: Shared<EditorState>,
    gesture: Option<ScaleGesture>,
}

impl ScaleController {
    pub fn new(state: Shared<EditorState>) -> Self {
        Self {
            state,
            gesture: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Handles for the current selection, empty without one.
    pub fn handles(&self) -> Vec<(Handle, Point)> {
        let state = self.state.borrow();
        match state.scene.selection_bounds() {
            Some(b) => Handle::ALL.iter().map(|h| (*h, h.position(&b))).collect(),
            None => Vec::new(),
        }
    }

    /// Grabs the handle under `point`, if any.
    pub fn press_at(&mut self, point: Point) -> bool {
        let handle = {
            let state = self.state.borrow();
            let tolerance = state.config().interaction.hit_tolerance;
            state
                .scene
                .selection_bounds()
                .and_then(|b| Handle::at(&b, point, tolerance))
        };
        match handle {
            Some(handle) => self.press(handle, point),
            None => false,
        }
    }

    pub fn press(&mut self, handle: Handle, point: Point) -> bool {
        let state = self.state.borrow();
        let ids = state.scene.editable_selection();
        let Some(original) = state.scene.bounds_of(&ids) else {
            return false;
        };
        let grip = handle.position(&original);
        self.gesture = Some(ScaleGesture {
            handle,
            original,
            offset: (grip.x - point.x, grip.y - point.y),
            snapshot: GestureSnapshot::capture(&state.scene, &ids),
        });
        true
    }

    /// Live update. `uniform` keeps the aspect ratio on corner handles.
    pub fn drag(&mut self, point: Point, uniform: bool) -> Result<()> {
        let Some(gesture) = &self.gesture else {
            return Ok(());
        };
        let mut state = self.state.borrow_mut();
        let min_extent = state.config().interaction.min_extent;
        let target = Point::new(point.x + gesture.offset.0, point.y + gesture.offset.1);
        let rect = resize_rect(&gesture.original, gesture.handle, target, uniform, min_extent);
        let original = gesture.original;
        gesture
            .snapshot
            .preview(&mut state.scene, |e| {
                if rect == original {
                    e.state()
                } else {
                    e.scaled_state(&original, &rect)
                }
            })
    }

    pub fn release(&mut self, point: Point, uniform: bool) -> Result<bool> {
        self.drag(point, uniform)?;
        let Some(gesture) = self.gesture.take() else {
            return Ok(false);
        };
        let mut state = self.state.borrow_mut();
        match gesture.snapshot.finish(&state.scene, "Scale") {
            Some(changes) => {
                state.record_applied(EditCommand::Scale(changes));
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
