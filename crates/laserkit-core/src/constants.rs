//! Editor-wide default values.
//!
//! These are the fallbacks used when no configuration file overrides them.

/// Number of commands kept in the undo history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Smallest width/height a scale gesture may produce, in scene units (mm).
pub const MIN_EXTENT: f64 = 1.0;

/// Angular step used when rotation snapping is requested.
pub const ROTATE_SNAP_DEGREES: f64 = 15.0;

/// Slack around entity bounds when hit-testing a pointer position.
pub const HIT_TOLERANCE: f64 = 3.0;

/// Distance between an entity and its mirrored copy.
pub const DEFAULT_MIRROR_GAP: f64 = 5.0;

/// Distance moved by a single keyboard nudge.
pub const DEFAULT_NUDGE_STEP: f64 = 1.0;

/// Default laser work area width in mm.
pub const DEFAULT_WORK_WIDTH_MM: f64 = 400.0;

/// Default laser work area height in mm.
pub const DEFAULT_WORK_HEIGHT_MM: f64 = 300.0;

/// Values closer than this are treated as equal when comparing geometry.
pub const GEOMETRY_EPSILON: f64 = 1e-9;
