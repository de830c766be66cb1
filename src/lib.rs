//! # LaserKit
//!
//! Editing core for preparing laser cutting and engraving jobs.
//!
//! ## Architecture
//!
//! LaserKit is organized as a workspace with multiple crates:
//!
//! 1. **laserkit-core** - Error taxonomy, constants, subscription handles, sharing aliases
//! 2. **laserkit-settings** - Editor configuration and its persistence
//! 3. **laserkit-editor** - Scene, reversible commands, undo/redo history, interaction controllers
//! 4. **laserkit** - Facade that re-exports the crates and sets up logging
//!
//! ## Features
//!
//! - **Entities**: Paths edited by points; images and text placed by an affine transform
//! - **Commands**: Add, delete, move, scale, rotate, mirror, mirror copy, align,
//!   distribute, same size, recolor and fiducial placement, all undoable
//! - **History**: Cursor-based undo/redo with a capacity bound and observers
//! - **Interaction**: Drag-move, rotate handle with angle snapping, eight scale
//!   handles, node editing and numeric angle entry

pub use laserkit_editor as editor;
pub use laserkit_settings as settings;

pub use laserkit_core::{EditorError, Error, Result, Shared, SubscriptionId};
pub use laserkit_editor::{
    Alignment, AngleInputController, Bounds, Color, DistributeAxis, DragMoveController,
    EditCommand, EditorState, Entity, EntityId, EntityKind, EntityState, Handle, History,
    HistoryEvent, MirrorAxis, NodeEditController, PathEntity, Point, RotateController,
    SameSizeMode, ScaleController, Scene,
};
pub use laserkit_settings::{EditorConfig, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, `info` when unset
///
/// A second call leaves the first subscriber in place.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Logging already initialized");
    }

    Ok(())
}
