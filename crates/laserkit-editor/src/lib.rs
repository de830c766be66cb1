//! # LaserKit Editor
//!
//! The editing core of the LaserKit laser layout editor: the scene of
//! placed entities, the reversible commands that change it, the undo/redo
//! history that records them and the pointer-gesture controllers that turn
//! mouse input into commands.
//!
//! ## Architecture
//!
//! ```text
//! EditorState
//!   ├── Scene (entities in draw order, selection, fiducial)
//!   ├── History (cursor-based, capacity-bounded)
//!   └── EditorConfig (history, interaction, work area)
//!
//! EditCommand (Add, Delete, Move, Scale, Rotate, Mirror, MirrorCopy,
//!              Align, ChangeColor, Fiducial*)
//!
//! Controllers (drag-move, rotate, scale handles, node edit, angle input)
//!   └── Shared<EditorState>
//! ```
//!
//! Entities come in two geometric flavours. Paths are edited through
//! their points; images and text keep fixed content and are placed by an
//! affine transform. Commands snapshot whichever state the entity uses, so
//! undo restores it exactly.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use laserkit_editor::{EditorState, Point};
//!
//! let mut editor = EditorState::new();
//! editor.import_paths(vec![vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]])?;
//! editor.select_all();
//! editor.move_selected(5.0, 0.0)?;
//! editor.undo()?;
//! ```

pub mod commands;
pub mod controllers;
pub mod editor;
pub mod history;
pub mod model;
pub mod scene;

pub use commands::{
    Alignment, DistributeAxis, EditCommand, GeometryEdit, SameSizeMode, StateChange, StateChanges,
};
pub use controllers::{
    AngleInputController, DragMoveController, Handle, NodeEditController, RotateController,
    ScaleController,
};
pub use editor::EditorState;
pub use history::{History, HistoryEntry, HistoryEvent};
pub use model::{
    Affine, Bounds, Color, Entity, EntityId, EntityKind, EntityState, ImageEntity, MirrorAxis,
    PathEntity, Point, TextEntity,
};
pub use scene::{Fiducial, Scene};
