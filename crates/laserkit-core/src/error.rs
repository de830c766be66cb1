//! Error handling for LaserKit
//!
//! The editing core degrades gracefully for user-shaped problems (history
//! bounds, degenerate gestures, stale entity references are clamped or
//! skipped, never reported). What remains here are the failures a caller
//! must see:
//! - Editor errors (invariant violations and rejected input)
//! - I/O errors from collaborators
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Editor error type
///
/// Represents violations of the editing core's invariants and input the
/// core refuses to act on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// A geometric state was applied to an entity that uses the other
    /// mutation protocol (points vs. affine transform).
    #[error("Entity {entity} uses the {expected} protocol but received a {found} state")]
    ProtocolMismatch {
        /// The entity the state was applied to.
        entity: u64,
        /// The protocol the entity kind requires.
        expected: &'static str,
        /// The protocol of the state that was supplied.
        found: &'static str,
    },

    /// An operation addressed a single entity that is not in the scene.
    #[error("Entity {id} not found")]
    UnknownEntity {
        /// The missing entity id.
        id: u64,
    },

    /// Input the core cannot interpret.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected.
        reason: String,
    },
}

/// Main error type for LaserKit
///
/// A unified error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Editor error
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error signals a broken core invariant
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Error::Editor(EditorError::ProtocolMismatch { .. }))
    }

    /// Check if this is an editor error
    pub fn is_editor_error(&self) -> bool {
        matches!(self, Error::Editor(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
