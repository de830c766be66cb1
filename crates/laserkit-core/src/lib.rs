//! # LaserKit Core
//!
//! Core types and utilities shared by the LaserKit crates.
//! Provides the error taxonomy, editor-wide constants, subscription
//! handles and the single-threaded sharing aliases used by the
//! interaction layer.

pub mod constants;
pub mod error;
pub mod subscription;
pub mod types;

pub use error::{EditorError, Error, Result};
pub use subscription::SubscriptionId;

// Re-export type aliases for convenience
pub use types::{shared, Shared, UiDataCallback};
