//! LaserKit Settings Crate
//!
//! Handles editor configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{EditorConfig, HistorySettings, InteractionSettings, WorkArea};
pub use error::{SettingsError, SettingsResult};
