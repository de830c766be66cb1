//! Configuration for the LaserKit editing core
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform-specific config directory.
//!
//! Configuration is organized into logical sections:
//! - History settings (undo depth)
//! - Interaction tuning (snapping, clamping, hit-testing, copy gaps)
//! - Work area (the page rectangle jobs are aligned against)

use crate::error::{SettingsError, SettingsResult};
use laserkit_core::constants;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Undo history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of recorded commands; older entries are evicted
    pub capacity: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            capacity: constants::DEFAULT_HISTORY_CAPACITY,
        }
    }
}

/// Interaction controller tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Step used when a rotate gesture is snapped
    pub rotate_snap_degrees: f64,
    /// Smallest extent a scale gesture may produce
    pub min_extent: f64,
    /// Pointer slack for selection and node handles
    pub hit_tolerance: f64,
    /// Distance between an entity and its mirrored copy
    pub mirror_copy_gap: f64,
    /// Distance moved by one keyboard nudge
    pub nudge_step: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            rotate_snap_degrees: constants::ROTATE_SNAP_DEGREES,
            min_extent: constants::MIN_EXTENT,
            hit_tolerance: constants::HIT_TOLERANCE,
            mirror_copy_gap: constants::DEFAULT_MIRROR_GAP,
            nudge_step: constants::DEFAULT_NUDGE_STEP,
        }
    }
}

/// Laser work area (page) in scene units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for WorkArea {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: constants::DEFAULT_WORK_WIDTH_MM,
            height: constants::DEFAULT_WORK_HEIGHT_MM,
        }
    }
}

impl WorkArea {
    /// Returns the area as `(min_x, min_y, max_x, max_y)`.
    pub fn extents(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Undo history settings
    pub history: HistorySettings,
    /// Interaction controller tuning
    pub interaction: InteractionSettings,
    /// Page rectangle used by align-to-page
    pub work_area: WorkArea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Load from `path`, falling back to defaults when the file is missing
    /// or unusable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No editor config, using defaults");
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring editor config");
                Self::default()
            }
        }
    }

    /// Platform config location, e.g. `~/.config/laserkit/editor.toml`
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no config directory for this platform".to_string())
        })?;
        Ok(dir.join("laserkit").join("editor.toml"))
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.history.capacity == 0 {
            return Err(SettingsError::invalid(
                "history.capacity",
                "must be at least 1",
            ));
        }

        let i = &self.interaction;
        if !(i.rotate_snap_degrees.is_finite() && i.rotate_snap_degrees > 0.0) {
            return Err(SettingsError::invalid(
                "interaction.rotate_snap_degrees",
                "must be positive",
            ));
        }
        if !(i.min_extent.is_finite() && i.min_extent > 0.0) {
            return Err(SettingsError::invalid(
                "interaction.min_extent",
                "must be positive",
            ));
        }
        if !(i.hit_tolerance.is_finite() && i.hit_tolerance >= 0.0) {
            return Err(SettingsError::invalid(
                "interaction.hit_tolerance",
                "must not be negative",
            ));
        }
        if !(i.mirror_copy_gap.is_finite() && i.mirror_copy_gap >= 0.0) {
            return Err(SettingsError::invalid(
                "interaction.mirror_copy_gap",
                "must not be negative",
            ));
        }
        if !i.nudge_step.is_finite() {
            return Err(SettingsError::invalid(
                "interaction.nudge_step",
                "must be finite",
            ));
        }

        let w = &self.work_area;
        if !(w.width > 0.0 && w.height > 0.0) {
            return Err(SettingsError::invalid(
                "work_area",
                format!("size must be positive, got {}x{}", w.width, w.height),
            ));
        }

        Ok(())
    }
}
