//! Editor state for UI integration.
//!
//! `EditorState` pairs the scene with its history and the editor
//! configuration. Menu actions and toolbar buttons call the `*_selected`
//! operations; each builds one command from the editable part of the
//! selection, applies it and records it. Operations that would change
//! nothing record nothing and return `Ok(false)`.

use laserkit_core::{EditorError, Result};
use laserkit_settings::EditorConfig;

use crate::commands::{self, Alignment, DistributeAxis, EditCommand, GeometryEdit, SameSizeMode};
use crate::history::History;
use crate::model::{Bounds, Color, Entity, EntityId, EntityKind, MirrorAxis, PathEntity, Point};
use crate::scene::Scene;

#[derive(Debug)]
pub struct EditorState {
    pub scene: Scene,
    pub history: History,
    config: EditorConfig,
    is_modified: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            scene: Scene::new(),
            history: History::new(config.history.capacity),
            config,
            is_modified: false,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Swaps in new settings; a smaller history capacity evicts immediately.
    pub fn set_config(&mut self, config: EditorConfig) {
        self.history.set_capacity(config.history.capacity);
        self.config = config;
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Called by the save collaborator once the document is written.
    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }

    /// Applies a command and records it.
    pub fn execute(&mut self, mut command: EditCommand) -> Result<()> {
        command.apply(&mut self.scene)?;
        self.record_applied(command);
        Ok(())
    }

    /// Records a command whose effect is already visible in the scene, as
    /// interaction controllers do on release.
    pub fn record_applied(&mut self, command: EditCommand) {
        self.history.record(command);
        self.is_modified = true;
    }

    fn execute_opt(&mut self, command: Option<EditCommand>) -> Result<bool> {
        match command {
            Some(command) => {
                self.execute(command)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn undo(&mut self) -> Result<bool> {
        let moved = self.history.undo(&mut self.scene)?;
        self.is_modified |= moved;
        Ok(moved)
    }

    pub fn redo(&mut self) -> Result<bool> {
        let moved = self.history.redo(&mut self.scene)?;
        self.is_modified |= moved;
        Ok(moved)
    }

    pub fn go_to(&mut self, index: usize) -> Result<bool> {
        let moved = self.history.go_to(&mut self.scene, index)?;
        self.is_modified |= moved;
        Ok(moved)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Inserts a new entity built from `kind` and records it.
    pub fn add_entity(&mut self, kind: EntityKind) -> Result<EntityId> {
        let id = self.scene.next_id();
        self.execute(EditCommand::add(Entity::new(id, kind)))?;
        Ok(id)
    }

    /// Inserts one path per point list. Each becomes its own history entry.
    pub fn import_paths(&mut self, paths: Vec<Vec<Point>>) -> Result<Vec<EntityId>> {
        let mut ids = Vec::with_capacity(paths.len());
        for points in paths {
            ids.push(self.add_entity(EntityKind::Path(PathEntity::new(points)))?);
        }
        tracing::info!(count = ids.len(), "Imported paths");
        Ok(ids)
    }

    fn targets(&self) -> Vec<EntityId> {
        self.scene.editable_selection()
    }

    pub fn select_all(&mut self) {
        self.scene.select_all();
    }

    pub fn deselect_all(&mut self) {
        self.scene.deselect_all();
    }

    /// Click selection using the configured hit tolerance.
    pub fn select_at(&mut self, point: Point, multi: bool) -> Option<EntityId> {
        let tolerance = self.config.interaction.hit_tolerance;
        self.scene.select_at(point, tolerance, multi)
    }

    pub fn select_in_rect(&mut self, x: f64, y: f64, width: f64, height: f64, multi: bool) -> usize {
        self.scene.select_in_rect(x, y, width, height, multi)
    }

    /// Selects one entity by id; with `extend` the current selection is kept.
    pub fn select_entity(&mut self, id: EntityId, extend: bool) -> Result<()> {
        self.require(id)?;
        self.scene.select(&[id], extend);
        Ok(())
    }

    /// Locks or unlocks an entity. Locking also drops it from the selection.
    pub fn set_locked(&mut self, id: EntityId, locked: bool) -> Result<()> {
        let entity = self.require_mut(id)?;
        entity.locked = locked;
        if locked {
            entity.selected = false;
        }
        self.scene.selection.refresh(&self.scene.store);
        Ok(())
    }

    /// Shows or hides an entity. Hiding also drops it from the selection.
    pub fn set_visible(&mut self, id: EntityId, visible: bool) -> Result<()> {
        let entity = self.require_mut(id)?;
        entity.visible = visible;
        if !visible {
            entity.selected = false;
        }
        self.scene.selection.refresh(&self.scene.store);
        Ok(())
    }

    fn require(&self, id: EntityId) -> Result<&Entity> {
        self.scene
            .entity(id)
            .ok_or_else(|| EditorError::UnknownEntity { id: id.0 }.into())
    }

    fn require_mut(&mut self, id: EntityId) -> Result<&mut Entity> {
        self.scene
            .entity_mut(id)
            .ok_or_else(|| EditorError::UnknownEntity { id: id.0 }.into())
    }

    pub fn selected_count(&self) -> usize {
        self.scene.selected_ids().len()
    }

    pub fn delete_selected(&mut self) -> Result<bool> {
        let cmd = EditCommand::delete(&self.scene, &self.targets());
        self.execute_opt(cmd)
    }

    pub fn move_selected(&mut self, dx: f64, dy: f64) -> Result<bool> {
        require_finite("offset", &[dx, dy])?;
        let cmd = commands::translate(&self.scene, &self.targets(), dx, dy);
        self.execute_opt(cmd)
    }

    /// Moves the selection by whole keyboard nudge steps.
    pub fn nudge_selected(&mut self, steps_x: f64, steps_y: f64) -> Result<bool> {
        require_finite("nudge", &[steps_x, steps_y])?;
        let step = self.config.interaction.nudge_step;
        let cmd = commands::nudge(&self.scene, &self.targets(), steps_x * step, steps_y * step);
        self.execute_opt(cmd)
    }

    pub fn mirror_selected(&mut self, axis: MirrorAxis) -> Result<bool> {
        let cmd = commands::mirror(&self.scene, &self.targets(), axis);
        self.execute_opt(cmd)
    }

    pub fn mirror_copy_selected(&mut self, axis: MirrorAxis) -> Result<bool> {
        let targets = self.targets();
        let gap = self.config.interaction.mirror_copy_gap;
        let cmd = commands::mirror_copy(&mut self.scene, &targets, axis, gap);
        self.execute_opt(cmd)
    }

    pub fn align_selected(&mut self, alignment: Alignment) -> Result<bool> {
        let cmd = commands::align(&self.scene, &self.targets(), alignment);
        self.execute_opt(cmd)
    }

    pub fn align_selected_to_page(&mut self, alignment: Alignment) -> Result<bool> {
        let area = self.config.work_area;
        let page = Bounds::from_rect(area.x, area.y, area.width, area.height);
        let cmd = commands::align_to_page(&self.scene, &self.targets(), &page, alignment);
        self.execute_opt(cmd)
    }

    pub fn distribute_selected(&mut self, axis: DistributeAxis) -> Result<bool> {
        let cmd = commands::distribute(&self.scene, &self.targets(), axis);
        self.execute_opt(cmd)
    }

    pub fn same_size_selected(&mut self, mode: SameSizeMode) -> Result<bool> {
        let cmd = commands::same_size(&self.scene, &self.targets(), mode);
        self.execute_opt(cmd)
    }

    /// Rotates each selected entity by `degrees` about its own pivot.
    pub fn rotate_selected_by(&mut self, degrees: f64) -> Result<bool> {
        require_finite("angle", &[degrees])?;
        let cmd = commands::rotate_by(&self.scene, &self.targets(), degrees.to_radians());
        self.execute_opt(cmd)
    }

    /// Turns every selected entity to the absolute heading `degrees`.
    pub fn rotate_selected_to(&mut self, degrees: f64) -> Result<bool> {
        require_finite("angle", &[degrees])?;
        let cmd = commands::rotate_to(&self.scene, &self.targets(), degrees.to_radians());
        self.execute_opt(cmd)
    }

    pub fn change_selected_color(&mut self, color: Color) -> Result<bool> {
        let cmd = EditCommand::change_color(&self.scene, &self.targets(), color);
        self.execute_opt(cmd)
    }

    /// Moves and/or resizes the selection's union bounds (numeric X/Y/W/H).
    pub fn set_selection_geometry(&mut self, edit: GeometryEdit) -> Result<bool> {
        let given: Vec<f64> = [edit.x, edit.y, edit.width, edit.height]
            .into_iter()
            .flatten()
            .collect();
        require_finite("geometry", &given)?;
        let min_extent = self.config.interaction.min_extent;
        let cmd = commands::set_geometry(&self.scene, &self.targets(), edit, min_extent);
        self.execute_opt(cmd)
    }

    /// Places the fiducial, replacing any existing one.
    pub fn place_fiducial(&mut self, position: Point, size: f64) -> Result<()> {
        require_finite("fiducial position", &[position.x, position.y])?;
        let cmd = EditCommand::fiducial_add(&self.scene, position, size);
        self.execute(cmd)
    }

    pub fn remove_fiducial(&mut self) -> Result<bool> {
        let cmd = EditCommand::fiducial_remove(&self.scene);
        self.execute_opt(cmd)
    }

    pub fn set_fiducial_size(&mut self, size: f64) -> Result<bool> {
        if !(size.is_finite() && size > 0.0) {
            tracing::warn!(size, "Rejected fiducial size");
            return Err(EditorError::InvalidInput {
                reason: format!("fiducial size must be positive, got {}", size),
            }
            .into());
        }
        let cmd = EditCommand::fiducial_resize(&self.scene, size);
        self.execute_opt(cmd)
    }
}

/// Rejects NaN and infinities before they reach any entity geometry.
fn require_finite(what: &str, values: &[f64]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        return Ok(());
    }
    tracing::warn!(what, ?values, "Rejected non-finite input");
    Err(EditorError::InvalidInput {
        reason: format!("{} {:?} is not a finite number", what, values),
    }
    .into())
}
