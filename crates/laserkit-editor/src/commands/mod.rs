//! Reversible edit commands.
//!
//! Every persisted change to the scene goes through an [`EditCommand`].
//! Geometry changes store one before/after [`StateChange`] per entity, so a
//! single command can cover paths and affine entities at once. Builders in
//! [`arrange`] and [`transform`] derive those pairs from the scene and return
//! `None` when the edit would change nothing, so the caller has nothing to
//! record.
//!
//! An entity that has vanished from the scene by the time a command runs is
//! skipped with a warning; the rest of the batch still applies.

pub mod arrange;
pub mod transform;

pub use arrange::{align, align_to_page, distribute, same_size, Alignment, DistributeAxis, SameSizeMode};
pub use transform::{
    mirror, mirror_copy, nudge, rotate_by, rotate_to, set_geometry, translate, GeometryEdit, MirrorCopy,
};

use laserkit_core::Result;

use crate::model::{Color, Entity, EntityId, EntityState, Point};
use crate::scene::{Fiducial, Scene};

/// Before/after geometry of one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct StateChange {
    pub id: EntityId,
    pub old: EntityState,
    pub new: EntityState,
}

/// A batch of geometry changes under one history label.
#[derive(Debug, Clone, PartialEq)]
pub struct StateChanges {
    pub label: String,
    pub changes: Vec<StateChange>,
}

impl StateChanges {
    pub fn new(label: impl Into<String>, changes: Vec<StateChange>) -> Self {
        Self {
            label: label.into(),
            changes,
        }
    }

    /// Builds the batch from `(id, new state)` pairs, reading the current
    /// state from the scene. Entities whose state would not change are left
    /// out. Returns `None` for an empty batch.
    pub fn collect(
        scene: &Scene,
        label: impl Into<String>,
        targets: impl IntoIterator<Item = (EntityId, EntityState)>,
    ) -> Option<Self> {
        let changes: Vec<StateChange> = targets
            .into_iter()
            .filter_map(|(id, new)| {
                let old = scene.entity(id)?.state();
                (old != new).then_some(StateChange { id, old, new })
            })
            .collect();
        if changes.is_empty() {
            None
        } else {
            Some(Self::new(label, changes))
        }
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.changes.iter().map(|c| c.id).collect()
    }

    fn apply(&self, scene: &mut Scene) -> Result<()> {
        for change in &self.changes {
            set_state(scene, change.id, &change.new, &self.label)?;
        }
        Ok(())
    }

    fn revert(&self, scene: &mut Scene) -> Result<()> {
        for change in self.changes.iter().rev() {
            set_state(scene, change.id, &change.old, &self.label)?;
        }
        Ok(())
    }
}

fn set_state(scene: &mut Scene, id: EntityId, state: &EntityState, label: &str) -> Result<()> {
    match scene.entity_mut(id) {
        Some(entity) => entity.set_state(state.clone()).map_err(|e| {
            tracing::error!(entity = %id, command = label, error = %e, "State protocol mismatch");
            e.into()
        }),
        None => {
            tracing::warn!(entity = %id, command = label, "Skipping entity no longer in scene");
            Ok(())
        }
    }
}

/// Inserts one entity. `entity` is `None` while it is in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct AddEntity {
    pub id: EntityId,
    pub z_index: Option<usize>,
    pub entity: Option<Entity>,
}

/// One entity removed by a delete, with the z index it had when the command
/// was built.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletedEntity {
    pub id: EntityId,
    pub z_index: usize,
    pub entity: Option<Entity>,
}

/// Removes entities; reverting puts them back at their original z indices.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteEntities {
    /// Sorted bottom to top.
    pub entries: Vec<DeletedEntity>,
}

impl DeleteEntities {
    /// Snapshots the stacking of the ids present in the scene. `None` when
    /// none of them are.
    pub fn new(scene: &Scene, ids: &[EntityId]) -> Option<Self> {
        let mut entries: Vec<DeletedEntity> = ids
            .iter()
            .filter_map(|id| {
                scene.z_index(*id).map(|z_index| DeletedEntity {
                    id: *id,
                    z_index,
                    entity: None,
                })
            })
            .collect();
        if entries.is_empty() {
            return None;
        }
        entries.sort_by_key(|e| e.z_index);
        entries.dedup_by_key(|e| e.id);
        Some(Self { entries })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorChange {
    pub id: EntityId,
    pub old: Color,
    pub new: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiducialAdd {
    pub new: Fiducial,
    pub previous: Option<Fiducial>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiducialRemove {
    pub removed: Fiducial,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiducialResize {
    pub old: f64,
    pub new: f64,
}

/// A reversible unit of change over the scene.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum EditCommand {
    Add(AddEntity),
    Delete(DeleteEntities),
    Move(StateChanges),
    Scale(StateChanges),
    Rotate(StateChanges),
    Mirror(StateChanges),
    MirrorCopy(MirrorCopy),
    Align(StateChanges),
    ChangeColor(Vec<ColorChange>),
    FiducialAdd(FiducialAdd),
    FiducialRemove(FiducialRemove),
    FiducialResize(FiducialResize),
}

impl EditCommand {
    /// Add command for an entity that is not in the scene yet.
    pub fn add(entity: Entity) -> Self {
        EditCommand::Add(AddEntity {
            id: entity.id,
            z_index: None,
            entity: Some(entity),
        })
    }

    /// Add command for an entity the caller already inserted.
    pub fn added(id: EntityId) -> Self {
        EditCommand::Add(AddEntity {
            id,
            z_index: None,
            entity: None,
        })
    }

    pub fn delete(scene: &Scene, ids: &[EntityId]) -> Option<Self> {
        DeleteEntities::new(scene, ids).map(EditCommand::Delete)
    }

    /// Recolors path strokes and text. Images and entities already in
    /// `color` are left out.
    pub fn change_color(scene: &Scene, ids: &[EntityId], color: Color) -> Option<Self> {
        let changes: Vec<ColorChange> = ids
            .iter()
            .filter_map(|id| {
                let old = scene.entity(*id)?.color()?;
                (old != color).then_some(ColorChange {
                    id: *id,
                    old,
                    new: color,
                })
            })
            .collect();
        (!changes.is_empty()).then_some(EditCommand::ChangeColor(changes))
    }

    /// Places the fiducial, replacing any existing one.
    pub fn fiducial_add(scene: &Scene, position: Point, size: f64) -> Self {
        EditCommand::FiducialAdd(FiducialAdd {
            new: Fiducial::new(position, size),
            previous: scene.fiducial(),
        })
    }

    pub fn fiducial_remove(scene: &Scene) -> Option<Self> {
        scene
            .fiducial()
            .map(|removed| EditCommand::FiducialRemove(FiducialRemove { removed }))
    }

    pub fn fiducial_resize(scene: &Scene, size: f64) -> Option<Self> {
        let old = scene.fiducial()?.size;
        (old != size).then_some(EditCommand::FiducialResize(FiducialResize { old, new: size }))
    }

    /// Text shown in the history list.
    pub fn label(&self) -> &str {
        match self {
            EditCommand::Add(_) => "Add",
            EditCommand::Delete(_) => "Delete",
            EditCommand::Move(c)
            | EditCommand::Scale(c)
            | EditCommand::Rotate(c)
            | EditCommand::Mirror(c)
            | EditCommand::Align(c) => &c.label,
            EditCommand::MirrorCopy(_) => "Mirror Copy",
            EditCommand::ChangeColor(_) => "Change Color",
            EditCommand::FiducialAdd(_) => "Add Fiducial",
            EditCommand::FiducialRemove(_) => "Remove Fiducial",
            EditCommand::FiducialResize(_) => "Fiducial Size",
        }
    }

    /// Performs the change. Calling it again without a `revert` in between
    /// leaves the scene as it is.
    pub fn apply(&mut self, scene: &mut Scene) -> Result<()> {
        match self {
            EditCommand::Add(cmd) => {
                if let Some(entity) = cmd.entity.take() {
                    match cmd.z_index {
                        Some(z) => scene.insert_entity_at(z, entity),
                        None => scene.add_entity(entity),
                    };
                }
            }
            EditCommand::Delete(cmd) => {
                for entry in cmd.entries.iter_mut().rev() {
                    if entry.entity.is_some() {
                        continue;
                    }
                    match scene.remove_entity(entry.id) {
                        Some((_, entity)) => entry.entity = Some(entity),
                        None => {
                            tracing::warn!(entity = %entry.id, "Skipping delete of missing entity")
                        }
                    }
                }
            }
            EditCommand::Move(c)
            | EditCommand::Scale(c)
            | EditCommand::Rotate(c)
            | EditCommand::Mirror(c)
            | EditCommand::Align(c) => c.apply(scene)?,
            EditCommand::MirrorCopy(cmd) => cmd.apply(scene),
            EditCommand::ChangeColor(changes) => {
                for change in changes.iter() {
                    recolor(scene, change.id, change.new);
                }
            }
            EditCommand::FiducialAdd(cmd) => {
                scene.replace_fiducial(Some(cmd.new));
            }
            EditCommand::FiducialRemove(_) => {
                scene.replace_fiducial(None);
            }
            EditCommand::FiducialResize(cmd) => resize_fiducial(scene, cmd.new),
        }
        Ok(())
    }

    /// Restores the state from before [`apply`](Self::apply).
    pub fn revert(&mut self, scene: &mut Scene) -> Result<()> {
        match self {
            EditCommand::Add(cmd) => match scene.remove_entity(cmd.id) {
                Some((z, entity)) => {
                    cmd.z_index = Some(z);
                    cmd.entity = Some(entity);
                }
                None => tracing::warn!(entity = %cmd.id, "Skipping removal of missing entity"),
            },
            EditCommand::Delete(cmd) => {
                for entry in cmd.entries.iter_mut() {
                    if let Some(entity) = entry.entity.take() {
                        scene.insert_entity_at(entry.z_index, entity);
                    }
                }
            }
            EditCommand::Move(c)
            | EditCommand::Scale(c)
            | EditCommand::Rotate(c)
            | EditCommand::Mirror(c)
            | EditCommand::Align(c) => c.revert(scene)?,
            EditCommand::MirrorCopy(cmd) => cmd.revert(scene),
            EditCommand::ChangeColor(changes) => {
                for change in changes.iter().rev() {
                    recolor(scene, change.id, change.old);
                }
            }
            EditCommand::FiducialAdd(cmd) => {
                scene.replace_fiducial(cmd.previous);
            }
            EditCommand::FiducialRemove(cmd) => {
                scene.replace_fiducial(Some(cmd.removed));
            }
            EditCommand::FiducialResize(cmd) => resize_fiducial(scene, cmd.old),
        }
        Ok(())
    }
}

fn recolor(scene: &mut Scene, id: EntityId, color: Color) {
    match scene.entity_mut(id) {
        Some(entity) => {
            entity.set_color(color);
        }
        None => tracing::warn!(entity = %id, "Skipping recolor of missing entity"),
    }
}

fn resize_fiducial(scene: &mut Scene, size: f64) {
    match scene.fiducial() {
        Some(f) => {
            scene.replace_fiducial(Some(Fiducial::new(f.position, size)));
        }
        None => tracing::warn!("Skipping fiducial resize, no fiducial placed"),
    }
}
