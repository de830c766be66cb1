//! Scene: the entity container, the current selection and the fiducial
//! marker.

mod selection;
mod store;

pub use selection::SelectionManager;
pub use store::EntityStore;

use serde::{Deserialize, Serialize};

use crate::model::{Bounds, Entity, EntityId, Point};

/// Alignment marker. Exported coordinates are shifted so that its position
/// becomes the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fiducial {
    pub position: Point,
    pub size: f64,
}

impl Fiducial {
    pub fn new(position: Point, size: f64) -> Self {
        Self { position, size }
    }
}

/// All entities on the canvas plus the selection over them.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub store: EntityStore,
    pub selection: SelectionManager,
    fiducial: Option<Fiducial>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            store: EntityStore::new(),
            selection: SelectionManager::new(),
            fiducial: None,
        }
    }

    pub fn next_id(&mut self) -> EntityId {
        self.store.generate_id()
    }

    /// Inserts on top. Returns `false` if the entity is already present.
    pub fn add_entity(&mut self, entity: Entity) -> bool {
        self.store.insert(entity)
    }

    /// Inserts at a z index. Returns `false` if the entity is already present.
    pub fn insert_entity_at(&mut self, index: usize, entity: Entity) -> bool {
        self.store.insert_at(index, entity)
    }

    /// Takes an entity out of the scene, returning it with its former z index.
    pub fn remove_entity(&mut self, id: EntityId) -> Option<(usize, Entity)> {
        let removed = self.store.remove(id);
        self.selection.refresh(&self.store);
        removed
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.store.get(id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.store.get_mut(id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.store.contains(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Entities from bottom to top.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.store.iter()
    }

    pub fn z_index(&self, id: EntityId) -> Option<usize> {
        self.store.z_index(id)
    }

    pub fn selected_entities(&self) -> Vec<&Entity> {
        self.store.iter().filter(|e| e.selected).collect()
    }

    pub fn selected_ids(&self) -> Vec<EntityId> {
        self.selection.selected_ids(&self.store)
    }

    /// Selected entities that are visible and unlocked, bottom to top.
    pub fn editable_selection(&self) -> Vec<EntityId> {
        self.store
            .iter()
            .filter(|e| e.selected && e.is_editable())
            .map(|e| e.id)
            .collect()
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(&mut self.store);
    }

    pub fn deselect_all(&mut self) {
        self.selection.deselect_all(&mut self.store);
    }

    pub fn select(&mut self, ids: &[EntityId], extend: bool) {
        self.selection.select_ids(&mut self.store, ids, extend);
    }

    pub fn select_at(&mut self, point: Point, tolerance: f64, multi: bool) -> Option<EntityId> {
        self.selection
            .select_at(&mut self.store, point, tolerance, multi)
    }

    pub fn select_in_rect(&mut self, x: f64, y: f64, width: f64, height: f64, multi: bool) -> usize {
        self.selection
            .select_in_rect(&mut self.store, x, y, width, height, multi)
    }

    /// Union of the bounds of the given entities that are still present.
    pub fn bounds_of(&self, ids: &[EntityId]) -> Option<Bounds> {
        Bounds::union_all(ids.iter().filter_map(|id| self.entity(*id)).map(|e| e.bounds()))
    }

    /// Union bounds of the editable selection.
    pub fn selection_bounds(&self) -> Option<Bounds> {
        self.bounds_of(&self.editable_selection())
    }

    pub fn fiducial(&self) -> Option<Fiducial> {
        self.fiducial
    }

    pub(crate) fn replace_fiducial(&mut self, fiducial: Option<Fiducial>) -> Option<Fiducial> {
        std::mem::replace(&mut self.fiducial, fiducial)
    }

    /// Vector that moves the fiducial to the origin, zero without one.
    pub fn export_offset(&self) -> Point {
        match self.fiducial {
            Some(f) => Point::new(-f.position.x, -f.position.y),
            None => Point::default(),
        }
    }
}
