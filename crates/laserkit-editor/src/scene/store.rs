use std::collections::HashMap;

use crate::model::{Entity, EntityId};

/// Owns every entity in the scene together with its stacking order.
///
/// The z index of an entity is its position in `draw_order`; index 0 is
/// drawn first (bottom-most).
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    entities: HashMap<EntityId, Entity>,
    draw_order: Vec<EntityId>,
    next_id: u64,
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            entities: HashMap::new(),
            draw_order: Vec::new(),
            next_id: 1,
        }
    }

    /// Hands out an id that no entity in this store has used.
    pub fn generate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Puts the entity on top. Returns `false` if its id is already present.
    pub fn insert(&mut self, entity: Entity) -> bool {
        let top = self.draw_order.len();
        self.insert_at(top, entity)
    }

    /// Puts the entity at z index `index` (clamped to the stack height).
    /// Returns `false` if its id is already present.
    pub fn insert_at(&mut self, index: usize, entity: Entity) -> bool {
        let id = entity.id;
        if self.entities.contains_key(&id) {
            return false;
        }
        if id.0 >= self.next_id {
            self.next_id = id.0 + 1;
        }
        let index = index.min(self.draw_order.len());
        self.draw_order.insert(index, id);
        self.entities.insert(id, entity);
        true
    }

    /// Takes the entity out, returning it with the z index it had.
    pub fn remove(&mut self, id: EntityId) -> Option<(usize, Entity)> {
        let entity = self.entities.remove(&id)?;
        let index = self
            .draw_order
            .iter()
            .position(|other| *other == id)
            .unwrap_or(self.draw_order.len());
        if index < self.draw_order.len() {
            self.draw_order.remove(index);
        }
        Some((index, entity))
    }

    pub fn z_index(&self, id: EntityId) -> Option<usize> {
        self.draw_order.iter().position(|other| *other == id)
    }

    /// Ids from bottom to top.
    pub fn draw_order(&self) -> &[EntityId] {
        &self.draw_order
    }

    /// Entities from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.draw_order
            .iter()
            .filter_map(move |id| self.entities.get(id))
    }

    /// Unordered mutable access.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.values_mut()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
        self.draw_order.clear();
    }
}
